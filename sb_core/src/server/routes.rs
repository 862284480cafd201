use tracing::info;

pub enum ApiPath {
    Static(&'static str),
}

impl ApiPath {
    pub fn as_str(&self) -> &str {
        match self {
            ApiPath::Static(s) => s,
        }
    }
}

#[derive(Debug, Clone)]
pub enum BackendApiHome {
    Welcome,
}

impl BackendApiHome {
    pub fn path(&self) -> ApiPath {
        match self {
            BackendApiHome::Welcome => ApiPath::Static("/"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum BackendApiPrediction {
    Predict,
}

impl BackendApiPrediction {
    pub fn path(&self) -> ApiPath {
        match self {
            BackendApiPrediction::Predict => ApiPath::Static("/predict"),
        }
    }
}

pub fn print_all_backend_api_paths() {
    for home in [BackendApiHome::Welcome].iter() {
        info!("GET  {}", home.path().as_str());
    }

    for prediction in [BackendApiPrediction::Predict].iter() {
        info!("POST {}", prediction.path().as_str());
    }
}
