use crate::error::{ErrorCli, Result};
use reqwest::Client;
use sb_core::server::payload::backend::predict_response::PredictOutcome;
use sb_core::server::routes::{ApiPath, BackendApiHome, BackendApiPrediction};
use sb_core::types::prediction_request::PredictionRequest;
use std::time::Duration;

pub struct CliClient {
    client: Client,
    base_url: String,
}

impl CliClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        CliClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: ApiPath) -> String {
        format!("{}{}", self.base_url, path.as_str())
    }

    fn transport_error(&self, e: reqwest::Error) -> ErrorCli {
        if e.is_connect() {
            ErrorCli::ConnectionRefused(self.base_url.clone())
        } else if e.is_timeout() {
            ErrorCli::Timeout(self.base_url.clone())
        } else {
            ErrorCli::Http(e)
        }
    }

    /// `GET /`, returns the service greeting.
    pub async fn welcome(&self) -> Result<String> {
        let url = self.url(BackendApiHome::Welcome.path());
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?
            .error_for_status()?;
        Ok(response.text().await?)
    }

    /// Sends one `POST /predict` and returns the verdict text.
    ///
    /// An `{"error": ...}` body becomes [`ErrorCli::Service`]; any other body
    /// that is neither a result nor an error is [`ErrorCli::UnexpectedResponse`].
    pub async fn predict(&self, request: &PredictionRequest) -> Result<String> {
        let url = self.url(BackendApiPrediction::Predict.path());
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;
        match serde_json::from_str::<PredictOutcome>(&body) {
            Ok(PredictOutcome::Result(response)) => Ok(response.result),
            Ok(PredictOutcome::Error(response)) => Err(ErrorCli::Service(response.error)),
            Err(_) => Err(ErrorCli::UnexpectedResponse { status, body }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    fn chips() -> PredictionRequest {
        PredictionRequest {
            food_product: "Chips".into(),
            main_ingredient: "Potato".into(),
            sweetener: "None".into(),
            fat_oil: "Sunflower Oil".into(),
            seasoning: "Salt".into(),
            allergens: "None".into(),
            price: 2.5,
            customer_rating: 4.0,
        }
    }

    /// True once `buf` holds the request headers and the full body they announce.
    fn request_complete(buf: &[u8]) -> bool {
        let text = String::from_utf8_lossy(buf);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..header_end]
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        buf.len() >= header_end + 4 + content_length
    }

    /// Serves one canned response, then hands back the raw request it received.
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            let mut chunk = [0u8; 4096];
            while !request_complete(&received) {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                received.extend_from_slice(&chunk[..n]);
            }
            let response = format!(
                "{status_line}\r\n\
                 content-type: application/json\r\n\
                 content-length: {}\r\n\
                 connection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8(received).unwrap()
        });
        (format!("http://{addr}"), handle)
    }

    fn client(base_url: &str) -> CliClient {
        let client = Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        CliClient::with_client(client, base_url)
    }

    #[tokio::test]
    async fn test_predict_sends_one_json_post() {
        let (url, server) = serve_once(
            "HTTP/1.1 200 OK",
            r#"{"result":"This product does not contain allergens"}"#,
        )
        .await;

        let result = client(&url).predict(&chips()).await.unwrap();
        assert_eq!(result, "This product does not contain allergens");

        let raw = server.await.unwrap();
        assert!(raw.starts_with("POST /predict HTTP/1.1"));
        let body = &raw[raw.find("\r\n\r\n").unwrap() + 4..];
        let sent: PredictionRequest = serde_json::from_str(body).unwrap();
        assert_eq!(sent, chips());
    }

    #[tokio::test]
    async fn test_service_error_is_surfaced() {
        let (url, server) = serve_once(
            "HTTP/1.1 500 Internal Server Error",
            r#"{"error":"Column 'Colour' is not known by the encoder"}"#,
        )
        .await;

        let err = client(&url).predict(&chips()).await.unwrap_err();
        assert!(matches!(&err, ErrorCli::Service(msg) if msg.contains("Colour")));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_unexpected_body() {
        let (url, server) = serve_once("HTTP/1.1 200 OK", r#"{"status":"ok"}"#).await;
        let err = client(&url).predict(&chips()).await.unwrap_err();
        assert!(matches!(err, ErrorCli::UnexpectedResponse { status: 200, .. }));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_welcome() {
        let (url, server) = serve_once("HTTP/1.1 200 OK", "Welcome").await;
        assert_eq!(client(&url).welcome().await.unwrap(), "Welcome");
        assert!(server.await.unwrap().starts_with("GET / HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(&format!("http://{addr}/"))
            .predict(&chips())
            .await
            .unwrap_err();
        assert!(matches!(err, ErrorCli::ConnectionRefused(url) if url == format!("http://{addr}")));
    }
}
