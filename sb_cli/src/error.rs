use thiserror::Error;
pub type Result<T> = std::result::Result<T, ErrorCli>;

#[derive(Error, Debug)]
pub enum ErrorCli {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Could not connect to server at {0}. Is it running?")]
    ConnectionRefused(String),

    #[error("Request to {0} timed out")]
    Timeout(String),

    #[error("{0}")]
    Service(String),

    #[error("Unexpected response (HTTP {status}): {body}")]
    UnexpectedResponse { status: u16, body: String },

    #[error("Prompt failed: {0}")]
    Prompt(#[from] inquire::InquireError),

    #[error("{0} field(s) need fixing before submission")]
    InvalidForm(usize),
}
