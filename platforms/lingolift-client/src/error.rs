use lingolift_protocol::ParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("could not build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
    #[error("request to /{endpoint} failed: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
    /// The backend rejected the request (status 400).
    #[error("/{endpoint} rejected the request: {message}")]
    Application {
        endpoint: &'static str,
        message: String,
    },
    #[error("unexpected status {status} from /{endpoint}: {body}")]
    Unexpected {
        endpoint: &'static str,
        status: u16,
        body: String,
    },
    #[error("could not decode /{endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("backend returned an invalid sentence: {0}")]
    Sentence(#[from] ParseError),
}
