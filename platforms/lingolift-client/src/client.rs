use lingolift_protocol::{Sentence, Token};
use log::{error, info};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::model::{AnalysisRequest, ErrorBody, InflectionRequest, Inflections};

const SYNTACTICAL_ANALYSIS: &str = "syntactical-analysis";
const INFLECTION: &str = "inflection";

/// Typed access to the backend's analysis endpoints.
///
/// Only `/syntactical-analysis` and `/inflection` are covered. The
/// backend's `/translation`, `/literal-translation` and
/// `/response-suggestion` endpoints are left out because their response
/// bodies have no agreed model yet.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl BackendClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(ClientError::Build)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Tokens of `sentence` with features and ancestors, as analyzed by
    /// the backend.
    pub async fn fetch_syntactical_analysis(
        &self,
        sentence: &str,
        language_code: Option<&str>,
    ) -> Result<Sentence, ClientError> {
        info!("fetching syntactical analysis for sentence '{sentence}'");
        let request = AnalysisRequest {
            sentence,
            language_code,
        };
        let tokens: Vec<Token> = self.post(SYNTACTICAL_ANALYSIS, &request).await?;
        Ok(Sentence::new(tokens)?)
    }

    pub async fn fetch_inflections(&self, word: &str) -> Result<Inflections, ClientError> {
        info!("fetching inflections for word '{word}'");
        self.post(INFLECTION, &InflectionRequest { word }).await
    }

    async fn post<B, T>(&self, endpoint: &'static str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(self.config.url(endpoint))
            .json(body)
            .send()
            .await
            .map_err(|source| ClientError::Transport { endpoint, source })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|source| ClientError::Transport { endpoint, source })?;

        if status == StatusCode::OK {
            info!("received /{endpoint} response: '{text}'");
            serde_json::from_str(&text).map_err(|source| ClientError::Decode { endpoint, source })
        } else {
            Err(failure(endpoint, status, text))
        }
    }
}

/// Maps a non-200 response to an error.
pub(crate) fn failure(endpoint: &'static str, status: StatusCode, body: String) -> ClientError {
    if status == StatusCode::BAD_REQUEST {
        error!("received 400 status code on /{endpoint}. Error: '{body}'");
        ClientError::Application {
            endpoint,
            message: error_message(&body),
        }
    } else {
        error!("received unexpected error from /{endpoint}: {status}, {body}");
        ClientError::Unexpected {
            endpoint,
            status: status.as_u16(),
            body,
        }
    }
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            error_message: serde_json::Value::String(message),
        }) => message,
        Ok(ErrorBody { error_message }) => error_message.to_string(),
        Err(_) => body.to_string(),
    }
}
