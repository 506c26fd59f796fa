use consts::{endpoints, BACKEND_BASE};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::profile::Platform;
use crate::upcoming::UpcomingResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request URL: {0}")]
    Url(String),
    #[error("Network error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Request failed with status code {0}")]
    Status(u16),
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// Anything that can answer a backend GET with JSON
#[allow(async_fn_in_trait)]
pub trait JsonSource {
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError>;
}

/// HTTP client for the external standings backend
#[derive(Clone, Debug)]
pub struct BackendClient {
    client: reqwest::Client,
    base: Url,
}

impl Default for BackendClient {
    fn default() -> Self {
        Self::new(BACKEND_BASE.clone())
    }
}

impl BackendClient {
    pub fn new(base: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base,
        }
    }

    /// `path` is appended verbatim, query string included
    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let joined = format!("{}{}", self.base.as_str().trim_end_matches('/'), path);
        Url::parse(&joined).map_err(|e| ApiError::Url(e.to_string()))
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

impl JsonSource for BackendClient {
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.fetch(path).await.inspect_err(|e| {
            log::error!("HTTP GET error: {path} {e}");
        })
    }
}

pub async fn fetch_ratings<S: JsonSource>(source: &S, platform: Platform) -> Result<Value, ApiError> {
    source.get_json(platform.ratings_endpoint()).await
}

pub async fn fetch_upcoming_contests<S: JsonSource>(source: &S) -> Result<UpcomingResponse, ApiError> {
    source.get_json(endpoints::UPCOMING_CONTESTS).await
}

pub fn atcoder_standings_path(contest_code: &str, handles: &[String]) -> String {
    format!(
        "{}?contestId={}&handles={}",
        endpoints::ATCODER_STANDINGS,
        urlencoding::encode(contest_code),
        urlencoding::encode(&handles.join(","))
    )
}

pub fn codeforces_standings_path(contest_id: &str) -> String {
    format!(
        "{}/{}",
        endpoints::CODEFORCES_STANDINGS,
        urlencoding::encode(contest_id)
    )
}

pub fn codechef_standings_path(code: &str) -> String {
    format!(
        "{}?code={}",
        endpoints::CODECHEF_STANDINGS,
        urlencoding::encode(code)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_path_to_base() {
        let client = BackendClient::new(Url::parse("https://be.example.com/").unwrap());
        assert_eq!(
            client.endpoint("/upcoming_contests").unwrap().as_str(),
            "https://be.example.com/upcoming_contests"
        );
        let nested = BackendClient::new(Url::parse("https://be.example.com/api").unwrap());
        assert_eq!(
            nested.endpoint("/codeforces_standings/1900").unwrap().as_str(),
            "https://be.example.com/api/codeforces_standings/1900"
        );
    }

    #[test]
    fn standings_paths_encode_their_arguments() {
        let handles = vec!["alice".to_string(), "bob_1".to_string()];
        assert_eq!(
            atcoder_standings_path("abc350", &handles),
            "/atcoder_standings?contestId=abc350&handles=alice%2Cbob_1"
        );
        assert_eq!(codeforces_standings_path("1900"), "/codeforces_standings/1900");
        assert_eq!(
            codechef_standings_path("START135 A"),
            "/codechef_standings?code=START135%20A"
        );
    }
}
