use std::sync::Arc;

use consts::relay::{
    DEFAULT_REGISTRATION_RELAY, DEFAULT_REPORT_RELAY, REGISTRATION_RELAY_ENV, REPORT_RELAY_ENV,
};
use http::header::ACCEPT;
use reqwest::Url;
use serde_json::Value;
use thiserror::Error;
use utils::forms::{relay_accepted, FormKind, RelayForm, RelayOutcome};

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("invalid relay url in {var}: {reason}")]
    InvalidUrl { var: &'static str, reason: String },
    #[error("relay request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Where each kind of form is posted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub registration: Url,
    pub report: Url,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, RelayError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Unset or blank variables fall back to the built-in relay addresses
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, RelayError> {
        let read = |var: &'static str, default: &str| {
            let raw = lookup(var)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string());
            Url::parse(raw.trim()).map_err(|e| RelayError::InvalidUrl {
                var,
                reason: e.to_string(),
            })
        };
        Ok(Self {
            registration: read(REGISTRATION_RELAY_ENV, DEFAULT_REGISTRATION_RELAY)?,
            report: read(REPORT_RELAY_ENV, DEFAULT_REPORT_RELAY)?,
        })
    }

    pub fn endpoint(&self, kind: FormKind) -> &Url {
        match kind {
            FormKind::Registration => &self.registration,
            FormKind::Report => &self.report,
        }
    }
}

/// Posts validated forms to the mail relay
#[derive(Clone, Debug)]
pub struct FormRelay {
    client: reqwest::Client,
    config: Arc<RelayConfig>,
}

impl FormRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    pub async fn submit<F: RelayForm>(&self, form: &F) -> Result<RelayOutcome, RelayError> {
        let url = self.config.endpoint(F::KIND).clone();
        let res = self
            .client
            .post(url)
            .header(ACCEPT, "application/json")
            .json(&form.payload())
            .send()
            .await?;

        let status = res.status();
        let body: Value = res.json().await.unwrap_or(Value::Null);
        if relay_accepted(status.is_success(), &body) {
            log::info!("{:?} form relayed", F::KIND);
            Ok(RelayOutcome::Accepted)
        } else {
            log::warn!("relay refused {:?} form: {status} {body}", F::KIND);
            Ok(RelayOutcome::Rejected)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset_or_blank() {
        let config = RelayConfig::from_lookup(lookup(&[(REPORT_RELAY_ENV, "  ")])).unwrap();
        assert_eq!(config.registration.as_str(), DEFAULT_REGISTRATION_RELAY);
        assert_eq!(config.endpoint(FormKind::Report).as_str(), DEFAULT_REPORT_RELAY);
    }

    #[test]
    fn env_overrides_each_relay() {
        let config = RelayConfig::from_lookup(lookup(&[
            (REGISTRATION_RELAY_ENV, "http://localhost:9000/register"),
            (REPORT_RELAY_ENV, "http://localhost:9000/report"),
        ]))
        .unwrap();
        assert_eq!(
            config.endpoint(FormKind::Registration).as_str(),
            "http://localhost:9000/register"
        );
        assert_eq!(config.report.as_str(), "http://localhost:9000/report");
    }

    #[test]
    fn malformed_url_names_the_variable() {
        let err = RelayConfig::from_lookup(lookup(&[(REGISTRATION_RELAY_ENV, "not a url")]))
            .unwrap_err();
        assert!(err.to_string().contains(REGISTRATION_RELAY_ENV));
    }
}
