use leptos::prelude::*;
use leptos::server;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub version: String,
    pub backend: String,
}

#[server(endpoint = "healthz")]
pub async fn healthz() -> Result<Health, ServerFnError> {
    Ok(Health {
        version: env!("CARGO_PKG_VERSION").to_string(),
        backend: consts::BACKEND_BASE.to_string(),
    })
}
