use leptos::prelude::LeptosOptions;
use leptos_axum::AxumRouteListing;
use state::relay::{FormRelay, RelayConfig, RelayError};
use state::server::AppState;

pub struct AppStateBuilder {
    leptos_options: LeptosOptions,
    routes: Vec<AxumRouteListing>,
}

impl AppStateBuilder {
    pub fn new(leptos_options: LeptosOptions, routes: Vec<AxumRouteListing>) -> Self {
        Self {
            leptos_options,
            routes,
        }
    }

    /// Reads relay addresses from the environment
    pub fn build(self) -> Result<AppState, RelayError> {
        let config = RelayConfig::from_env()?;
        tracing::info!(
            registration = %config.registration,
            report = %config.report,
            "form relays configured"
        );

        Ok(AppState {
            leptos_options: self.leptos_options,
            routes: self.routes,
            relay: FormRelay::new(config),
        })
    }
}
