use axum::extract::FromRef;
use leptos::prelude::*;
use leptos_axum::AxumRouteListing;

use crate::relay::FormRelay;

#[derive(FromRef, Clone)]
pub struct AppState {
    pub leptos_options: LeptosOptions,
    pub routes: Vec<AxumRouteListing>,
    pub relay: FormRelay,
}
