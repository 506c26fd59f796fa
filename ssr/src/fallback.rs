use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use leptos::prelude::*;
use state::server::AppState;
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::app::shell;

/// Serves files from the site root, rendering the app for anything else
pub async fn file_and_error_handler(
    State(state): State<AppState>,
    req: Request<Body>,
) -> Response {
    let options = state.leptos_options.clone();
    let uri = req.uri().clone();

    match get_static_file(uri, &options.site_root).await {
        Ok(res) if res.status() == StatusCode::OK => res,
        Ok(_) => {
            let relay = state.relay.clone();
            let handler = leptos_axum::render_app_to_stream_with_context(
                move || provide_context(relay.clone()),
                move || shell(options.clone()),
            );
            handler(req).await.into_response()
        }
        Err((status, msg)) => (status, msg).into_response(),
    }
}

async fn get_static_file(uri: Uri, root: &str) -> Result<Response, (StatusCode, String)> {
    let req = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;
    match ServeDir::new(root).oneshot(req).await {
        Ok(res) => Ok(res.map(Body::new)),
        Err(err) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Something went wrong: {err}"),
        )),
    }
}
