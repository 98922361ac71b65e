use crate::config::EnvironmentConfig;
use axum::extract::{Request, State};
use axum::http::{StatusCode, Uri, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

const EXEMPT_PATHS: &[&str] = &["/health"];

#[derive(Debug, Clone)]
pub struct RedirectPolicy {
    enabled: bool,
    https_port: Option<u16>,
    exempt: &'static [&'static str],
}

impl RedirectPolicy {
    pub fn from_config(config: &EnvironmentConfig) -> Self {
        Self {
            enabled: config.https_redirect && config.http_ssl.is_none(),
            https_port: config.https_port,
            exempt: EXEMPT_PATHS,
        }
    }

    fn is_exempt(&self, path: &str) -> bool {
        self.exempt
            .iter()
            .any(|prefix| starts_with_segment(path, prefix))
    }

    fn secure_location(&self, host: &str, uri: &Uri) -> String {
        let host = host.split(':').next().unwrap_or(host);
        let path = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");

        match self.https_port {
            Some(port) if port != 443 => format!("https://{host}:{port}{path}"),
            _ => format!("https://{host}{path}"),
        }
    }
}

pub async fn enforce(
    State(policy): State<RedirectPolicy>,
    request: Request,
    next: Next,
) -> Response {
    if !policy.enabled || policy.is_exempt(request.uri().path()) {
        return next.run(request).await;
    }

    let Some(host) = request_host(&request) else {
        return StatusCode::BAD_REQUEST.into_response();
    };

    let location = policy.secure_location(&host, request.uri());
    tracing::debug!(from = %request.uri(), to = %location, "Redirecting to secure transport");

    Redirect::temporary(&location).into_response()
}

fn request_host(request: &Request) -> Option<String> {
    if let Some(authority) = request.uri().authority() {
        return Some(authority.to_string());
    }

    request
        .headers()
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .map(ToOwned::to_owned)
}

fn starts_with_segment(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
