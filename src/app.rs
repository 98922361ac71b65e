use crate::config::EnvironmentConfig;
use crate::redirect::{self, RedirectPolicy};
use crate::routes;
use axum::http::{HeaderValue, header};
use axum::middleware::{from_fn_with_state, map_response};
use axum::response::Response;
use axum::{Extension, Router};
use tower_http::cors::CorsLayer;
use utoipa::openapi::InfoBuilder;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_swagger_ui::SwaggerUi;

pub fn create_app(config: EnvironmentConfig) -> Router<()> {
    let policy = RedirectPolicy::from_config(&config);

    let (mut router, openapi) = OpenApiRouter::with_openapi(openapi())
        .routes(routes!(routes::infra::health))
        .routes(routes!(routes::infra::environment))
        .split_for_parts();

    if config.environment.is_development() {
        router = router.merge(SwaggerUi::new("/swagger").url("/swagger/v1/swagger.json", openapi));
    }

    let mut app = router
        .layer(Extension(config.environment))
        .layer(map_response(map_json_charset))
        .layer(from_fn_with_state(policy, redirect::enforce));

    if config.cors_permissive {
        app = app.layer(CorsLayer::permissive());
    }

    app
}

fn openapi() -> utoipa::openapi::OpenApi {
    let openapi_info = InfoBuilder::new()
        .title(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .description(Some(env!("CARGO_PKG_DESCRIPTION").to_string()))
        .build();

    utoipa::openapi::OpenApi::new(openapi_info, utoipa::openapi::Paths::new())
}

async fn map_json_charset(mut response: Response) -> Response {
    let Some(content_type) = response.headers_mut().get_mut(header::CONTENT_TYPE) else {
        return response;
    };

    const APPLICATION_JSON: HeaderValue = HeaderValue::from_static("application/json");
    if &*content_type == APPLICATION_JSON {
        *content_type = HeaderValue::from_static("application/json; charset=utf-8");
    }

    response
}
