use config::{Config, Environment};
use sample_service::config::EnvironmentConfig;
use sample_service::{app, telemetry};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let settings = Config::builder()
        .add_source(Environment::default().separator("__").try_parsing(true))
        .build()
        .expect("Failed to build settings");

    let cfg: EnvironmentConfig = settings
        .try_deserialize()
        .expect("Invalid environment variables");

    telemetry::setup().ok();

    let rustls_config = match &cfg.http_ssl {
        None => None,
        Some(s) => {
            rustls::crypto::aws_lc_rs::default_provider()
                .install_default()
                .expect("Failed to install rustls crypto provider");
            Some(s.to_rustls_config().await.expect("Valid SSL config"))
        }
    };

    let listener_address = cfg.listener_address();
    tracing::info!(environment = %cfg.environment, "Starting sample service");

    let app = app::create_app(cfg);

    let server_result = match rustls_config {
        None => {
            tracing::info!("🚀 Listening on http://{listener_address}");
            axum_server::bind(listener_address)
                .serve(app.into_make_service())
                .await
        }
        Some(rustls_config) => {
            tracing::info!("🚀 Listening on https://{listener_address}");
            axum_server::bind_rustls(listener_address, rustls_config)
                .serve(app.into_make_service())
                .await
        }
    };

    if let Err(error) = server_result {
        tracing::error!("Server exited with an error: {error:?}");
    }
}
