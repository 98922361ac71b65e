use anyhow::Context;
use axum_server::tls_rustls::RustlsConfig;
use serde::Deserialize;
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone, Deserialize)]
pub struct EnvironmentConfig {
    #[serde(default)]
    pub environment: HostEnvironment,

    #[serde(default)]
    pub cors_permissive: bool,

    #[serde(default)]
    pub https_redirect: bool,

    #[serde(default)]
    pub https_port: Option<u16>,

    #[serde(default)]
    pub listen_address: Option<SocketAddr>,

    #[serde(default)]
    pub http_ssl: Option<HttpSslConfig>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: HostEnvironment::default(),
            cors_permissive: false,
            https_redirect: false,
            https_port: None,
            listen_address: None,
            http_ssl: None,
        }
    }
}

impl EnvironmentConfig {
    pub fn listener_address(&self) -> SocketAddr {
        self.listen_address.unwrap_or_else(|| {
            if self.environment.is_development() {
                SocketAddr::from(([127, 0, 0, 1], 3000))
            } else {
                SocketAddr::from(([0, 0, 0, 0], 8080))
            }
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct HostEnvironment(Arc<str>);

impl HostEnvironment {
    pub fn is_development(&self) -> bool {
        self.0.eq_ignore_ascii_case("development")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for HostEnvironment {
    fn default() -> Self {
        Self(Arc::from("Production"))
    }
}

impl From<&str> for HostEnvironment {
    fn from(value: &str) -> Self {
        Self(Arc::from(value))
    }
}

impl From<String> for HostEnvironment {
    fn from(value: String) -> Self {
        Self(Arc::from(value))
    }
}

impl fmt::Display for HostEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpSslConfig {
    pub key_file: PathBuf,
    pub cert_file: PathBuf,
}

impl HttpSslConfig {
    pub async fn to_rustls_config(&self) -> anyhow::Result<RustlsConfig> {
        RustlsConfig::from_pem_file(&self.cert_file, &self.key_file)
            .await
            .context("Failed to load SSL certificate or key")
    }
}
