use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration, loaded once at process start.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfigInner {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub registration: RegistrationDefaults,
    pub site: SiteConfig,
    pub log: LogConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(flatten, default)]
    inner: Arc<ApiConfigInner>,
}

impl Deref for ApiConfig {
    type Target = ApiConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ApiConfig {
    fn deref_mut(&mut self) -> &mut ApiConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    pub ssl: Option<SslConfig>,
}

/// TLS certificate/key paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SslConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// The external registration backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub register_path: String,
    /// Unset means the proxy waits for the backend indefinitely.
    pub timeout_secs: Option<u64>,
}

impl UpstreamConfig {
    /// Absolute URL of the backend's registration endpoint.
    #[must_use]
    pub fn register_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.register_path.trim_start_matches('/')
        )
    }
}

/// Values injected into the upstream payload for fields the form never collects.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RegistrationDefaults {
    pub interests: Vec<String>,
    pub expectations: String,
    pub referral_source: String,
}

/// Static marketing content served alongside the form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub announcement: String,
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

/// Logging output.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default level when `RUST_LOG` is not set (`trace`..`error`).
    pub level: String,
    /// Rolling log files are written here when set.
    pub dir: Option<PathBuf>,
    pub json: bool,
}

/// Timing of the join form's submission sequence.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Pause before each scripted progress line.
    pub log_interval_ms: u64,
    /// How long the success screen stays before the draft is cleared.
    pub reset_delay_ms: u64,
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: 4583, ssl: None }
    }
}

impl Default for SslConfig {
    fn default() -> Self {
        Self { cert: PathBuf::from("cert.pem"), key: PathBuf::from("key.pem") }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_owned(),
            register_path: "/api/register".to_owned(),
            timeout_secs: None,
        }
    }
}

impl Default for RegistrationDefaults {
    fn default() -> Self {
        Self {
            interests: vec!["General".to_owned()],
            expectations: "Learn, build and collaborate with the community".to_owned(),
            referral_source: "Website".to_owned(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), dir: None, json: false }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self { log_interval_ms: 400, reset_delay_ms: 3000 }
    }
}
