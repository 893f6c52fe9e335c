pub use crate::config::{ConfigError, load_config};
pub use recruit_domain::config::ApiConfig;
pub use recruit_domain::registry::{FeatureSlice, InitializedSlice};

#[cfg(feature = "server")]
pub use crate::server::{ApiState, ApiStateError};
