//! Configuration: TOML file under the platform config dir plus env overrides.

mod credentials;
mod loader;
mod types;

pub use credentials::{bearer_header, SecureString};
pub use loader::{ConfigError, API_URL_ENV};
pub use types::{ApiConfig, Config, DisplayConfig, GeocodingConfig, SessionConfig};
