pub mod credentials;
pub mod loader;
pub mod types;

pub use credentials::{
    empty_env, process_env, CredentialStatus, EnvLookup, SecureString, API_KEY_ENV, MODEL_ENV,
};
pub use loader::ConfigError;
pub use types::{AiConfig, Config, ServerConfig};
