use std::env;
use std::fs;

use auth::SigningKeys;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

/// Token signing algorithm.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum JwtAlgorithm {
    Hs256,
    Rs256,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub algorithm: JwtAlgorithm,
    /// Shared secret, required for `hs256`
    #[serde(default)]
    pub secret: Option<String>,
    /// PEM private key file, required for `rs256`
    #[serde(default)]
    pub private_key_path: Option<String>,
    /// PEM public key file, required for `rs256`
    #[serde(default)]
    pub public_key_path: Option<String>,
    pub expires_in_seconds: i64,
}

impl JwtConfig {
    /// Load the key material described by this section.
    ///
    /// # Errors
    /// * `ConfigError::Message` - A required field is missing, a key file
    ///   cannot be read, or the PEM content is invalid
    pub fn signing_keys(&self) -> Result<SigningKeys, ConfigError> {
        match self.algorithm {
            JwtAlgorithm::Hs256 => {
                let secret = self
                    .secret
                    .as_deref()
                    .filter(|s| !s.is_empty())
                    .ok_or_else(|| ConfigError::Message("jwt.secret is required for hs256".into()))?;
                Ok(SigningKeys::hs256(secret.as_bytes()))
            }
            JwtAlgorithm::Rs256 => {
                let private_pem = read_key_file(self.private_key_path.as_deref(), "private_key_path")?;
                let public_pem = read_key_file(self.public_key_path.as_deref(), "public_key_path")?;
                SigningKeys::rs256(&private_pem, &public_pem)
                    .map_err(|e| ConfigError::Message(e.to_string()))
            }
        }
    }
}

fn read_key_file(path: Option<&str>, field: &str) -> Result<Vec<u8>, ConfigError> {
    let path = path
        .ok_or_else(|| ConfigError::Message(format!("jwt.{} is required for rs256", field)))?;
    fs::read(path).map_err(|e| ConfigError::Message(format!("cannot read {}: {}", path, e)))
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, JWT__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(environment())
            .build()?;

        configuration.try_deserialize()
    }
}

/// Unprefixed environment source, `JWT__EXPIRES_IN_SECONDS=600` sets
/// `jwt.expires_in_seconds`.
///
/// An empty `with_prefix("")` would only match variables starting with `__`.
fn environment() -> Environment {
    Environment::default().separator("__")
}
