/**
 * Server Configuration
 *
 * Configuration is assembled in three layers, later layers winning:
 *
 * 1. Built-in defaults, suitable for local development
 * 2. An optional TOML file named by `SOCIAL_CONFIG`
 * 3. Environment variables (after `.env` has been loaded)
 *
 * # Environment Variables
 *
 * | Variable | Field |
 * |---|---|
 * | `SERVER_PORT` | `port` |
 * | `DATABASE_URL` | `database_url` |
 * | `JWT_SECRET` | `jwt_secret` |
 * | `JWT_TTL_DAYS` | `token_ttl_days` |
 * | `BCRYPT_COST` | `bcrypt_cost` |
 * | `STATIC_DIR` | `static_dir` |
 * | `IMAGE_STORE` | `images` (`cloudinary`, `memory` or `disabled`) |
 * | `IMAGE_BASE_URL` | base URL of the memory store |
 * | `CLOUDINARY_*` | Cloudinary credentials |
 */

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::backend::media::cloudinary::{CloudinaryConfig, DEFAULT_API_BASE};

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://social.db?mode=rwc";
pub const DEFAULT_TOKEN_TTL_DAYS: u64 = 15;
pub const DEFAULT_IMAGE_BASE_URL: &str = "http://localhost:5000/images";
const DEV_JWT_SECRET: &str = "dev-secret-change-in-production";

/// Which image backend to use
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImageStoreConfig {
    Cloudinary(CloudinaryConfig),
    Memory { base_url: String },
    Disabled,
}

impl Default for ImageStoreConfig {
    fn default() -> Self {
        ImageStoreConfig::Memory {
            base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
        }
    }
}

/// Fully resolved server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    pub token_ttl_days: u64,
    pub bcrypt_cost: u32,
    pub static_dir: PathBuf,
    pub images: ImageStoreConfig,
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load defaults, then `SOCIAL_CONFIG` if set, then the environment
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::builder();
        if let Ok(path) = std::env::var("SOCIAL_CONFIG") {
            tracing::info!("Loading configuration file {}", path);
            builder = builder.file(path)?;
        }
        builder.env(|key| std::env::var(key).ok())?.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: self.bcrypt_cost.to_string(),
            });
        }
        if self.token_ttl_days == 0 {
            return Err(ConfigError::InvalidValue {
                key: "JWT_TTL_DAYS",
                value: "0".to_string(),
            });
        }
        if let ImageStoreConfig::Cloudinary(cloudinary) = &self.images {
            let required = [
                ("CLOUDINARY_CLOUD_NAME", &cloudinary.cloud_name),
                ("CLOUDINARY_API_KEY", &cloudinary.api_key),
                ("CLOUDINARY_API_SECRET", &cloudinary.api_secret),
                ("CLOUDINARY_UPLOAD_PRESET", &cloudinary.upload_preset),
            ];
            if let Some((key, _)) = required.iter().find(|(_, value)| value.is_empty()) {
                return Err(ConfigError::MissingValue(*key));
            }
        }
        Ok(())
    }
}

/// Shape of the optional TOML file; every field may be omitted
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    port: Option<u16>,
    database_url: Option<String>,
    jwt_secret: Option<String>,
    token_ttl_days: Option<u64>,
    bcrypt_cost: Option<u32>,
    static_dir: Option<PathBuf>,
    images: Option<ImageStoreConfig>,
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    port: Option<u16>,
    database_url: Option<String>,
    jwt_secret: Option<String>,
    token_ttl_days: Option<u64>,
    bcrypt_cost: Option<u32>,
    static_dir: Option<PathBuf>,
    images: Option<ImageStoreConfig>,
}

impl ServerConfigBuilder {
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn token_ttl_days(mut self, days: u64) -> Self {
        self.token_ttl_days = Some(days);
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    pub fn static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }

    pub fn images(mut self, images: ImageStoreConfig) -> Self {
        self.images = Some(images);
        self
    }

    /// Apply the values present in a TOML file
    pub fn file(mut self, path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: FileConfig = toml::from_str(&contents)?;

        self.port = file.port.or(self.port);
        self.database_url = file.database_url.or(self.database_url);
        self.jwt_secret = file.jwt_secret.or(self.jwt_secret);
        self.token_ttl_days = file.token_ttl_days.or(self.token_ttl_days);
        self.bcrypt_cost = file.bcrypt_cost.or(self.bcrypt_cost);
        self.static_dir = file.static_dir.or(self.static_dir);
        self.images = file.images.or(self.images);
        Ok(self)
    }

    /// Apply environment variables read through `lookup`
    pub fn env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = parse_var(&lookup, "SERVER_PORT")? {
            self.port = Some(port);
        }
        if let Some(url) = lookup("DATABASE_URL") {
            self.database_url = Some(url);
        }
        if let Some(secret) = lookup("JWT_SECRET") {
            self.jwt_secret = Some(secret);
        }
        if let Some(days) = parse_var(&lookup, "JWT_TTL_DAYS")? {
            self.token_ttl_days = Some(days);
        }
        if let Some(cost) = parse_var(&lookup, "BCRYPT_COST")? {
            self.bcrypt_cost = Some(cost);
        }
        if let Some(dir) = lookup("STATIC_DIR") {
            self.static_dir = Some(PathBuf::from(dir));
        }

        if let Some(kind) = lookup("IMAGE_STORE") {
            let images = match kind.to_lowercase().as_str() {
                "cloudinary" => ImageStoreConfig::Cloudinary(CloudinaryConfig {
                    cloud_name: require(&lookup, "CLOUDINARY_CLOUD_NAME")?,
                    api_key: require(&lookup, "CLOUDINARY_API_KEY")?,
                    api_secret: require(&lookup, "CLOUDINARY_API_SECRET")?,
                    upload_preset: require(&lookup, "CLOUDINARY_UPLOAD_PRESET")?,
                    api_base: lookup("CLOUDINARY_API_BASE")
                        .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
                }),
                "memory" => ImageStoreConfig::Memory {
                    base_url: lookup("IMAGE_BASE_URL")
                        .unwrap_or_else(|| DEFAULT_IMAGE_BASE_URL.to_string()),
                },
                "disabled" => ImageStoreConfig::Disabled,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "IMAGE_STORE",
                        value: kind,
                    })
                }
            };
            self.images = Some(images);
        }

        Ok(self)
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let jwt_secret = self.jwt_secret.unwrap_or_else(|| {
            tracing::warn!("JWT_SECRET not set, using the development secret");
            DEV_JWT_SECRET.to_string()
        });

        let config = ServerConfig {
            port: self.port.unwrap_or(DEFAULT_PORT),
            database_url: self
                .database_url
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            jwt_secret,
            token_ttl_days: self.token_ttl_days.unwrap_or(DEFAULT_TOKEN_TTL_DAYS),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(bcrypt::DEFAULT_COST),
            static_dir: self.static_dir.unwrap_or_else(|| PathBuf::from("public")),
            images: self.images.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(None),
    }
}

fn require<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::MissingValue(key))
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid configuration file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;
    use serial_test::serial;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::builder().jwt_secret("s").build().unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.token_ttl_days, DEFAULT_TOKEN_TTL_DAYS);
        assert_eq!(config.images, ImageStoreConfig::default());
    }

    #[test]
    fn test_env_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "port = 7000\njwt_secret = \"from-file\"\n\n[images]\nkind = \"disabled\""
        )
        .unwrap();

        let config = ServerConfig::builder()
            .file(file.path())
            .unwrap()
            .env(lookup_from(&[("SERVER_PORT", "8080")]))
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.jwt_secret, "from-file");
        assert_eq!(config.images, ImageStoreConfig::Disabled);
    }

    #[test]
    fn test_cloudinary_from_env() {
        let config = ServerConfig::builder()
            .env(lookup_from(&[
                ("JWT_SECRET", "s"),
                ("IMAGE_STORE", "cloudinary"),
                ("CLOUDINARY_CLOUD_NAME", "demo"),
                ("CLOUDINARY_API_KEY", "key"),
                ("CLOUDINARY_API_SECRET", "secret"),
                ("CLOUDINARY_UPLOAD_PRESET", "posts"),
            ]))
            .unwrap()
            .build()
            .unwrap();

        match config.images {
            ImageStoreConfig::Cloudinary(cloudinary) => {
                assert_eq!(cloudinary.cloud_name, "demo");
                assert_eq!(cloudinary.api_base, DEFAULT_API_BASE);
            }
            other => panic!("Expected Cloudinary, got {:?}", other),
        }
    }

    #[test]
    fn test_cloudinary_requires_credentials() {
        let err = ServerConfig::builder()
            .env(lookup_from(&[("IMAGE_STORE", "cloudinary")]))
            .unwrap_err();
        assert_matches!(err, ConfigError::MissingValue("CLOUDINARY_CLOUD_NAME"));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = ServerConfig::builder()
            .env(lookup_from(&[("SERVER_PORT", "not-a-port")]))
            .unwrap_err();
        assert_matches!(err, ConfigError::InvalidValue { key: "SERVER_PORT", .. });

        let err = ServerConfig::builder()
            .jwt_secret("s")
            .bcrypt_cost(2)
            .build()
            .unwrap_err();
        assert_matches!(err, ConfigError::InvalidValue { key: "BCRYPT_COST", .. });

        let err = ServerConfig::builder().jwt_secret("").build().unwrap_err();
        assert_matches!(err, ConfigError::MissingValue("JWT_SECRET"));
    }

    #[test]
    fn test_unknown_file_keys_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "prot = 1").unwrap();
        assert_matches!(
            ServerConfig::builder().file(file.path()),
            Err(ConfigError::Parse(_))
        );
    }

    #[test]
    #[serial]
    fn test_load_reads_process_env() {
        std::env::set_var("SERVER_PORT", "6123");
        std::env::set_var("JWT_SECRET", "env-secret");
        let config = ServerConfig::load();
        std::env::remove_var("SERVER_PORT");
        std::env::remove_var("JWT_SECRET");

        let config = config.unwrap();
        assert_eq!(config.port, 6123);
        assert_eq!(config.jwt_secret, "env-secret");
    }
}
