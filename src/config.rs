//! Application configuration management.
//!
//! Configuration is loaded from a YAML file with environment variable overrides. The configuration
//! file path defaults to `config.yaml` but can be specified via `-f` flag or `BACKDROP_CONFIG`
//! environment variable.
//!
//! ## Loading Priority
//!
//! Configuration sources are merged in the following order (later sources override earlier ones):
//!
//! 1. **YAML config file** - Base configuration (default: `config.yaml`)
//! 2. **Environment variables** - Variables prefixed with `BACKDROP_` override YAML values
//!
//! For nested config values, use double underscores in environment variables. For example,
//! `BACKDROP_OAUTH__USERNAME=me@example.com` sets the `oauth.username` field.
//!
//! ## Usage
//!
//! ```no_run
//! use clap::Parser;
//! use backdrop::config::{Args, Config};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let args = Args::parse();
//! let config = Config::load(&args)?;
//! println!("Server will bind to {}:{}", config.host, config.port);
//! # Ok(())
//! # }
//! ```

use clap::Parser;
use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::{Deserialize, Serialize};
use url::Url;

/// Simple CLI args - just for specifying config file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file
    #[arg(short = 'f', long, env = "BACKDROP_CONFIG", default_value = "config.yaml")]
    pub config: String,

    /// Validate configuration and exit without starting the server.
    /// Useful for CI/CD pipelines to catch config errors before deployment.
    #[arg(long)]
    pub validate: bool,
}

/// Main application configuration.
///
/// This is the root configuration structure loaded from YAML and environment variables.
/// All fields have sensible defaults defined in the `Default` implementation.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// HTTP server host to bind to (e.g., "0.0.0.0" for all interfaces)
    pub host: String,
    /// HTTP server port to bind to
    pub port: u16,
    /// Populate the store with demo fixtures on startup.
    /// Disable for automated runs that create exactly the records they need.
    pub seed_demo_data: bool,
    /// Credentials and token accepted by the mock OAuth endpoint
    pub oauth: OAuthConfig,
    /// CORS configuration for browser clients
    pub cors: CorsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 4200,
            seed_demo_data: true,
            oauth: OAuthConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

/// Mock OAuth password-grant configuration.
///
/// The token endpoint accepts exactly this username/password pair and hands back
/// `access_token` regardless of how many times it is asked.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OAuthConfig {
    /// Username accepted by the password grant
    pub username: String,
    /// Password accepted by the password grant
    pub password: String,
    /// Token handed out on successful login
    pub access_token: String,
    /// Reported token lifetime in seconds
    pub token_expires_in: u64,
}

impl Default for OAuthConfig {
    fn default() -> Self {
        Self {
            username: "josh@coderly.com".to_string(),
            password: "password".to_string(),
            access_token: "d3e45a8a3bbfbb437219e132a8286e329268d57f2d9d8153fbdee9a88c2e96f7".to_string(),
            token_expires_in: 7200,
        }
    }
}

/// CORS (Cross-Origin Resource Sharing) configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CorsConfig {
    /// Allowed origins for CORS requests
    pub allowed_origins: Vec<CorsOrigin>,
    /// Allow credentials (cookies) in CORS requests
    pub allow_credentials: bool,
    /// Cache preflight requests for this many seconds
    pub max_age: Option<u64>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            // Development frontend (ember serve)
            allowed_origins: vec![CorsOrigin::Url(Url::parse("http://localhost:4200").expect("static URL"))],
            allow_credentials: true,
            max_age: Some(3600), // Cache preflight for 1 hour
        }
    }
}

/// CORS origin specification.
///
/// Can be either a wildcard (`*`) to allow all origins, or a specific URL.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum CorsOrigin {
    /// Allow all origins (`*`)
    #[serde(deserialize_with = "parse_wildcard")]
    Wildcard,
    /// Specific origin URL (e.g., `https://app.example.com`)
    #[serde(deserialize_with = "parse_url")]
    Url(Url),
}

fn parse_wildcard<'de, D>(deserializer: D) -> Result<(), D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    if s == "*" {
        Ok(())
    } else {
        Err(serde::de::Error::custom("Expected '*'"))
    }
}

fn parse_url<'de, D>(deserializer: D) -> Result<Url, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    Url::parse(&s).map_err(serde::de::Error::custom)
}

impl Config {
    pub fn load(args: &Args) -> Result<Self, figment::Error> {
        Self::figment(args).extract()
    }

    pub fn figment(args: &Args) -> Figment {
        Figment::new()
            // Load base config file
            .merge(Yaml::file(&args.config))
            // Environment variables can still override specific values
            .merge(Env::prefixed("BACKDROP_").split("__"))
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    fn args_for(path: &str) -> Args {
        Args {
            config: path.to_string(),
            validate: false,
        }
    }

    #[test]
    fn test_defaults_without_config_file() {
        Jail::expect_with(|_jail| {
            let config = Config::load(&args_for("missing.yaml"))?;
            assert_eq!(config.host, "127.0.0.1");
            assert_eq!(config.port, 4200);
            assert!(config.seed_demo_data);
            assert_eq!(config.oauth.username, "josh@coderly.com");
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_yaml() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "test.yaml",
                r#"
port: 3000
oauth:
  username: someone@example.com
"#,
            )?;

            jail.set_env("BACKDROP_HOST", "0.0.0.0");
            jail.set_env("BACKDROP_OAUTH__PASSWORD", "hunter2");

            let config = Config::load(&args_for("test.yaml"))?;

            // Env vars should override
            assert_eq!(config.host, "0.0.0.0");
            assert_eq!(config.oauth.password, "hunter2");

            // YAML values should be preserved
            assert_eq!(config.port, 3000);
            assert_eq!(config.oauth.username, "someone@example.com");

            Ok(())
        });
    }

    #[test]
    fn test_cors_origin_parsing() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "test.yaml",
                r#"
cors:
  allowed_origins:
    - "*"
    - "https://app.example.com"
  allow_credentials: false
"#,
            )?;

            let config = Config::load(&args_for("test.yaml"))?;
            assert_eq!(config.cors.allowed_origins.len(), 2);
            assert!(matches!(config.cors.allowed_origins[0], CorsOrigin::Wildcard));
            assert!(matches!(config.cors.allowed_origins[1], CorsOrigin::Url(_)));
            assert!(!config.cors.allow_credentials);
            Ok(())
        });
    }

    #[test]
    fn test_unknown_fields_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file("test.yaml", "bogus_field: true\n")?;
            assert!(Config::load(&args_for("test.yaml")).is_err());
            Ok(())
        });
    }
}
