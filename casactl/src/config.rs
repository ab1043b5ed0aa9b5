//! Application configuration management.
//!
//! Configuration is loaded from an optional YAML file with environment
//! variable overrides. Sources are merged in the following order (later
//! sources override earlier ones):
//!
//! 1. **Defaults** - loopback host, port 8000, sample data enabled
//! 2. **YAML config file** - default `config.yaml`, override via `-f` flag or `CASACTL_CONFIG`
//! 3. **Environment variables** - variables prefixed with `CASACTL_`
//! 4. **PORT** - special case: overrides `port` if set
//!
//! ```bash
//! # Override the listen port
//! PORT=9000
//! # Or with the prefix
//! CASACTL_PORT=9000
//! # Start with an empty collection instead of the sample listings
//! CASACTL_SEED_DATA=false
//! ```

use clap::Parser;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Yaml},
};
use serde::{Deserialize, Serialize};

/// Simple CLI args - just for specifying config file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file
    #[arg(short = 'f', long, env = "CASACTL_CONFIG", default_value = "config.yaml")]
    pub config: String,

    /// Validate configuration and exit without starting the server.
    #[arg(long)]
    pub validate: bool,
}

/// Main application configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server host to bind to
    pub host: String,
    /// HTTP server port to bind to
    pub port: u16,
    /// Whether to load the fixed sample listings on startup
    pub seed_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            seed_data: true,
        }
    }
}

impl Config {
    pub fn load(args: &Args) -> Result<Self, figment::Error> {
        Self::figment(args).extract()
    }

    pub fn figment(args: &Args) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            // Load base config file, if present
            .merge(Yaml::file(&args.config))
            // Environment variables can still override specific values
            .merge(Env::prefixed("CASACTL_"))
            // Plain PORT is the conventional deployment knob
            .merge(Env::raw().only(&["PORT"]))
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    fn default_args() -> Args {
        Args {
            config: "config.yaml".to_string(),
            validate: false,
        }
    }

    #[test]
    fn test_defaults() {
        Jail::expect_with(|_| {
            let config = Config::load(&default_args()).expect("load defaults");
            assert_eq!(config.bind_address(), "127.0.0.1:8000");
            assert!(config.seed_data);
            Ok(())
        });
    }

    #[test]
    fn test_port_env_override() {
        Jail::expect_with(|jail| {
            jail.set_env("PORT", "9001");
            let config = Config::load(&default_args()).expect("load with PORT");
            assert_eq!(config.port, 9001);
            Ok(())
        });
    }

    #[test]
    fn test_prefixed_env_overrides_yaml() {
        Jail::expect_with(|jail| {
            jail.create_file("config.yaml", "port: 8100\nseed_data: false\n")?;
            jail.set_env("CASACTL_PORT", "8200");

            let config = Config::load(&default_args()).expect("load with file and env");
            assert_eq!(config.port, 8200);
            assert!(!config.seed_data);
            Ok(())
        });
    }
}
