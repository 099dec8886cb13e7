//! Service configuration from the environment.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `PORT` | `3000` | TCP port to listen on |
//! | `HOST` | `0.0.0.0` | Address to listen on |

use std::fmt::Display;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use thiserror::Error;
use tracing::info;

use crate::env::Env;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// A variable is set but cannot be parsed.
#[derive(Debug, Error)]
#[error("invalid {key} value `{value}`: {reason}")]
pub struct ConfigError {
    key: &'static str,
    value: String,
    reason: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
}

impl Config {
    pub fn load(env: &Env) -> Result<Self, ConfigError> {
        Ok(Self {
            host: try_load(env, "HOST", DEFAULT_HOST)?,
            port: try_load(env, "PORT", DEFAULT_PORT)?,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { host: DEFAULT_HOST, port: DEFAULT_PORT }
    }
}

fn try_load<T>(env: &Env, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(value) = env.var(key) else {
        info!("{key} not set, using default: {default}");
        return Ok(default);
    };
    value.trim().parse().map_err(|e: T::Err| ConfigError {
        key,
        reason: e.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = Config::load(&Env::mock([("UNRELATED", "1")])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.addr().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn reads_port_and_host() {
        let env = Env::mock([("PORT", "8080"), ("HOST", "127.0.0.1")]);
        let config = Config::load(&env).unwrap();
        assert_eq!(config.addr().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn rejects_invalid_port() {
        let err = Config::load(&Env::mock([("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().starts_with("invalid PORT value `eighty`"));

        assert!(Config::load(&Env::mock([("PORT", "70000")])).is_err());
    }

    #[test]
    fn rejects_invalid_host() {
        assert!(Config::load(&Env::mock([("HOST", "localhost:1")])).is_err());
    }
}
