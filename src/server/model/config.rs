use std::net::SocketAddrV4;
use std::str::FromStr;
use derive_more::{Display, Error};

pub(crate) const DEFAULT_HOST_ADDR: &str = "0.0.0.0:5000";
pub(crate) const DEFAULT_PAYLOAD_LIMIT: usize = 256 * 1024;

/// Server configs
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ServerConfig {
    pub addr: SocketAddrV4,
    /// actix worker threads, actix picks the count when absent
    pub workers: Option<usize>,
    /// max accepted json body in bytes
    pub payload_limit: usize,
}

#[derive(Debug, Display, Error, PartialEq)]
pub(crate) enum ConfigError {
    #[display("invalid HOST: {_0}")]
    Host(#[error(not(source))] String),
    #[display("invalid PORT: {_0}")]
    Port(#[error(not(source))] String),
    #[display("invalid WORKERS: {_0}")]
    Workers(#[error(not(source))] String),
    #[display("invalid PAYLOAD_LIMIT: {_0}")]
    PayloadLimit(#[error(not(source))] String),
}

impl ServerConfig {
    pub fn new(addr: SocketAddrV4) -> Self {
        Self {
            addr,
            workers: None,
            payload_limit: DEFAULT_PAYLOAD_LIMIT,
        }
    }

    /// Build the config from a variable lookup, `std::env::var` in production.
    ///
    /// `PORT` only overrides the port part of `HOST`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or(DEFAULT_HOST_ADDR.to_string());
        let mut addr = SocketAddrV4::from_str(host.as_str()).map_err(|_| ConfigError::Host(host))?;

        if let Some(port) = lookup("PORT") {
            addr.set_port(port.parse().map_err(|_| ConfigError::Port(port))?);
        }

        let mut config = Self::new(addr);

        config.workers = match lookup("WORKERS") {
            Some(w) => match w.parse::<usize>() {
                Ok(n) if n > 0 => Some(n),
                _ => return Err(ConfigError::Workers(w)),
            },
            None => None,
        };

        if let Some(limit) = lookup("PAYLOAD_LIMIT") {
            config.payload_limit = limit.parse().map_err(|_| ConfigError::PayloadLimit(limit))?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;
    use std::net::Ipv4Addr;
    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ServerConfig::new(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 5000)));
        assert_eq!(config.payload_limit, DEFAULT_PAYLOAD_LIMIT);
        assert!(config.workers.is_none());
    }

    #[test]
    fn port_overrides_host_port() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1:8080"),
            ("PORT", "9000"),
        ]))
        .unwrap();
        assert_eq!(config.addr, SocketAddrV4::new(Ipv4Addr::LOCALHOST, 9000));
    }

    #[test]
    fn explicit_values() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1:8080"),
            ("WORKERS", "2"),
            ("PAYLOAD_LIMIT", "1024"),
        ]))
        .unwrap();
        assert_eq!(config.addr, SocketAddrV4::new(Ipv4Addr::LOCALHOST, 8080));
        assert_eq!(config.workers, Some(2));
        assert_eq!(config.payload_limit, 1024);
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            ServerConfig::from_lookup(lookup_from(&[("HOST", "localhost")])),
            Err(ConfigError::Host("localhost".to_string()))
        );
        assert_eq!(
            ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])),
            Err(ConfigError::Port("70000".to_string()))
        );
        assert_eq!(
            ServerConfig::from_lookup(lookup_from(&[("WORKERS", "0")])),
            Err(ConfigError::Workers("0".to_string()))
        );
        assert_eq!(
            ServerConfig::from_lookup(lookup_from(&[("PAYLOAD_LIMIT", "-1")])),
            Err(ConfigError::PayloadLimit("-1".to_string()))
        );
    }
}
