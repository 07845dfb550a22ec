use std::fmt::{Display, Formatter};
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use anyhow::{bail, Result};
use crate::config::Config;
use crate::duration;
use crate::message::QueryBuilder;
use crate::query_class::QueryClass;
use crate::query_type::QueryType;
use crate::resolver::StubResolver;

pub const DEFAULT_SERVER: &str = "8.8.8.8";
pub const DEFAULT_PORT: u16 = 53;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Settings resolved from the config file and the command line.
pub struct Context {
    pub servers: Vec<SocketAddr>,
    pub timeout: Duration,
    pub query: QueryBuilder,
}

impl Context {
    pub fn from(cfg: &Config) -> Result<Self> {
        let port = cfg.resolver.port.unwrap_or(DEFAULT_PORT);

        let servers = match &cfg.resolver.servers {
            Some(servers) => to_socket_addrs(servers, port)?,
            None => to_socket_addrs(&[DEFAULT_SERVER.to_string()], port)?,
        };

        let timeout = match &cfg.resolver.timeout {
            Some(timeout) => duration::parse(timeout)?,
            None => DEFAULT_TIMEOUT,
        };

        let mut query = QueryBuilder::new();
        if let Some(qtype) = &cfg.query.qtype {
            query = query.with_type(QueryType::from_str(qtype)?);
        }
        if let Some(qclass) = &cfg.query.qclass {
            query = query.with_class(QueryClass::from_str(qclass)?);
        }
        if let Some(id) = cfg.query.id {
            query = query.with_id(id);
        }
        if cfg.query.random_id.unwrap_or(false) {
            query = query.with_random_id();
        }
        if let Some(desired) = cfg.query.recursion_desired {
            query = query.with_recursion_desired(desired);
        }

        Ok(Self {
            servers,
            timeout,
            query,
        })
    }

    pub fn resolver(&self) -> StubResolver {
        StubResolver::new(self.servers.clone(), self.timeout)
    }
}

impl Display for Context {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (timeout {:?})", join_addrs(&self.servers, ", "), self.timeout)
    }
}

fn to_socket_addrs(addrs: &[String], default_port: u16) -> Result<Vec<SocketAddr>> {
    let mut res = Vec::new();

    for addr in addrs {
        match SocketAddr::from_str(addr) {
            Ok(addr) => res.push(addr),
            Err(_e) => match IpAddr::from_str(addr) {
                Ok(ip_addr) => res.push(SocketAddr::new(ip_addr, default_port)),
                Err(_e) => bail!("{} is not a valid address", addr),
            },
        }
    }

    if res.is_empty() {
        bail!("no servers configured");
    }

    Ok(res)
}

fn join_addrs(addrs: &[SocketAddr], sep: &str) -> String {
    addrs
        .iter()
        .map(|addr| match addr.port() {
            DEFAULT_PORT => addr.ip().to_string(),
            _ => addr.to_string(),
        })
        .collect::<Vec<_>>()
        .join(sep)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::{QueryConfig, ResolverConfig};

    #[test]
    fn defaults() {
        let ctx = Context::from(&Config::default()).unwrap();
        let msg = ctx.query.clone().build("dns.google.com").unwrap();

        assert_eq!(ctx.servers, vec![SocketAddr::from(([8, 8, 8, 8], 53))]);
        assert_eq!(ctx.timeout, DEFAULT_TIMEOUT);
        assert_eq!(msg, crate::message::Message::new_query("dns.google.com").unwrap());
        assert_eq!(ctx.to_string(), "8.8.8.8 (timeout 5s)");
    }

    #[test]
    fn resolves_config() {
        let cfg = Config {
            resolver: ResolverConfig {
                servers: Some(vec!["1.1.1.1".to_string(), "[::1]:5353".to_string()]),
                port: Some(5300),
                timeout: Some("1m10s".to_string()),
            },
            query: QueryConfig {
                qtype: Some("txt".to_string()),
                qclass: Some("3".to_string()),
                id: Some(44),
                random_id: None,
                recursion_desired: Some(true),
            },
        };

        let ctx = Context::from(&cfg).unwrap();
        let msg = ctx.query.clone().build("example.com").unwrap();

        assert_eq!(ctx.servers[0], SocketAddr::from(([1, 1, 1, 1], 5300)));
        assert_eq!(ctx.servers[1].port(), 5353);
        assert_eq!(ctx.timeout, Duration::from_secs(70));
        assert_eq!(msg.id(), 44);
        assert!(msg.header().recursion_desired());
        assert_eq!(msg.question().qtype, QueryType::TXT);
        assert_eq!(msg.question().qclass, QueryClass::CH);
        assert_eq!(ctx.resolver().servers().len(), 2);
    }

    #[test]
    fn rejects_bad_values() {
        let bad_server = Config {
            resolver: ResolverConfig {
                servers: Some(vec!["dns.google".to_string()]),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(Context::from(&bad_server).is_err());

        let no_servers = Config {
            resolver: ResolverConfig {
                servers: Some(Vec::new()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(Context::from(&no_servers).is_err());

        let bad_timeout = Config {
            resolver: ResolverConfig {
                timeout: Some("soon".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(Context::from(&bad_timeout).is_err());

        let bad_type = Config {
            query: QueryConfig {
                qtype: Some("BOGUS".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(Context::from(&bad_type).is_err());
    }
}
