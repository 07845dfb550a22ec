use std::path::Path;
use anyhow::{Context as _, Result};
use serde::Deserialize;
use tracing::debug;
use crate::args::Args;
use crate::fs::default_config_path;

#[derive(Default, Deserialize, Debug, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub resolver: ResolverConfig,
    #[serde(default)]
    pub query: QueryConfig,
}

impl Config {
    /// Command line values take precedence over the file.
    pub fn apply_args(mut self, args: &Args) -> Self {
        self.resolver.servers = args.server.clone().or(self.resolver.servers);
        self.resolver.port = args.port.or(self.resolver.port);
        self.resolver.timeout = args.timeout.clone().or(self.resolver.timeout);

        self.query.qtype = args
            .qtype
            .map(|qtype| qtype.to_string())
            .or(self.query.qtype);
        self.query.qclass = args
            .qclass
            .map(|qclass| qclass.to_string())
            .or(self.query.qclass);

        if let Some(id) = args.id {
            self.query.id = Some(id);
            self.query.random_id = Some(false);
        }
        if args.random_id {
            self.query.random_id = Some(true);
        }
        if args.recurse {
            self.query.recursion_desired = Some(true);
        }

        self
    }
}

#[derive(Default, Deserialize, Debug, PartialEq, Eq)]
pub struct ResolverConfig {
    pub servers: Option<Vec<String>>,
    pub port: Option<u16>,
    pub timeout: Option<String>,
}

#[derive(Default, Deserialize, Debug, PartialEq, Eq)]
pub struct QueryConfig {
    pub qtype: Option<String>,
    pub qclass: Option<String>,
    pub id: Option<u16>,
    pub random_id: Option<bool>,
    pub recursion_desired: Option<bool>,
}

/// Loads `path` if given, otherwise `~/.dnsq/conf.toml` when it exists.
pub fn load_config(path: Option<&str>) -> Result<Config> {
    if let Some(path) = path {
        return load(Path::new(path));
    }

    match default_config_path() {
        Some(path) if path.exists() => load(&path),
        Some(path) => {
            debug!("no config file at {}, using defaults", path.display());

            Ok(Config::default())
        }
        None => Ok(Config::default()),
    }
}

fn load(p: &Path) -> Result<Config> {
    let file = std::fs::read_to_string(p)
        .with_context(|| format!("failed to read config file {}", p.display()))?;

    let cfg: Config = toml::from_str(&file)
        .with_context(|| format!("failed to parse config file {}", p.display()))?;

    Ok(cfg)
}
