use std::path::PathBuf;
use log::warn;

pub fn get_home_dir() -> Option<PathBuf> {
    if let Some(path) = home::home_dir() {
        return Some(path.join(".dnsq"));
    }

    None
}

pub fn default_config_path() -> Option<PathBuf> {
    match get_home_dir() {
        Some(path) => Some(path.join("conf.toml")),
        None => {
            warn!("cannot find the home directory, using built-in defaults");

            None
        }
    }
}
