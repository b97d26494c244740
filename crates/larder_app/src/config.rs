use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Recipe manager backed by a local file or a REST backend.
#[derive(Debug, Parser)]
#[command(name = "larder", version, about)]
pub struct Config {
    /// Base URL of the recipe backend; omit to use the local store.
    #[arg(long, value_name = "BASE_URL")]
    pub remote: Option<String>,

    /// Data directory for the local store.
    #[arg(long, value_name = "DIR", default_value = "./data")]
    pub data_dir: PathBuf,

    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogDestination {
    /// Write to ./larder.log in the current directory.
    File,
    /// Write to the terminal.
    Terminal,
    /// Write to both file and terminal.
    Both,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_local_store() {
        let config = Config::try_parse_from(["larder"]).unwrap();
        assert_eq!(config.remote, None);
        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.log, LogDestination::File);
    }

    #[test]
    fn remote_flag_selects_rest_backend() {
        let config =
            Config::try_parse_from(["larder", "--remote", "http://localhost:8000"]).unwrap();
        assert_eq!(config.remote.as_deref(), Some("http://localhost:8000"));
    }

    #[test]
    fn log_destination_is_selectable() {
        let config = Config::try_parse_from(["larder", "--log", "both"]).unwrap();
        assert_eq!(config.log, LogDestination::Both);
    }
}
