//! Configuration from the config file plus command-line overrides.

use anyhow::{Context, Result};
use clap::Args;
use libyivo::YivoConfig;
use std::path::PathBuf;

/// Options accepted by every command.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// TOML configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Resource snapshot to use or create
    #[arg(long, global = true, value_name = "FILE")]
    pub snapshot: Option<PathBuf>,

    /// Loanword list location (URL or directory)
    #[arg(long, global = true, value_name = "LOCATION")]
    pub loanwords: Option<String>,

    /// Hasidic table location (URL or directory)
    #[arg(long, global = true, value_name = "LOCATION")]
    pub hasidic: Option<String>,

    /// Log at debug level
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Load the config file (or defaults) and apply the overrides in `args`.
pub fn config(args: &GlobalArgs) -> Result<YivoConfig> {
    let mut config = match &args.config {
        Some(path) => YivoConfig::load_toml(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => YivoConfig::default(),
    };
    let base = config.base_mut();
    if let Some(snapshot) = &args.snapshot {
        base.snapshot = Some(snapshot.clone());
    }
    if let Some(location) = &args.loanwords {
        base.loanword_source = location.clone();
    }
    if let Some(location) = &args.hasidic {
        base.hasidic_source = location.clone();
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> GlobalArgs {
        GlobalArgs {
            config: None,
            snapshot: None,
            loanwords: None,
            hasidic: None,
            verbose: 0,
        }
    }

    #[test]
    fn defaults_without_config_file() {
        let config = config(&args()).unwrap();
        assert_eq!(config, YivoConfig::default());
    }

    #[test]
    fn flags_override_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("yidtool.toml");
        std::fs::write(&path, "hasidic_source = \"from-file\"\nfetch_retries = 5\n").unwrap();

        let args = GlobalArgs {
            config: Some(path),
            hasidic: Some("from-flag".to_string()),
            snapshot: Some(PathBuf::from("cache.bin")),
            ..args()
        };
        let config = config(&args).unwrap();
        assert_eq!(config.base().hasidic_source, "from-flag");
        assert_eq!(config.base().fetch_retries, 5);
        assert_eq!(config.base().snapshot, Some(PathBuf::from("cache.bin")));
    }

    #[test]
    fn bad_config_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "fetch_retries = \"many\"\n").unwrap();
        let args = GlobalArgs {
            config: Some(path),
            ..args()
        };
        let err = config(&args).unwrap_err();
        assert!(format!("{err:#}").contains("broken.toml"));
    }
}
