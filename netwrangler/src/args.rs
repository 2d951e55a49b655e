//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use netwrangler_common::{DashboardConfig, Result, load_config};

/// File name looked up in the user's config directory.
pub const CONFIG_FILE_NAME: &str = "config.json5";

/// NetWrangler dashboard command-line arguments.
#[derive(Parser, Debug, Clone, Default)]
#[command(about = "NetWrangler 5G network operations dashboard")]
pub struct Args {
    /// Path to a JSON5 configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the API base URL.
    #[arg(long)]
    pub api_url: Option<String>,

    /// Override the poll interval in seconds.
    #[arg(long)]
    pub interval: Option<u64>,

    /// Override log level (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Show generated data instead of polling the API.
    #[arg(long)]
    pub demo: bool,
}

impl Args {
    /// Per-user configuration file, e.g. `~/.config/netwrangler/config.json5`.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("netwrangler").join(CONFIG_FILE_NAME))
    }

    /// Load the configuration and apply command-line overrides.
    ///
    /// An explicit `--config` must exist. Otherwise the per-user file is
    /// used when present, and built-in defaults when not.
    pub fn resolve_config(&self) -> Result<DashboardConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => match Self::default_config_path().filter(|p| p.exists()) {
                Some(path) => load_config(path)?,
                None => DashboardConfig::default(),
            },
        };

        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides on top of a loaded configuration.
    pub fn apply_overrides(&self, config: &mut DashboardConfig) {
        if let Some(url) = &self.api_url {
            config.api.base_url = url.clone();
        }
        if let Some(secs) = self.interval {
            config.api.poll_interval_secs = secs;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let args = Args::parse_from([
            "netwrangler",
            "--api-url",
            "http://noc.example:8080",
            "--interval",
            "10",
            "--demo",
        ]);

        assert_eq!(args.api_url.as_deref(), Some("http://noc.example:8080"));
        assert_eq!(args.interval, Some(10));
        assert!(args.demo);
        assert!(args.config.is_none());
    }

    #[test]
    fn test_overrides_win() {
        let args = Args {
            api_url: Some("http://10.0.0.5:8000".to_string()),
            log_level: Some("debug".to_string()),
            ..Args::default()
        };
        let mut config = DashboardConfig::default();

        args.apply_overrides(&mut config);

        assert_eq!(config.api.base_url, "http://10.0.0.5:8000");
        assert_eq!(config.api.poll_interval_secs, 5);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let args = Args {
            config: Some(PathBuf::from("/nonexistent/netwrangler.json5")),
            ..Args::default()
        };
        assert!(args.resolve_config().is_err());

        let args = Args {
            interval: Some(0),
            ..Args::default()
        };
        let mut config = DashboardConfig::default();
        args.apply_overrides(&mut config);
        assert!(config.validate().is_err());
    }
}
