use std::path::PathBuf;
use std::time::Duration;

use anyhow::anyhow;
use clap::Parser;
use log::LevelFilter;
use mirror_engine::{ApiSettings, DEFAULT_API_BASE_URL};

use crate::platform::logging::LogDestination;

const APP_DIR_NAME: &str = "repomirror";
const DEFAULT_LOG_FILE: &str = "repomirror.log";

#[derive(Debug, Parser)]
#[command(name = "repomirror")]
#[command(about = "Score GitHub repositories and browse past scans", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Root URL of the analysis service.
    #[arg(long, env = "REPOMIRROR_API_URL", default_value = DEFAULT_API_BASE_URL)]
    pub api_url: String,

    /// Directory holding preferences.json. Defaults to the platform config dir.
    #[arg(long)]
    pub prefs_dir: Option<PathBuf>,

    /// Log file path; `-` logs to the terminal instead.
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    #[arg(long, default_value = "info", value_parser = parse_level_arg)]
    pub log_level: LevelFilter,

    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub connect_timeout_secs: u64,

    #[arg(long, default_value_t = 120, value_parser = clap::value_parser!(u64).range(1..))]
    pub request_timeout_secs: u64,

    /// Disable colored output even on a terminal.
    #[arg(long)]
    pub no_color: bool,
}

fn parse_level_arg(raw: &str) -> Result<LevelFilter, String> {
    mirror_logging::parse_level(raw).ok_or_else(|| format!("unknown log level: {raw}"))
}

/// Settings resolved from the command line and environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiSettings,
    pub prefs_dir: PathBuf,
    pub log_destination: LogDestination,
    pub log_level: LevelFilter,
    pub no_color: bool,
}

impl AppConfig {
    pub fn from_cli(cli: Cli) -> anyhow::Result<Self> {
        let prefs_dir = match cli.prefs_dir {
            Some(dir) => dir,
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR_NAME))
                .ok_or_else(|| anyhow!("no platform config directory; pass --prefs-dir"))?,
        };

        let log_destination = if cli.log_file.as_os_str() == "-" {
            LogDestination::Terminal
        } else {
            LogDestination::File(cli.log_file)
        };

        Ok(Self {
            api: ApiSettings {
                base_url: cli.api_url,
                connect_timeout: Duration::from_secs(cli.connect_timeout_secs),
                request_timeout: Duration::from_secs(cli.request_timeout_secs),
            },
            prefs_dir,
            log_destination,
            log_level: cli.log_level,
            no_color: cli.no_color,
        })
    }
}
