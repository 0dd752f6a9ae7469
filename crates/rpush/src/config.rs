use std::{ffi::OsString, str::FromStr};

use clap::Parser;

use rpush_exec::InventoryConfig;
use rpush_observe::{LoggerConfig, LoggerFormat, LoggerLevel};
use rpush_push::{PushConfig, Url, parse_endpoint};

/// Send metrics of latest restic snapshot to Prometheus Pushgateway.
#[derive(Parser, Debug)]
#[command(name = "restic-pushgateway", version, about, long_about = None)]
pub struct Cli {
    /// log level: CRITICAL|ERROR|WARNING|INFO|DEBUG
    #[arg(
        long = "loglevel",
        value_name = "LEVEL",
        default_value = "INFO",
        value_parser = LoggerLevel::new
    )]
    pub loglevel: LoggerLevel,

    /// Prometheus Pushgateway URL (e.g. "http://pushgateway.example.org:9091/metrics/job/some_job/instance/some_instance")
    #[arg(long = "pushgateway_url", value_name = "URL", value_parser = parse_endpoint)]
    pub pushgateway_url: Url,

    /// Skip TLS certificate verification.
    #[arg(long = "tls_skip_verify")]
    pub tls_skip_verify: bool,

    /// log format: text|json
    #[arg(
        long = "log_format",
        value_name = "FORMAT",
        default_value = "text",
        value_parser = LoggerFormat::from_str
    )]
    pub log_format: LoggerFormat,

    /// restic binary used to list snapshots
    #[arg(long = "restic_binary", value_name = "PATH", default_value = "restic")]
    pub restic_binary: String,
}

/// Run configuration, fixed at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: Url,
    pub log_level: LoggerLevel,
    pub log_format: LoggerFormat,
    pub skip_tls_verify: bool,
    pub restic_binary: String,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            endpoint: cli.pushgateway_url,
            log_level: cli.loglevel,
            log_format: cli.log_format,
            skip_tls_verify: cli.tls_skip_verify,
            restic_binary: cli.restic_binary,
        }
    }
}

impl Config {
    pub fn logger(&self) -> LoggerConfig {
        LoggerConfig {
            format: self.log_format,
            level: self.log_level,
            ..Default::default()
        }
    }

    pub fn inventory(&self) -> InventoryConfig {
        InventoryConfig::restic(self.restic_binary.clone())
    }

    pub fn push(&self) -> PushConfig {
        PushConfig::new(self.endpoint.clone()).with_skip_tls_verify(self.skip_tls_verify)
    }
}

/// Parse the process arguments.
pub fn load() -> Result<Config, clap::Error> {
    load_from(std::env::args_os())
}

pub fn load_from<I, T>(args: I) -> Result<Config, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map(Config::from)
}
