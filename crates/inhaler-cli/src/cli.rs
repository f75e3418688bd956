//! CLI argument definitions.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{Args, ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use inhaler_cli::logging::{LogConfig, LogFormat};
use inhaler_model::{DeviceSubtype, FilterSpec, TherapeuticClass, TreatmentType};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "inhalers",
    version,
    about = "Buscador de inhaladores y escalas clínicas",
    long_about = "Browse the inhaler directory exported from the shared spreadsheet,\n\
                  filter it by treatment, device, indication and class, and evaluate\n\
                  clinical decision scales such as Wells for DVT."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Logging setup for this invocation.
    ///
    /// `RUST_LOG` only applies when neither `-v/-q` nor `--log-level` was
    /// given. ANSI output follows `--color`, and `auto` turns it off for log
    /// files and non-terminal stderr.
    pub fn log_config(&self) -> LogConfig {
        let explicit = self.verbosity.is_present() || self.log_level.is_some();
        let with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        LogConfig {
            level_filter: self
                .log_level
                .map_or_else(|| self.verbosity.tracing_level_filter(), LevelFilter::from),
            use_env_filter: !explicit,
            with_ansi,
            format: self.log_format.into(),
            log_file: self.log_file.clone(),
            ..LogConfig::default()
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// List inhalers matching the given filters.
    List(ListArgs),

    /// List the device families present in the export.
    Devices(SourceArgs),

    /// List the available clinical scales.
    Scales,

    /// Evaluate a clinical scale.
    Score(ScoreArgs),
}

#[derive(Args)]
pub struct SourceArgs {
    /// CSV export of the inhaler spreadsheet (default: $INHALERS_CSV).
    #[arg(long = "data", value_name = "CSV")]
    pub data: Option<PathBuf>,

    /// Field delimiter of the export.
    #[arg(long = "delimiter", default_value_t = ',')]
    pub delimiter: char,
}

#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Treatment type (Mono, Dual, Triple).
    #[arg(long = "tipo", value_name = "TIPO")]
    pub treatment_type: Option<TreatmentType>,

    /// Device subtype (pMDI, DPI, Nebulizador).
    #[arg(long = "dispositivo", value_name = "SUBTIPO")]
    pub device_subtype: Option<DeviceSubtype>,

    /// Keep products indicated for asthma.
    #[arg(long = "asma")]
    pub asma: bool,

    /// Keep products indicated for COPD.
    #[arg(long = "epoc")]
    pub epoc: bool,

    /// Require a pharmacological class (repeatable: SABA, SAMA, LABA, LAMA, CI).
    #[arg(long = "clase", value_name = "CLASE")]
    pub classes: Vec<TherapeuticClass>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

impl ListArgs {
    pub fn filter_spec(&self) -> FilterSpec {
        FilterSpec {
            treatment_type: self.treatment_type,
            device_subtype: self.device_subtype,
            asma: self.asma,
            epoc: self.epoc,
            classes: self.classes.iter().copied().collect(),
        }
    }
}

#[derive(Args)]
pub struct ScoreArgs {
    /// Scale identifier (see `inhalers scales`).
    #[arg(value_name = "SCALE")]
    pub scale: String,

    /// Toggle a criterion by id (repeatable; toggling twice unselects).
    #[arg(long = "select", short = 's', value_name = "ID")]
    pub select: Vec<String>,

    /// JSON definition for scales without built-in data.
    #[arg(long = "scale-file", value_name = "PATH")]
    pub scale_file: Option<PathBuf>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
    Plain,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("valid arguments")
    }

    #[test]
    fn explicit_level_overrides_verbosity_and_env() {
        let cli = parse(&["inhalers", "-v", "--log-level", "trace", "scales"]);
        let config = cli.log_config();
        assert_eq!(config.level_filter, LevelFilter::TRACE);
        assert!(!config.use_env_filter);
    }

    #[test]
    fn defaults_defer_to_env_filter() {
        let cli = parse(&["inhalers", "--color", "never", "--log-format", "json", "scales"]);
        let config = cli.log_config();
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert!(config.use_env_filter);
        assert!(!config.with_ansi);
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn list_flags_build_filter() {
        let cli = parse(&[
            "inhalers", "list", "--tipo", "dual", "--epoc", "--clase", "laba", "--clase", "lama",
        ]);
        let Command::List(args) = cli.command else {
            panic!("expected list command");
        };
        let spec = args.filter_spec();
        assert_eq!(spec.treatment_type, Some(TreatmentType::Dual));
        assert!(spec.epoc && !spec.asma);
        assert_eq!(spec.classes.len(), 2);
    }
}
