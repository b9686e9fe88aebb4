//! ordscan CLI - Command line interface
//!
//! Reads a sequence from a file or stdin and reports where it stops being
//! sorted. Settings come from `ordscan.json` (if present) and command-line
//! flags, flags taking precedence.

use clap::{ArgAction, Parser, ValueEnum};
use std::io;
use std::path::{Path, PathBuf};
use std::process;

mod config;
mod logging;
mod output;

use crate::config::{parse_log_level, LogConfig};
use crate::logging::LogFormat;
use ordscan_api::{check_global, init_config, KeyKind, OrdscanError, Order, ScanReport};
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};

/// 命令行日志级别
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Off => LevelFilter::OFF,
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogFormatArg {
    Pretty,
    Compact,
    Json,
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

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OrderArg {
    #[value(name = "asc", alias = "ascending")]
    Ascending,
    #[value(name = "desc", alias = "descending")]
    Descending,
}

impl From<OrderArg> for Order {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Ascending => Order::Ascending,
            OrderArg::Descending => Order::Descending,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum KeyArg {
    Identity,
    Abs,
    Length,
    Lowercase,
}

impl From<KeyArg> for KeyKind {
    fn from(key: KeyArg) -> Self {
        match key {
            KeyArg::Identity => KeyKind::Identity,
            KeyArg::Abs => KeyKind::Abs,
            KeyArg::Length => KeyKind::Length,
            KeyArg::Lowercase => KeyKind::Lowercase,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "ordscan",
    about = "Find the first position where a sequence stops being sorted",
    version = "0.1.0"
)]
struct Cli {
    /// Input file (default: stdin; `-` also reads stdin)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Expected order
    #[arg(long, value_enum)]
    order: Option<OrderArg>,

    /// Key compared instead of the raw value
    #[arg(long, value_enum)]
    key: Option<KeyArg>,

    /// Project configuration file (default: ./ordscan.json if present)
    #[arg(long, value_name = "PATH")]
    project: Option<PathBuf>,

    /// Maximum number of input elements
    #[arg(long, value_name = "N")]
    max_elements: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Log level for the parse phase
    #[arg(long, value_enum, value_name = "LEVEL")]
    log_parse: Option<LogLevelArg>,

    /// Log level for the scan phase
    #[arg(long, value_enum, value_name = "LEVEL")]
    log_scan: Option<LogLevelArg>,

    /// Log level for the report phase
    #[arg(long, value_enum, value_name = "LEVEL")]
    log_report: Option<LogLevelArg>,

    /// Log level for the CLI itself
    #[arg(long, value_enum, value_name = "LEVEL")]
    log_cli: Option<LogLevelArg>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormatArg::Compact)]
    format: LogFormatArg,

    /// Also append logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the report (or error) as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    let code = match run(cli) {
        Ok(report) => {
            println!("{}", output::render_report(&report, json));
            output::exit_code(&report)
        }
        Err(e) => {
            eprintln!("{}", output::render_error(&e.to_report(), json));
            output::EXIT_ERROR
        }
    };
    process::exit(code);
}

fn run(cli: Cli) -> Result<ScanReport, OrdscanError> {
    let project = config::load_project(cli.project.as_deref())?;

    let log_config = build_log_config(&cli, project.log_level.as_deref())?;
    logging::init_with_file(&log_config, cli.format.into(), cli.log_file.as_deref())?;

    let run_config = project.into_run_config(
        cli.order.map(Order::from),
        cli.key.map(KeyKind::from),
        cli.max_elements,
    );
    info!(
        target: "ordscan::cli",
        order = run_config.scan.order.as_str(),
        key = run_config.scan.key.as_str(),
        max_elements = run_config.limits.max_elements,
        "configuration loaded"
    );

    // Initialize API config (global singleton for convenience)
    init_config(run_config);

    let input = read_input(cli.file.as_deref())?;
    debug!(target: "ordscan::cli", bytes = input.len(), "input read");

    check_global(&input)
}

/// 合并 -v、项目配置中的 log_level 和分阶段参数
///
/// `-v` 优先于项目配置；都没有时默认 warn。
fn build_log_config(cli: &Cli, project_level: Option<&str>) -> Result<LogConfig, OrdscanError> {
    let global = match cli.verbose {
        0 => match project_level {
            Some(s) => parse_log_level(s)
                .ok_or_else(|| OrdscanError::Config(format!("unknown log level {:?}", s)))?,
            None => LevelFilter::WARN,
        },
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    Ok(LogConfig {
        global,
        parse: cli.log_parse.map(LevelFilter::from),
        scan: cli.log_scan.map(LevelFilter::from),
        report: cli.log_report.map(LevelFilter::from),
        cli: cli.log_cli.map(LevelFilter::from),
    })
}

/// 读取输入：文件或 stdin
fn read_input(file: Option<&Path>) -> Result<String, OrdscanError> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path).map_err(|e| {
            OrdscanError::Io(format!("cannot read '{}': {}", path.display(), e))
        }),
        _ => Ok(io::read_to_string(io::stdin())?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordscan_api::Phase;
    use std::io::Write;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("ordscan").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.file, None);
        assert_eq!(cli.order, None);
        assert_eq!(cli.key, None);
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.format, LogFormatArg::Compact);
        assert!(!cli.json);
    }

    #[test]
    fn test_order_and_key_flags() {
        let cli = parse(&["--order", "desc", "--key", "lowercase", "input.txt"]);
        assert_eq!(cli.order.map(Order::from), Some(Order::Descending));
        assert_eq!(cli.key.map(KeyKind::from), Some(KeyKind::Lowercase));
        assert_eq!(cli.file, Some(PathBuf::from("input.txt")));

        let cli = parse(&["--order", "ascending"]);
        assert_eq!(cli.order, Some(OrderArg::Ascending));
    }

    #[test]
    fn test_rejects_unknown_key() {
        let result = Cli::try_parse_from(["ordscan", "--key", "reverse"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbosity_levels() {
        let cases = [
            (vec![], LevelFilter::WARN),
            (vec!["-v"], LevelFilter::INFO),
            (vec!["-vv"], LevelFilter::DEBUG),
            (vec!["-vvvv"], LevelFilter::TRACE),
        ];
        for (args, expected) in cases {
            let cli = parse(&args);
            assert_eq!(build_log_config(&cli, None).unwrap().global, expected);
        }
    }

    #[test]
    fn test_project_log_level_used_without_verbose() {
        let cli = parse(&["--log-scan", "trace"]);
        let log_config = build_log_config(&cli, Some("debug")).unwrap();
        assert_eq!(log_config.global, LevelFilter::DEBUG);
        assert_eq!(log_config.scan, Some(LevelFilter::TRACE));
        assert_eq!(log_config.parse, None);

        let cli = parse(&["-v"]);
        let log_config = build_log_config(&cli, Some("debug")).unwrap();
        assert_eq!(log_config.global, LevelFilter::INFO);
    }

    #[test]
    fn test_per_phase_log_flags() {
        let cli = parse(&["--log-cli", "debug", "--log-report", "off"]);
        let log_config = build_log_config(&cli, None).unwrap();
        assert_eq!(log_config.global, LevelFilter::WARN);
        assert_eq!(log_config.level_for(Phase::Cli), LevelFilter::DEBUG);
        assert_eq!(log_config.level_for(Phase::Report), LevelFilter::OFF);
        assert_eq!(log_config.level_for(Phase::Parse), LevelFilter::WARN);
    }

    #[test]
    fn test_bad_project_log_level() {
        let cli = parse(&[]);
        let err = build_log_config(&cli, Some("loud")).unwrap_err();
        assert_eq!(err.phase(), "config");
    }

    #[test]
    fn test_read_input_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "3 2 1").unwrap();
        assert_eq!(read_input(Some(file.path())).unwrap(), "3 2 1");

        let err = read_input(Some(Path::new("/nonexistent/ordscan-input.txt"))).unwrap_err();
        assert_eq!(err.phase(), "io");
    }
}
