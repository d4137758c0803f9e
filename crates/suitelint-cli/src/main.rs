//! suitelint CLI — checks Python test-suite files for convention
//! violations and exits non-zero when any are found.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use suitelint_core::{
    BatchDriver, CheckConfig, ConsoleReporter, JsonReporter, Reporter, RuleSelection,
};

#[derive(Parser)]
#[command(
    name = "suitelint",
    version,
    about = "Static checks for test-suite conventions: no log.warning() in test bodies, no raw execute() where a tool wrapper exists"
)]
struct Cli {
    /// Python test-suite files to check
    files: Vec<PathBuf>,

    /// Additional decorator name treated as a test-case marker
    /// (repeatable; TestCaseMetadata is always recognized)
    #[arg(long = "marker", value_name = "NAME")]
    markers: Vec<String>,

    /// Which rule set to run
    #[arg(long, value_enum, default_value = "all")]
    rule: RuleArg,

    /// Report format
    #[arg(long, value_enum, default_value = "console")]
    format: FormatArg,

    /// Disable ANSI colors in console output
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RuleArg {
    Logging,
    Tools,
    All,
}

impl From<RuleArg> for RuleSelection {
    fn from(arg: RuleArg) -> Self {
        match arg {
            RuleArg::Logging => RuleSelection::Logging,
            RuleArg::Tools => RuleSelection::Tools,
            RuleArg::All => RuleSelection::All,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Console,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.files.is_empty() {
        eprintln!("usage: suitelint [OPTIONS] <FILES>...");
        eprintln!("error: at least one input file is required (see --help)");
        return ExitCode::from(1);
    }

    match run(cli) {
        Ok(clean) => {
            if clean {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    let mut config = CheckConfig::default();
    config.test_markers.extend(cli.markers.iter().cloned());

    let mut driver = BatchDriver::new(config, cli.rule.into())
        .context("failed to initialize the Python parser")?;
    let report = driver.check_files(&cli.files);

    let reporter: Box<dyn Reporter> = match cli.format {
        FormatArg::Console => Box::new(ConsoleReporter::new(!cli.no_color)),
        FormatArg::Json => Box::new(JsonReporter),
    };
    print!("{}", reporter.generate(&report)?);

    Ok(report.is_clean())
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
