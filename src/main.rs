//! metacheck - audits a Unity-style asset tree for `.meta` sidecar consistency.
//!
//! Usage:
//!   metacheck -p Assets                      Check sidecars and empty folders
//!   metacheck -p Assets -a Bundles           Also check bundle file names
//!   metacheck -p Assets -a Bundles -e Bundles/Debug --json
//!
//! Exit status: 0 when nothing was found, 1 when any finding was reported,
//! 2 when the tree could not be checked.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use color_eyre::eyre::{Context, Result};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, prelude::*};

use metacheck_analyze::{Language, report, validate};
use metacheck_scan::{CheckConfig, TreeCollector};

/// Exit code for operational failures (matches clap's usage errors).
const EXIT_ERROR: u8 = 2;

#[derive(Parser)]
#[command(
    name = "metacheck",
    version,
    about = "Audit an asset tree for .meta sidecar consistency",
    long_about = "metacheck walks an asset directory once and reports files without a \
                  .meta sidecar, .meta files without an asset, empty folders, and \
                  AssetBundle files that share a name."
)]
struct Cli {
    /// Asset root to scan
    #[arg(short = 'p', long, value_name = "PATH")]
    target_path: PathBuf,

    /// AssetBundle directory, relative to the target path (default: whole tree)
    #[arg(short = 'a', long, value_name = "DIR")]
    asset_bundle_dir: Option<PathBuf>,

    /// Directory excluded from AssetBundle name checks (repeatable)
    #[arg(short = 'e', long = "exclude-asset-bundle-dir", value_name = "DIR")]
    exclude_asset_bundle_dirs: Vec<PathBuf>,

    /// Print the result as JSON
    #[arg(short, long)]
    json: bool,

    /// Language of text report headers
    #[arg(short, long, default_value = "en")]
    lang: Lang,

    /// Follow symbolic links while walking
    #[arg(short = 'L', long)]
    follow_symlinks: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum Lang {
    #[default]
    En,
    Ja,
}

impl From<Lang> for Language {
    fn from(lang: Lang) -> Self {
        match lang {
            Lang::En => Language::English,
            Lang::Ja => Language::Japanese,
        }
    }
}

fn main() -> ExitCode {
    if let Err(err) = color_eyre::install() {
        eprintln!("Error: {err}");
        return ExitCode::from(EXIT_ERROR);
    }

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Log to stderr so stdout only carries the report.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(level)
        .init();
}

/// Collect, validate and print. Returns the exit code for the findings.
fn run(cli: Cli) -> Result<u8> {
    let root = cli
        .target_path
        .canonicalize()
        .with_context(|| format!("Invalid target path: {}", cli.target_path.display()))?;

    let mut builder = CheckConfig::builder();
    builder
        .root(root)
        .asset_bundle_dir(cli.asset_bundle_dir)
        .exclude_asset_bundle_dirs(cli.exclude_asset_bundle_dirs)
        .follow_symlinks(cli.follow_symlinks);
    let config = CheckConfig::try_from_builder(&builder).context("Invalid arguments")?;

    info!(root = %config.root.display(), "scanning");
    let tree = TreeCollector::new()
        .collect(&config)
        .context("Scan failed")?;

    let result = validate(&tree);
    info!(findings = result.finding_count(), "validation complete");

    if cli.json {
        println!("{}", report::render_json(&result)?);
    } else {
        print!("{}", report::render_text(&result, cli.lang.into()));
    }

    Ok(report::exit_code(&result))
}
