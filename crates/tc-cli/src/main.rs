//! transit-index — build a transit network snapshot, then answer queries
//! against it.
//!
//! ```text
//! transit-index make-base        < base.json         # writes serialization_settings.file
//! transit-index process-requests < requests.json > responses.json
//! ```
//!
//! Both documents name the snapshot file in `serialization_settings.file`;
//! `--snapshot` overrides it.  Logs go to stderr so stdout carries only the
//! JSON response.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Args, Parser, Subcommand};
use log::{LevelFilter, error, info};

use tc_json::{BaseDocument, SerializationSettings, StatDocument};

#[derive(Parser)]
#[command(name = "transit-index", version)]
#[command(about = "Build a transit network snapshot and answer queries against it")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Raise log verbosity (-v info, -vv debug).  RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Load a build document, construct the index and write the snapshot.
    #[command(alias = "make_base")]
    MakeBase(IoArgs),

    /// Load a snapshot and answer the stat requests of a serve document.
    #[command(alias = "process_requests")]
    ProcessRequests {
        #[command(flatten)]
        args: IoArgs,

        /// Response file [default: stdout]
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
struct IoArgs {
    /// Input document [default: stdin]
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Snapshot file, overriding `serialization_settings.file`
    #[arg(long, short)]
    snapshot: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::MakeBase(args) => make_base(&args),
        Command::ProcessRequests { args, output } => process_requests(&args, output.as_deref()),
    }
}

// ── Modes ─────────────────────────────────────────────────────────────────────

fn make_base(args: &IoArgs) -> Result<()> {
    let t0 = Instant::now();
    let doc = BaseDocument::from_reader(open_input(args.input.as_deref())?)
        .context("reading build document")?;
    let path = snapshot_path(args, doc.serialization_settings.as_ref())?;

    let index = tc_json::build_index(&doc).context("building index")?;
    let bytes = tc_snapshot::write_snapshot(&path, &index)
        .with_context(|| format!("writing snapshot {}", path.display()))?;

    info!("make-base done in {:.2?}: {bytes} bytes", t0.elapsed());
    Ok(())
}

fn process_requests(args: &IoArgs, output: Option<&Path>) -> Result<()> {
    let t0 = Instant::now();
    let doc = StatDocument::from_reader(open_input(args.input.as_deref())?)
        .context("reading request document")?;
    let path = snapshot_path(args, doc.serialization_settings.as_ref())?;

    let index = tc_snapshot::read_snapshot(&path)
        .with_context(|| format!("loading snapshot {}", path.display()))?;
    // Nothing is written until every request has been answered.
    let responses = tc_json::process_stat_requests(&index, &doc.stat_requests)?;

    match output {
        Some(p) => {
            let file = File::create(p).with_context(|| format!("creating {}", p.display()))?;
            tc_json::write_responses(BufWriter::new(file), &responses)?;
        }
        None => tc_json::write_responses(io::stdout().lock(), &responses)?,
    }

    info!(
        "process-requests done in {:.2?}: {} responses",
        t0.elapsed(),
        doc.stat_requests.len()
    );
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>> {
    Ok(match path {
        Some(p) => {
            let file = File::open(p).with_context(|| format!("opening {}", p.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin().lock())),
    })
}

fn snapshot_path(args: &IoArgs, settings: Option<&SerializationSettings>) -> Result<PathBuf> {
    match (&args.snapshot, settings) {
        (Some(p), _) => Ok(p.clone()),
        (None, Some(s)) => Ok(s.file.clone()),
        (None, None) => bail!("no snapshot file: pass --snapshot or set serialization_settings.file"),
    }
}
