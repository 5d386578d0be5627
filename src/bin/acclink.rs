use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use miette::IntoDiagnostic;
use tracing::info;
use tracing_subscriber::EnvFilter;

use acclink::app::App;
use acclink::domain::FileFormat;
use acclink::error::AcclinkError;
use acclink::probe::{DEFAULT_TIMEOUT_SECS, HttpLinkProbe};
use acclink::report::TsvReport;
use acclink::resolver::EntrezResolver;

#[derive(Parser)]
#[command(name = "acclink")]
#[command(about = "Convert an assembly accession list into validated genomic download links")]
#[command(version, author)]
struct Cli {
    /// Input file containing one accession per line
    #[arg(short, long)]
    input: PathBuf,

    /// Output file for the tab-separated results
    #[arg(short, long, default_value = "results.tsv")]
    output: PathBuf,

    /// File type to link for every accession
    #[arg(short, long)]
    format: FileFormat,

    /// Reachability probe timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,
}

fn main() -> ExitCode {
    if let Err(report) = run() {
        eprintln!("{report:?}");
        if let Some(err) = report.downcast_ref::<AcclinkError>() {
            return ExitCode::from(map_exit_code(err));
        }
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn map_exit_code(error: &AcclinkError) -> u8 {
    match error {
        AcclinkError::InputRead(_) | AcclinkError::InputIo(_) => 2,
        AcclinkError::HttpClient(_) => 3,
        _ => 1,
    }
}

fn run() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let input = File::open(&cli.input)
        .map_err(|_| AcclinkError::InputRead(cli.input.clone()))
        .into_diagnostic()?;
    let output = File::create(&cli.output)
        .map_err(|_| AcclinkError::OutputWrite(cli.output.clone()))
        .into_diagnostic()?;

    let probe = HttpLinkProbe::new(Duration::from_secs(cli.timeout)).into_diagnostic()?;
    let app = App::new(EntrezResolver::new(), probe);
    let mut report = TsvReport::new(BufWriter::new(output));

    let summary = app
        .run(BufReader::new(input), cli.format, &mut report)
        .into_diagnostic()?;
    info!(
        rows = summary.rows,
        not_found = summary.not_found,
        output = %cli.output.display(),
        "run complete"
    );
    Ok(())
}
