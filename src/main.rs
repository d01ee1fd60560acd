use anyhow::Result;
use clap::Parser;
use perfstat::{cli::Cli, extractor, report, stats};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let Some(log_file) = args.log_file else {
        eprintln!("Enter the path to the log file.");
        return Ok(());
    };

    // An unreadable file has already printed its own diagnostic and comes
    // back as zero records, so both cases share the no-data short-circuit.
    let records = extractor::extract_from_file(&log_file);
    if records.is_empty() {
        eprintln!("No data found to process.");
        return Ok(());
    }

    let statistics = stats::aggregate(&records);
    report::print(&statistics);

    Ok(())
}
