use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use sarif_split::{SplitPolicy, WrittenFile, read_sarif, split_document_to_dir};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    if args.log {
        init_logging();
    }

    let params = args.to_params();
    params.validate()?;
    debug!("Split parameters: {:?}", params);

    let document = read_sarif(&args.input)?;

    match document.run_count() {
        Some(total) => {
            println!("Total runs found: {}", total);
            match params.policy {
                SplitPolicy::PerRun => println!("Creating one SARIF file per run..."),
                SplitPolicy::Chunked => println!(
                    "Creating SARIF files with at most {} run(s) each...",
                    params.max_runs_per_file
                ),
            }
        }
        None if !document.has_runs() => {
            println!("No 'runs' found in {}", args.input.display());
        }
        None => {}
    }

    let report = split_document_to_dir(
        document,
        &args.input,
        &args.output_dir,
        &params,
        |file: &WrittenFile, total| {
            println!("  [{}/{}] Created {}", file.index, total, file.file_name);
        },
    )?;

    if report.is_empty() {
        return Err(AppError::NoOutput);
    }

    info!("Output directory: {:?}", args.output_dir);
    println!(
        "\n✓ Successfully split {} into {} file(s)",
        args.input.display(),
        report.files.len()
    );
    Ok(())
}
