use anyhow::{Context as AnyhowContext, Result};
use bindflow::cli;
use bindflow::engine::BindingContext;
use bindflow::logging::{self, Verbosity};
use bindflow::manifest;
use bindflow::output::{OutputFormatter, Report};
use clap::Parser;

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet));
    args.validate().context("Invalid arguments")?;

    let manifests = manifest::load_manifests(&args.path)
        .with_context(|| format!("Failed to load manifests from {}", args.path.display()))?;
    tracing::info!(count = manifests.len(), "loaded manifests");

    let ctx = BindingContext::new(&args.invocation_id).with_binding_data(args.binding_data());
    let report = Report::build(&manifests, &ctx, &args.supplied_values());
    let output = OutputFormatter::format(&report, args.format)?;

    match &args.output_file {
        Some(path) => std::fs::write(path, &output)
            .with_context(|| format!("Cannot write output file: {}", path.display()))?,
        None => println!("{output}"),
    }

    if report.has_failures() {
        anyhow::bail!(
            "{} of {} bindings failed to resolve",
            report.failed_bindings,
            report.total_bindings
        );
    }
    Ok(())
}
