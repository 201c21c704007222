use anyhow::Result;
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

use docker_builder::cli;
use docker_builder::command_runner::RealCommandRunner;
use docker_builder::output::Output;
use docker_builder::pipeline::Pipeline;

fn main() -> Result<()> {
    // Initialize tracing with RUST_LOG env filter
    // e.g., RUST_LOG=docker_builder=debug
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let invocation = match cli::parse_from(std::env::args_os()) {
        Ok(invocation) => invocation,
        Err(err) => err.exit(),
    };
    let request = &invocation.request;

    tracing::debug!(
        base_image = %request.base_image,
        directives = request.directives.len(),
        tag = ?request.tag,
        build_dir = %request.build_dir.display(),
        engine = %invocation.options.engine,
        "Parsed build request"
    );

    let pipeline = Pipeline::from_options(&invocation.options, &RealCommandRunner);

    if invocation.options.dry_run {
        pipeline.dry_run(request);
        return Ok(());
    }

    let report = pipeline.run(request)?;
    Output::summary(&report.dockerfile);

    if let Some(err) = report.failure {
        let code = err.exit_code();
        Output::error(format!("{:#}", anyhow::Error::from(err)));
        std::process::exit(code);
    }

    Ok(())
}
