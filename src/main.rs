use std::io;

use anyhow::{Context, Result};
use vecgen::{GeneratorConfig, generate, render};

fn main() -> Result<()> {
    env_logger::init();

    let config = GeneratorConfig::default();
    let dataset = generate(&config).context("generating dataset")?;

    let stdout = io::stdout();
    render(&dataset, stdout.lock()).context("writing dataset to stdout")?;

    log::info!(
        "Wrote {} vectors ({} components each) to stdout",
        dataset.len(),
        config.dim
    );
    Ok(())
}
