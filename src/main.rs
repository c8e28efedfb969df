use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info};

mod collect;
mod error;
mod examples;
mod oas;
mod patch;
mod prompt;

use oas::Document;
use prompt::Prompter;

pub type Result<T> = anyhow::Result<T>;

const DEFAULT_OUTPUT: &str = "openapi_with_examples.json";

#[derive(Parser, Debug)]
#[command(name = "openapi-examples", version)]
#[command(about = "Add example values to OpenAPI specification.", long_about = None)]
struct Cli {
    /// Path to the JSON OpenAPI specification file
    filepath: PathBuf,

    /// Where to write the updated specification (overwritten if present).
    #[arg(short = 'o', long, env = "OPENAPI_EXAMPLES_OUT", default_value = DEFAULT_OUTPUT)]
    out: PathBuf,
}

#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    NothingToDo,
    Written(PathBuf),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "openapi_examples=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut prompter = Prompter::stdio();

    match run(&cli, &mut prompter)? {
        Outcome::NothingToDo => {
            println!(
                "All parameters and request body properties already have example values. No further input needed."
            );
        }
        Outcome::Written(out) => {
            println!("Updated OpenAPI specification written to '{}'.", out.display());
        }
    }

    Ok(())
}

/// Load -> collect -> prompt -> patch -> write. Nothing is written when there
/// was nothing to ask.
fn run<R: BufRead, W: Write>(cli: &Cli, prompter: &mut Prompter<R, W>) -> Result<Outcome> {
    // 1) Load.
    let mut doc = Document::load(&cli.filepath)?;

    // 2) Collect everything that lacks an example.
    let param_sites = collect::collect_params(&doc)?;
    let property_sites = collect::collect_body_properties(&doc)?;
    debug!(
        parameters = param_sites.len(),
        properties = property_sites.len(),
        "collected items missing examples"
    );

    // 3) Ask.
    let param_examples = prompter.prompt_params(&param_sites)?;
    let body_examples = prompter.prompt_body(&property_sites)?;

    if param_examples.is_empty() && body_examples.is_empty() {
        return Ok(Outcome::NothingToDo);
    }

    // 4) Patch + write.
    let params_written = patch::apply_param_examples(&mut doc, &param_examples)?;
    let properties_written = patch::apply_body_examples(&mut doc, &body_examples)?;
    debug!(params_written, properties_written, "patched document");

    doc.write(&cli.out)?;
    info!(out = %cli.out.display(), "wrote updated document");

    Ok(Outcome::Written(cli.out.clone()))
}
