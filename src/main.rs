//! pfagen — generate the aardpfark Scala function-library DSL from the PFA
//! library specification.
//!
//! Single-shot pipeline: acquire the XML spec (network or local file), parse
//! it, extract one declaration per `<fcn>` element, group declarations into a
//! namespace tree, render the tree as nested Scala `object`s inside a
//! `FunctionLibrary` trait, and write the result in one go. Any failure
//! aborts the run; partial output is never written.

mod config;
mod extract;
mod fetch;
mod model;
mod render;
mod tree;

use anyhow::{Context, Result};
use clap::Parser;
use config::GenConfig;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pfagen",
    about = "Generate the aardpfark Scala function-library DSL from the PFA library spec"
)]
struct Cli {
    /// Read the XML spec from a local file instead of fetching it
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,

    /// URL of the PFA library spec
    #[arg(short = 'u', long, default_value = config::DEFAULT_SPEC_URL)]
    url: String,

    /// Output file for the generated Scala source
    #[arg(short = 'o', long, default_value = "FunctionLibrary.scala")]
    output: PathBuf,

    /// Namespace for function names without a dotted prefix
    #[arg(long, default_value = "core")]
    namespace: String,

    /// Indent width in spaces (cosmetic only)
    #[arg(long, default_value_t = 4)]
    indent: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let xml = match &cli.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => fetch::fetch(&cli.url)?,
    };

    let cfg = GenConfig {
        default_namespace: cli.namespace,
        indent: cli.indent,
        ..GenConfig::default()
    };

    let scala = generate(&xml, &cfg)?;

    fs::write(&cli.output, scala)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    Ok(())
}

/// Core generation pipeline — extracted for testability.
fn generate(xml: &str, cfg: &GenConfig) -> Result<String> {
    let doc = roxmltree::Document::parse(xml).context("parsing XML spec")?;
    let decls = extract::extract(&doc, cfg)?;
    render::render_library(&decls, cfg)
}
