// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command-line inspector for ASCII MSH mesh files
//!
//! Thin driver over `msh-lite-parser`: supplies the input (a path or stdin)
//! and renders either a summary or the parsed tables as JSON. No parsing
//! logic lives here.

use anyhow::{Context, Result};
use clap::Parser;
use msh_lite_model::{ElementKind, MshMesh};
use msh_lite_parser::MshParser;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "msh-lite", about = "Inspect ASCII MSH mesh files")]
struct Cli {
    /// Input file, or `-` for stdin
    file: PathBuf,

    /// Print the parsed tables as JSON instead of a summary
    #[arg(long)]
    json: bool,

    /// Fail on format versions other than 2.2 instead of warning
    #[arg(long)]
    strict_version: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let parser = MshParser::new().with_strict_version(cli.strict_version);

    let mesh = if cli.file == Path::new("-") {
        parser
            .parse_reader(io::stdin().lock())
            .context("failed to parse stdin")?
    } else {
        let file = File::open(&cli.file)
            .with_context(|| format!("failed to open {}", cli.file.display()))?;
        parser
            .parse_reader(file)
            .with_context(|| format!("failed to parse {}", cli.file.display()))?
    };

    for warning in &mesh.warnings {
        eprintln!("warning: {warning}");
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&mesh)?);
    } else {
        print_summary(&mesh);
    }

    Ok(())
}

/// Render the counts-and-regions overview
fn print_summary(mesh: &MshMesh) {
    println!(
        "{:<15}: {}.{}",
        "File version", mesh.header.version_major, mesh.header.version_minor
    );
    println!(
        "{:<15}: {}",
        "File type",
        if mesh.header.is_binary { "binary" } else { "ASCII" }
    );
    println!("{:<15}: {} bytes", "Word size", mesh.header.word_size);

    println!("{:<15}: {}", "Physical names", mesh.physical_regions.len());
    for region in &mesh.physical_regions {
        println!(
            "  dim {} tag {} {}",
            region.dimension, region.tag, region.name
        );
    }

    println!("{:<15}: {}", "Nodes", mesh.nodes.len());

    println!("{:<15}: {}", "Elements", mesh.elements.len());
    for kind in ElementKind::ALL {
        let count = mesh.elements_of_kind(kind).count();
        if count > 0 {
            println!("  {:<13}: {}", kind.name(), count);
        }
    }
}
