use clap::{Parser, Subcommand};
use gal_index::{output, scan};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gal-index")]
#[command(about = "Image catalog indexer for static gallery sites")]
#[command(long_about = "\
Image catalog indexer for static gallery sites

Your filesystem is the data source. Each first-level subdirectory of the
catalog root becomes a category, and the image files inside it become that
category's entries in the generated index.json.

Catalog structure:

  photos/
  ├── index.json                   # Generated manifest (overwritten each run)
  ├── cats/                        # Category
  │   ├── whiskers.png
  │   ├── tabby.JPG                # .png/.jpg/.jpeg/.webp, any case
  │   └── notes.txt                # Non-image files are skipped
  ├── dogs/                        # Categories without images are dropped
  ├── node_modules/                # Never a category
  └── .archive/                    # Hidden directories are never categories

Running with no arguments catalogs the current directory and writes
index.json into it.")]
#[command(version)]
struct Cli {
    /// Catalog root directory
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Output file for the generated index (defaults to index.json inside the root)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the catalog root and write the JSON index (the default)
    Build,
    /// Scan and print the inventory without writing anything
    Check,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Build) {
        Command::Build => {
            let index = scan::build_index(&cli.root)?;
            let output_path = cli
                .output
                .unwrap_or_else(|| cli.root.join("index.json"));
            let json = serde_json::to_string_pretty(&index)?;
            std::fs::write(&output_path, json)?;
            output::print_build_summary(&index, &output_path);
        }
        Command::Check => {
            let index = scan::build_index(&cli.root)?;
            output::print_scan_output(&index);
            println!("==> Catalog is valid");
        }
    }

    Ok(())
}
