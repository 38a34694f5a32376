use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use typeorm_dbml::{generate_dbml, GenerateOptions};

#[derive(Parser)]
#[command(name = "typeorm-dbml")]
#[command(author, version, about = "Fast Rust generator of DBML schemas from TypeORM entities")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a DBML schema from TypeORM entity files
    Generate {
        /// Glob pattern, directory, or file containing the entities (quote globs!)
        #[arg(short, long)]
        source: String,

        /// Output path for the DBML file (defaults to schema.dbml)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Enable verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            source,
            output,
            verbose,
        } => {
            let options = GenerateOptions {
                source_pattern: source,
                output_path: output,
                verbose,
            };

            let report = generate_dbml(options)?;

            println!(
                "DBML schema generated successfully: {}",
                report.output_path.display()
            );
            println!("Processed {} file(s)", report.files_processed);
        }
    }

    Ok(())
}
