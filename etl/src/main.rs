//! nyphil CLI - Flatten the NY Philharmonic archive into a delimited table
//!
//! ```bash
//! nyphil transform                              # complete.xml -> NY_Philharmonic_df.csv
//! nyphil transform -i programs.xml -o works.csv --include-conductor
//! nyphil transform --json                       # Also print the run summary as JSON
//! nyphil parse -i complete.xml -o programs.json # Dump parsed programs as JSON
//! ```

use clap::{Parser, Subcommand};
use nyphil::{load_programs, run, TransformOptions, DEFAULT_INPUT, DEFAULT_OUTPUT};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nyphil")]
#[command(about = "Flatten NY Philharmonic concert programs into a pipe-delimited table", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full pipeline: archive XML -> one row per performed work
    Transform {
        /// Input archive XML
        #[arg(short, long, env = "NYPHIL_INPUT", default_value = DEFAULT_INPUT)]
        input: PathBuf,

        /// Output table (overwritten)
        #[arg(short, long, env = "NYPHIL_OUTPUT", default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Append a conductorName column
        #[arg(long)]
        include_conductor: bool,

        /// Keep only the composer surname
        #[arg(long)]
        surname_only: bool,

        /// Print the run summary as JSON on stdout
        #[arg(long)]
        json: bool,
    },

    /// Parse the archive and output programs as JSON
    Parse {
        /// Input archive XML
        #[arg(short, long, env = "NYPHIL_INPUT", default_value = DEFAULT_INPUT)]
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Transform {
            input,
            output,
            include_conductor,
            surname_only,
            json,
        } => cmd_transform(
            TransformOptions {
                input,
                output,
                include_conductor,
                surname_only,
            },
            json,
        ),

        Commands::Parse { input, output } => cmd_parse(&input, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_transform(options: TransformOptions, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Processing: {}", options.input.display());

    let summary = run(&options)?;

    eprintln!("   Encoding: {}", summary.input_info.encoding);
    eprintln!("   Programs: {}", summary.program_count);
    if summary.empty_program_count > 0 {
        eprintln!("   Without works: {}", summary.empty_program_count);
    }
    eprintln!("   Rows: {}", summary.row_count);
    eprintln!("💾 Output written to: {}", summary.options.output.display());

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}

fn cmd_parse(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Parsing: {}", input.display());

    let (info, programs) = load_programs(input)?;
    eprintln!("   Encoding: {}", info.encoding);
    eprintln!("✅ Parsed {} programs", programs.len());

    let json = serde_json::to_string_pretty(&programs)?;
    write_output(&json, output)?;

    Ok(())
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
