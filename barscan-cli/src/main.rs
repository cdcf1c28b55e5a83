mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{Calibration, CaptureFormat};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "barscan")]
#[command(about = "Barscan - Code 39 capture synthesis and decoding", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize a capture file from Code 39 text
    Synth {
        /// Text to encode (sentinels are added automatically)
        #[arg(short, long)]
        text: String,

        /// Output capture file
        #[arg(short, long)]
        output: String,

        /// Capture file format
        #[arg(long, value_enum, default_value = "json")]
        format: CaptureFormat,

        /// Samples per narrow unit of width
        #[arg(long, default_value = "4")]
        samples_per_unit: u32,

        /// Quiet-zone padding on each side, in narrow units
        #[arg(long, default_value = "3")]
        quiet_zone: u32,
    },

    /// Decode a capture file
    Decode {
        /// Input capture file
        #[arg(short, long)]
        input: String,

        /// Capture file format
        #[arg(long, value_enum, default_value = "json")]
        format: CaptureFormat,

        /// Write the full decode report to this JSON file
        #[arg(short, long)]
        output: Option<String>,

        /// Print the report as JSON instead of human-readable text
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        calibration: Calibration,
    },

    /// Dump every pipeline stage of a capture
    Trace {
        /// Input capture file
        #[arg(short, long)]
        input: String,

        /// Capture file format
        #[arg(long, value_enum, default_value = "json")]
        format: CaptureFormat,

        #[command(flatten)]
        calibration: Calibration,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Synth {
            text,
            output,
            format,
            samples_per_unit,
            quiet_zone,
        } => commands::synth::execute(&text, &output, format, samples_per_unit, quiet_zone),

        Commands::Decode {
            input,
            format,
            output,
            json,
            calibration,
        } => commands::decode::execute(&input, format, &calibration, output.as_deref(), json),

        Commands::Trace {
            input,
            format,
            calibration,
        } => commands::trace::execute(&input, format, &calibration),
    }
}
