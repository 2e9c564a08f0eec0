//! EQ Response - prints the transfer function of the parametric equalizer
//!
//! Entry point for the command-line tool.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::info;

use eq_response::dsp::PARAMETERS;
use eq_response::engine::{TransferFunction, DEFAULT_SAMPLE_RATE};
use eq_response::persistence::{load_from_file, save_to_file, Preset};
use eq_response::plot::{sample_response, DEFAULT_PLOT_WIDTH};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// Pixel column and plot y coordinate
    Pixels,
    /// Frequency in Hz and response in dB
    Db,
}

#[derive(Parser)]
#[command(name = "eq-response")]
#[command(about = "Transfer function of an 8-stage parametric EQ", long_about = None)]
struct Cli {
    /// Preset file to start from (JSON)
    #[arg(short, long)]
    preset: Option<PathBuf>,

    /// Sample rate in Hz (default: preset's, else 48000)
    #[arg(short, long)]
    rate: Option<f64>,

    /// Plot width in pixels
    #[arg(short, long, default_value_t = DEFAULT_PLOT_WIDTH)]
    width: usize,

    /// Parameter override, e.g. --set gain1=6 (repeatable)
    #[arg(short, long = "set", value_parser = parse_assignment)]
    set: Vec<(String, f64)>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "pixels")]
    format: Format,

    /// Write the resulting settings to a preset file
    #[arg(long)]
    save: Option<PathBuf>,

    /// List the parameters and exit
    #[arg(short, long)]
    list: bool,
}

fn parse_assignment(s: &str) -> Result<(String, f64), String> {
    let (symbol, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected SYMBOL=VALUE, got '{}'", s))?;
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid value for {}: {}", symbol, e))?;
    Ok((symbol.trim().to_string(), value))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    if cli.list {
        for p in &PARAMETERS {
            println!(
                "{:<10} {:<22} {:>9} .. {:<9} default {} {}",
                p.symbol,
                p.name,
                p.min,
                p.max,
                p.default,
                p.display.unit().unwrap_or("")
            );
        }
        return Ok(());
    }

    let mut tf = match &cli.preset {
        Some(path) => {
            let preset = load_from_file(path)?;
            info!(name = %preset.name, "loaded preset");
            TransferFunction::from_preset(&preset)?
        }
        None => TransferFunction::with_defaults(DEFAULT_SAMPLE_RATE),
    };
    if let Some(rate) = cli.rate {
        tf.set_sample_rate(rate);
    }
    for (symbol, value) in &cli.set {
        tf.set_parameter(symbol, *value)?;
    }

    if let Some(path) = &cli.save {
        save_to_file(&Preset::capture("eq-response", &tf), path)?;
        info!(path = %path.display(), "saved preset");
    }

    if !tf.is_active() {
        info!("equalizer disabled or bypassed");
    }

    let state = tf.state()?;
    match cli.format {
        Format::Pixels => {
            for point in tf.sample_curve(cli.width)? {
                println!("{}\t{:.3}", point.x, point.y);
            }
        }
        Format::Db => {
            for (f, db) in sample_response(state, cli.width) {
                println!("{:.2}\t{:.3}", f, db);
            }
        }
    }

    Ok(())
}
