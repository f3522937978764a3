//! Writes a fixed-length run of filler bytes to stdout. Exists so a test
//! suite that wants an input of a particular size can generate one on the fly
//! instead of checking a fixture of every size into version control.

#![forbid(unsafe_code)]

mod colour;
mod generator;
mod logging;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[clap(version, about)]
struct Args {
    /// Number of bytes to write to stdout.
    #[clap(value_name = "LEN", allow_hyphen_values = true)]
    len: Vec<String>,

    /// Whether to use coloured output.
    #[clap(long, alias = "color", default_value = "auto")]
    colour: colour::Colour,

    /// Write a log of what this invocation did to the specified file.
    #[clap(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    let mut args = Args::parse();
    args.colour = args.colour.detect();
    if let Err(error) = run(&args) {
        eprintln!("{} {:#}", "error:".red(), error);
        std::process::exit(-1);
    }
}

fn run(args: &Args) -> Result<()> {
    if let Some(log_path) = &args.log_file {
        logging::init(log_path)?;
    }
    let raw_length = generator::expect_single_arg(&args.len)?;
    let length = generator::parse_length(raw_length)?;
    log::info!("writing {length} bytes");
    let stdout = std::io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    generator::write_filler(&mut writer, length)?;
    log::info!("done");
    Ok(())
}
