//! box-keygen - one-shot curve25519 keypair generator
//!
//! Draws 32 bytes from the OS entropy source, derives the matching
//! `crypto_box` public key and prints both as Base64 in a compact JSON
//! object on stdout. Logs go to stderr only.

mod error;
mod keypair;
mod record;

use clap::Parser;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use std::io::{self, Write};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use crate::error::Result;
use crate::keypair::Keypair;
use crate::record::KeypairRecord;

#[derive(Parser)]
#[command(name = "box-keygen")]
#[command(author, version, about = "Generate a crypto_box keypair as Base64 JSON", long_about = None)]
struct Cli {
    /// Enable verbose logging on stderr
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Generate one keypair from `rng` and write its record to `out`.
///
/// Nothing is written unless generation succeeds.
fn run<R, W>(rng: &mut R, out: &mut W) -> Result<()>
where
    R: RngCore + CryptoRng,
    W: Write,
{
    let keypair = Keypair::generate(rng)?;
    let record = KeypairRecord::from(&keypair);
    info!("Generated keypair, public key {}", record.public_key);

    record.write_to(out)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&mut OsRng, &mut out)
}
