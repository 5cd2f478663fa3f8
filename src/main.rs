use clap::{Parser, ValueEnum};
use coldrand::baseline::{ByteSwap, Lcg, Xorshift};
use coldrand::{HkdfPrng, MonolithicPrng, OnlinePrng, SeedlessPrng};
use rand::RngCore;

#[derive(Parser, Debug)]
#[clap(name = "coldrand", about = "Seedless PRNG demo", version, rename_all = "kebab-case")]
pub struct DemoCmd {
    /// Generator strategy to drive
    #[clap(short = 's', long = "strategy", value_enum, default_value = "hkdf")]
    strategy: Strategy,

    /// Number of bytes to draw
    #[clap(short = 'n', long = "bytes", default_value_t = 4096)]
    bytes: usize,

    /// Width of the rendered density grid
    #[clap(long, default_value_t = 64)]
    width: usize,

    /// Skip the OS entropy refresh and draw from the public all-zero state
    #[clap(long)]
    unseeded: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Strategy {
    Monolithic,
    Online,
    Hkdf,
    Lcg,
    ByteSwap,
    Xorshift,
}

fn main() {
    let args = DemoCmd::parse();

    // the demo consumes only the refresh/next contract; the strategy stays opaque
    let mut prng: Box<dyn SeedlessPrng> = match args.strategy {
        Strategy::Monolithic => Box::new(MonolithicPrng::new()),
        Strategy::Online => Box::new(OnlinePrng::new()),
        Strategy::Hkdf => Box::new(HkdfPrng::new()),
        Strategy::Lcg => Box::new(Lcg::new()),
        Strategy::ByteSwap => Box::new(ByteSwap::new()),
        Strategy::Xorshift => Box::new(Xorshift::new()),
    };

    if !args.unseeded {
        let mut entropy = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut entropy);
        prng.refresh(&entropy);
    }

    let stream = match prng.next(args.bytes) {
        Ok(stream) => stream,
        Err(err) => {
            eprintln!("cannot draw output: {err}");
            std::process::exit(1);
        }
    };

    render_density(&stream, args.width.max(1));
    print_uniformity_summary(&stream);
}

/// Renders the stream as a density grid, one shaded cell per byte.
fn render_density(stream: &[u8], width: usize) {
    const SHADES: &[u8] = b" .:-=+*#%@";
    for row in stream.chunks(width) {
        let line: String = row
            .iter()
            .map(|&byte| SHADES[byte as usize * SHADES.len() / 256] as char)
            .collect();
        println!("{line}");
    }
}

/// Prints a coarse uniformity summary of the byte histogram.
fn print_uniformity_summary(stream: &[u8]) {
    if stream.is_empty() {
        println!("0 bytes drawn");
        return;
    }

    let mut histogram = [0usize; 256];
    for &byte in stream {
        histogram[byte as usize] += 1;
    }

    let min = histogram.iter().min().copied().unwrap_or(0);
    let max = histogram.iter().max().copied().unwrap_or(0);
    let expected = stream.len() as f64 / 256.0;
    let chi_square: f64 = histogram
        .iter()
        .map(|&count| {
            let diff = count as f64 - expected;
            diff * diff / expected
        })
        .sum();

    println!();
    println!(
        "{} bytes drawn; per-value counts min {min} / max {max} (expected {expected:.1}); chi-square {chi_square:.1} over 255 degrees of freedom",
        stream.len()
    );
}
