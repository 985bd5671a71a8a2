//! Example: Convert an audio file to .r8/.r1 artifacts
//!
//! Run with: cargo run --example convert_audio input.wav out/

use rer8::{convert_file, decode_source, ConvertOptions};
use std::env;
use std::fs;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: {} <input-audio> <output-dir>", args[0]);
        std::process::exit(1);
    }

    let input = PathBuf::from(&args[1]);
    let out_dir = PathBuf::from(&args[2]);

    println!("Reading {}...", input.display());
    let source = decode_source(&input)?;
    println!("  Sample rate: {} Hz", source.sample_rate);
    println!("  Samples: {}", source.samples.len());
    println!("  Duration: {:.2}s", source.duration_secs());

    let options = ConvertOptions {
        out_dir,
        ..Default::default()
    };

    println!("\nPacking at {} Hz...", options.target_rate);
    let converted = convert_file(&input, &options)?;

    for path in &converted.outputs {
        let size = fs::metadata(path)?.len();
        println!("  -> {} ({} bytes)", path.display(), size);
    }
    println!(
        "\n{} samples at {} Hz",
        converted.sample_count, converted.sample_rate
    );

    Ok(())
}
