use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rer8::{convert_file, decode_source, BatchReport, ConvertOptions, Failure};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rer8")]
#[command(version = "0.1.0")]
#[command(about = "Convert audio to the .r8/.r1 raw formats", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert audio files to .r8 / .r1
    Convert {
        /// Input audio files (wav, aif, aiff, mp3, flac, ogg, ...)
        inputs: Vec<PathBuf>,
        /// Output directory
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
        /// Target sample rate in Hz (2000-48000)
        #[arg(short, long, default_value_t = libr8_audio::DEFAULT_RATE)]
        rate: u32,
        /// Skip the raw 8-bit artifact
        #[arg(long)]
        no_r8: bool,
        /// Skip the 1-bit DPCM artifact
        #[arg(long)]
        no_r1: bool,
        /// Skip peak normalization
        #[arg(long)]
        no_normalize: bool,
        /// Skip TPDF dither
        #[arg(long)]
        no_dither: bool,
        /// Base seed for the dither noise
        #[arg(long, default_value_t = 0)]
        seed: u32,
        /// Print the batch report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show information about an input audio file
    Info {
        /// Input audio file
        input: PathBuf,
    },
    /// Reconstruct a .r1 stream to a WAV for auditioning
    Decode {
        /// Input .r1 file
        input: PathBuf,
        /// Original sample count (defaults to 8 bits per stream byte)
        #[arg(short = 'n', long)]
        samples: Option<usize>,
        /// Sample rate the stream was packed at
        #[arg(short, long, default_value_t = libr8_audio::DEFAULT_RATE)]
        rate: u32,
        /// Output WAV file
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            inputs,
            out_dir,
            rate,
            no_r8,
            no_r1,
            no_normalize,
            no_dither,
            seed,
            json,
        } => convert(
            inputs,
            ConvertOptions {
                out_dir,
                target_rate: rate,
                write_r8: !no_r8,
                write_r1: !no_r1,
                normalize: !no_normalize,
                dither: !no_dither,
                seed,
            },
            json,
        ),
        Commands::Info { input } => info(&input),
        Commands::Decode {
            input,
            samples,
            rate,
            output,
        } => decode(&input, samples, rate, &output),
    }
}

fn convert(inputs: Vec<PathBuf>, options: ConvertOptions, json: bool) -> Result<()> {
    if inputs.is_empty() {
        bail!("no input files given");
    }

    if !json {
        println!(
            "Converting {} file(s) to {} Hz...",
            inputs.len(),
            options.target_rate
        );
    }

    let mut report = BatchReport::default();
    for (i, input) in inputs.iter().enumerate() {
        if !json {
            println!("[{}/{}] {}", i + 1, inputs.len(), input.display());
        }
        match convert_file(input, &options) {
            Ok(converted) => {
                if !json {
                    for path in &converted.outputs {
                        let size = fs::metadata(path).map(|m| m.len()).unwrap_or(0);
                        println!("  -> {} ({} bytes)", path.display(), size);
                    }
                }
                report.converted.push(converted);
            }
            Err(e) => {
                if !json {
                    println!("  !! ERROR: {e:#}");
                }
                report.failures.push(Failure {
                    input: input.clone(),
                    error: format!("{e:#}"),
                });
            }
        }
    }

    if json {
        let json_str =
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json_str);
    } else {
        println!(
            "Done. {} converted, {} failed.",
            report.converted.len(),
            report.failures.len()
        );
    }

    if !report.all_ok() {
        bail!("{} input(s) failed to convert", report.failures.len());
    }
    Ok(())
}

fn info(input: &PathBuf) -> Result<()> {
    let source = decode_source(input)?;
    let peak = source.samples.iter().fold(0.0f32, |p, &x| p.max(x.abs()));

    println!("{}", input.display());
    println!("  Sample rate: {} Hz", source.sample_rate);
    println!("  Samples:     {}", source.samples.len());
    println!("  Duration:    {:.2}s", source.duration_secs());
    println!("  Peak:        {:.4}", peak);

    let count_at_default = (source.samples.len() as f64 * libr8_audio::DEFAULT_RATE as f64
        / source.sample_rate as f64)
        .floor() as usize;
    println!(
        "  At {} Hz: .r8 = {} bytes, .r1 = {} bytes",
        libr8_audio::DEFAULT_RATE,
        count_at_default,
        count_at_default.div_ceil(8)
    );

    Ok(())
}

fn decode(input: &PathBuf, samples: Option<usize>, rate: u32, output: &PathBuf) -> Result<()> {
    let bytes = fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?;
    let sample_count = samples.unwrap_or(bytes.len() * 8);

    let waveform = libr8_audio::dpcm::decode(&bytes, sample_count);
    let float_samples: Vec<f32> = waveform
        .iter()
        .map(|&v| libr8_audio::core::u8_to_f32(v))
        .collect();

    rer8::audio::write_wav(output, &float_samples, rate, 1)?;
    println!(
        "Wrote {} ({} samples at {} Hz)",
        output.display(),
        sample_count,
        rate
    );
    Ok(())
}
