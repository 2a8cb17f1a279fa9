use std::io::Write;

use anyhow::{Context, Result};
use clap::*;
use miniqr::{render::Svg, *};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
struct Args {
    string: String,
    #[arg(short, long)]
    version: Option<u8>,
    #[arg(short, long)]
    mask: Option<u8>,

    #[command(subcommand)]
    output: OutputMode,
}

#[derive(Subcommand, Clone)]
enum OutputMode {
    Print,
    Svg {
        #[arg(long, short, default_value_t = 200)]
        size: u32,
        #[arg(long, short, default_value = "ffffff")]
        white_color: String,
        #[arg(long, short, default_value = "000000")]
        black_color: String,
        path: Option<String>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // stdout is reserved for the symbol
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mat = generate(&args)?;

    match args.output {
        OutputMode::Print => print!("{mat}"),
        OutputMode::Svg { size, white_color, black_color, path } => {
            let light = parse_color(&white_color)?;
            let dark = parse_color(&black_color)?;
            let svg = Svg::new(size).light(light).dark(dark).render(&mat);

            match path {
                Some(path) => std::fs::write(&path, svg).with_context(|| format!("failed to write {path}"))?,
                None => std::io::stdout().write_all(svg.as_bytes()).context("failed to write to stdout")?,
            }
        },
    }

    Ok(())
}

fn generate(args: &Args) -> Result<QrMatrix> {
    let data = args.string.as_bytes();
    let ec = ErrorCorrectLv::M;

    let mat = match (args.version, args.mask) {
        (None, None) => encode(data),
        (version, mask) => {
            let version = match version {
                Some(v) => Version::new(v)?,
                None => Version::smallest_version(&[data], ec)?,
            };

            match mask {
                Some(m) => QrMatrix::with_mask(&[data], version, ec, Mask::new(m)?),
                None => QrMatrix::generate(&[data], version, ec),
            }
        },
    };

    mat.context("failed to encode the input")
}

fn parse_color(color: &str) -> Result<u32> {
    let color = color.trim_start_matches('#');
    u32::from_str_radix(color, 16).with_context(|| format!("failed to parse color {color:?}"))
}
