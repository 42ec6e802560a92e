//! Text preview of a generated map.
//! Runs the full pipeline into a recording sink, then prints the per-layer
//! histogram and one character per cell (border ring included). Overlap halo
//! cells print in upper case.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use strata_core::{CellPos, CoastlineShape, Generator, GeneratorConfig, RecordingSink, UniformMapping};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Shape {
    None,
    Rectangle,
    Ellipse,
}

impl From<Shape> for CoastlineShape {
    fn from(s: Shape) -> Self {
        match s {
            Shape::None => CoastlineShape::None,
            Shape::Rectangle => CoastlineShape::Rectangle,
            Shape::Ellipse => CoastlineShape::Ellipse,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "preview", about = "Generate a layered island map and print a text preview")]
struct Args {
    /// JSON generator config. Built-in defaults when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    width: Option<usize>,

    #[arg(long)]
    height: Option<usize>,

    #[arg(long)]
    seed: Option<f64>,

    /// Draw a fresh seed instead of using the configured one.
    #[arg(long, conflicts_with = "seed")]
    random_seed: bool,

    #[arg(long, value_enum)]
    coastline: Option<Shape>,

    /// Only print the histogram.
    #[arg(long)]
    no_map: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => GeneratorConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GeneratorConfig::default(),
    };
    if let Some(w) = args.width {
        config.width = w;
    }
    if let Some(h) = args.height {
        config.height = h;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(shape) = args.coastline {
        config.coastline = shape.into();
    }
    if args.random_seed {
        config = config.with_random_seed(&mut rand::thread_rng());
    }

    let mut generator = Generator::new(config, UniformMapping::default());
    let mut sink = RecordingSink::new();
    generator.regenerate(&mut sink, false).context("generating map")?;

    let histogram = generator.histogram().context("no grid after generation")?;
    println!("seed {}", generator.config().seed);
    for (layer, &count) in histogram.counts.iter().enumerate() {
        let marker = generator.marker(layer).unwrap_or("?");
        println!("{layer:>2} {marker:<12} {count:>7} ({:>5.1}%)", histogram.fraction(layer) * 100.0);
    }

    if !args.no_map {
        print_map(&generator, &sink);
    }
    Ok(())
}

fn layer_char(generator: &Generator, layer: usize) -> char {
    generator
        .marker(layer)
        .and_then(|m| m.chars().next())
        .unwrap_or_else(|| char::from_digit(layer as u32 % 10, 10).unwrap_or('?'))
}

fn print_map(generator: &Generator, sink: &RecordingSink) {
    let mut top: HashMap<CellPos, usize> = HashMap::new();
    for p in &sink.paints {
        let entry = top.entry(p.cell).or_insert(p.layer);
        *entry = (*entry).max(p.layer);
    }
    let (Some(min_x), Some(max_x), Some(min_y), Some(max_y)) = (
        top.keys().map(|c| c.x).min(),
        top.keys().map(|c| c.x).max(),
        top.keys().map(|c| c.y).min(),
        top.keys().map(|c| c.y).max(),
    ) else {
        return;
    };

    for y in min_y..=max_y {
        let row: String = (min_x..=max_x)
            .map(|x| {
                let pos = CellPos::new(x, y);
                let Some(&layer) = top.get(&pos) else {
                    return ' ';
                };
                let c = layer_char(generator, layer);
                let base = generator.cell_at(pos).map(|cell| cell.layer);
                if base.is_some_and(|b| layer > b) {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                }
            })
            .collect();
        println!("{row}");
    }
}
