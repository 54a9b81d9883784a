// Batch front end: loads the five flower directories, prints the sample
// count, and optionally writes a random 3×3 grid and a JSON load report.
// For the browser viewer run:
//   cargo run --bin studio -- --root ../input/flowers
use std::path::PathBuf;
use std::sync::mpsc;

use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use petalset::{spawn_progress_logger, DatasetLoader, Error, GridCell, GridLayout, LoaderConfig, SampleGrid, PROGRESS_EVERY};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON loader config; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dataset root containing daisy/, dandelion/, rose/, sunflower/, tulip/
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Side length every image is resized to
    #[arg(short, long)]
    size: Option<u32>,

    /// Write a random 3x3 sample grid to this PNG file
    #[arg(long)]
    grid_out: Option<PathBuf>,

    /// Write per-category load reports to this JSON file
    #[arg(long)]
    report_json: Option<PathBuf>,

    /// Seed for the grid sampler
    #[arg(long)]
    seed: Option<u64>,

    /// Fail if any file could not be decoded
    #[arg(long)]
    strict: bool,
}

fn cell_line(cell: &GridCell) -> String {
    format!("[{}, {}] #{:<6} {}", cell.row, cell.col, cell.index, cell.caption())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    petalset::init_logger();
    let args = Args::parse();

    let mut config = LoaderConfig::resolve(args.config.as_deref())?;
    if let Some(root) = args.root {
        config.layout.root = root;
    }
    if let Some(size) = args.size {
        config.image_size = size;
    }

    let (tx, rx) = mpsc::channel();
    let progress = spawn_progress_logger(rx, PROGRESS_EVERY);
    let mut loader = DatasetLoader::new(config)?.with_progress(tx);
    loader.load_layout()?;
    let failed = loader.failure_count();
    let (dataset, reports) = loader.into_parts();
    let _ = progress.join();

    if let Some(path) = &args.report_json {
        let file = std::fs::File::create(path).map_err(|e| Error::Io { path: path.clone(), source: e })?;
        serde_json::to_writer_pretty(std::io::BufWriter::new(file), &reports)?;
        info!("Wrote load report to {}", path.display());
    }

    if args.strict && failed > 0 {
        return Err(Error::LoadFailures { count: failed }.into());
    }

    // Stdout carries the sample count and nothing else.
    println!("{}", dataset.len());

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    if dataset.is_empty() {
        info!("No samples loaded; skipping the sample grid");
        return Ok(());
    }

    let grid = SampleGrid::pick(&dataset, GridLayout::default(), &mut rng)?;
    for cell in grid.cells() {
        info!("{}", cell_line(cell));
    }

    if let Some(path) = &args.grid_out {
        grid.save_png(&dataset, path)?;
        info!("Wrote sample grid to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use petalset::Category;

    #[test]
    fn cell_line_names_position_index_and_flower() {
        let cell = GridCell { row: 2, col: 1, index: 42, label: Category::Sunflower };
        assert_eq!(cell_line(&cell), "[2, 1] #42     Flower: Sunflower");
    }

    #[test]
    fn args_accept_strict_and_outputs() {
        let args = Args::parse_from(["petalset", "--root", "flowers", "--strict", "--seed", "7"]);
        assert!(args.strict);
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.root, Some(PathBuf::from("flowers")));
        assert!(args.grid_out.is_none());
    }
}
