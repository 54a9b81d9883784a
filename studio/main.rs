/// petalset Studio
///
/// Browser viewer for a loaded flower dataset: a random 3×3 grid of samples,
/// each captioned with its category.  Served by a synchronous tiny_http
/// server; every reload of the page draws a new grid.
///
/// Run with:
///   cargo run --bin studio --release -- --root ../input/flowers
/// Then open http://127.0.0.1:7878
///
/// Routes:
///   /grid         : the grid page (fresh random pick)
///   /grid.png     : the current grid as one image
///   /samples/N.png: a single sample
///   /summary.json : counts per category and load failures

mod state;
mod render;
mod routes;
mod handlers;

use std::path::PathBuf;
use std::sync::{mpsc, Arc, Mutex};

use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tiny_http::Server;

use petalset::{spawn_progress_logger, DatasetLoader, LoaderConfig, PROGRESS_EVERY};
use state::GalleryState;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON loader config; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dataset root containing one directory per category
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Side length every image is resized to
    #[arg(short, long)]
    size: Option<u32>,

    /// Seed for the grid sampler
    #[arg(long)]
    seed: Option<u64>,

    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:7878")]
    addr: String,
}

/// Binds the HTTP server.  tiny_http reports failures as a `Send + Sync`
/// boxed error, which is flattened to a message here.
fn bind(addr: &str) -> Result<Server, Box<dyn std::error::Error>> {
    Server::http(addr).map_err(|e| format!("Failed to bind {}: {}", addr, e).into())
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
    let (dataset, reports) = loader.into_parts();
    let _ = progress.join();
    println!("{}", dataset.len());

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    let shared_state = Arc::new(Mutex::new(GalleryState::new(dataset, reports, rng)));

    let server = bind(&args.addr)?;
    info!("Gallery ready at http://{}/grid", args.addr);

    // One thread per request, as PNG encoding of a sample can take a moment.
    for request in server.incoming_requests() {
        let state_clone = shared_state.clone();
        std::thread::spawn(move || {
            routes::dispatch(request, state_clone);
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binds_to_an_ephemeral_port() {
        let server = bind("127.0.0.1:0").unwrap();
        assert!(server.server_addr().to_ip().is_some());
    }

    #[test]
    fn bad_address_is_an_error_not_a_panic() {
        let err = bind("not an address").err().unwrap();
        assert!(err.to_string().contains("not an address"));
    }
}
