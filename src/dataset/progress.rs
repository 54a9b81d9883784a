use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use std::thread::{self, JoinHandle};

use log::info;
use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Per-file progress emitted by `DatasetLoader`.
///
/// When a progress sender is attached with `DatasetLoader::with_progress`,
/// the loader sends one `LoadProgress` after every attempted file.  Both
/// binaries drain the channel with `spawn_progress_logger`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadProgress {
    pub category: Category,
    /// 1-based count of files attempted so far in this category.
    pub processed: usize,
    /// Number of files listed in the category directory.
    pub total: usize,
    pub path: PathBuf,
    /// Whether this file became a sample.
    pub ok: bool,
}

impl LoadProgress {
    /// Completed fraction in [0, 1].
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.processed as f64 / self.total as f64
        }
    }
}

/// Events between two progress log lines.
pub const PROGRESS_EVERY: usize = 100;

/// Whether `p` deserves a log line: every `every`-th file, and the last file
/// of each category.
pub fn should_report(p: &LoadProgress, every: usize) -> bool {
    p.processed == p.total || (every > 0 && p.processed % every == 0)
}

/// Drains `rx` on a background thread, logging progress at `info` level.
///
/// The thread ends once every sender is dropped, which happens when the
/// loader is dropped or consumed.  Joining yields the number of events seen.
pub fn spawn_progress_logger(rx: Receiver<LoadProgress>, every: usize) -> JoinHandle<usize> {
    thread::spawn(move || {
        let mut seen = 0;
        for p in rx {
            seen += 1;
            if should_report(&p, every) {
                info!("{}: {}/{} files ({:.0}%)", p.category, p.processed, p.total, p.fraction() * 100.0);
            }
        }
        seen
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn at(processed: usize, total: usize) -> LoadProgress {
        LoadProgress { category: Category::Tulip, processed, total, path: PathBuf::new(), ok: true }
    }

    #[test]
    fn reports_on_interval_and_at_the_end() {
        assert!(should_report(&at(100, 250), 100));
        assert!(should_report(&at(250, 250), 100));
        assert!(!should_report(&at(99, 250), 100));
        assert!(should_report(&at(3, 3), 0));
        assert!(!should_report(&at(1, 3), 0));
    }

    #[test]
    fn fraction_of_an_empty_directory_is_complete() {
        assert_eq!(at(0, 0).fraction(), 1.0);
        assert_eq!(at(1, 4).fraction(), 0.25);
    }

    #[test]
    fn logger_drains_until_the_sender_is_dropped() {
        let (tx, rx) = mpsc::channel();
        let handle = spawn_progress_logger(rx, 2);
        for n in 1..=5 {
            tx.send(at(n, 5)).unwrap();
        }
        drop(tx);
        assert_eq!(handle.join().unwrap(), 5);
    }
}
