use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

/// Best-effort diagnostic sink: appends timestamped lines to `debug.log`
/// in the data directory. Delivery is not guaranteed; write errors are
/// swallowed so diagnostics can never take the app down.
#[derive(Debug, Clone)]
pub struct DebugLog {
    path: PathBuf,
}

impl DebugLog {
    pub fn new(data_dir: &Path) -> Self {
        DebugLog {
            path: data_dir.join("debug.log"),
        }
    }

    pub fn log(&self, message: &str) {
        let line = format!("[{}] {}\n", Local::now().format("%Y-%m-%d %H:%M:%S"), message);
        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = file.write_all(line.as_bytes());
        }
    }
}
