//! Utility functions for scaled-ml

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;

/// Save object to JSON file
pub fn save_json<T: Serialize, P: AsRef<Path>>(obj: &T, path: P) -> Result<()> {
    let json = serde_json::to_string_pretty(obj)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Load object from JSON file
pub fn load_json<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> Result<T> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Timing utilities
pub mod timing {
    use std::time::Instant;

    /// Simple timer that logs its lifetime on drop
    pub struct Timer {
        start: Instant,
        name: String,
    }

    impl Timer {
        /// Start new timer
        pub fn new(name: &str) -> Self {
            Timer {
                start: Instant::now(),
                name: name.to_string(),
            }
        }

        /// Get elapsed time in seconds
        pub fn elapsed(&self) -> f32 {
            self.start.elapsed().as_secs_f32()
        }
    }

    impl Drop for Timer {
        fn drop(&mut self) {
            log::debug!("{}: {:.3}s", self.name, self.elapsed());
        }
    }
}
