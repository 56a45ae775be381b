use std::{
    fs::OpenOptions,
    io::{self, BufWriter, Write},
    path::Path,
};

use log::{info, warn};

/// Number of leading samples discarded as startup noise.
pub const WARMUP_FRAMES: usize = 100;

const CSV_HEADER: &str = "Implementation,NumBodies,AverageFPS";

/// Accumulates a steady-state average of an externally measured frame rate.
///
/// The first [`WARMUP_FRAMES`] samples are dropped so initialization
/// overhead does not skew the result. The summary is appended to a CSV log,
/// one record per [`save`](Benchmark::save) call; existing records are never
/// rewritten.
#[derive(Clone, Debug)]
pub struct Benchmark {
    implementation: String,
    num_bodies: usize,
    total_fps: f64,
    frame_count: usize,
}

impl Benchmark {
    #[must_use]
    pub fn new(implementation: impl Into<String>, num_bodies: usize) -> Self {
        Self {
            implementation: implementation.into(),
            num_bodies,
            total_fps: 0.,
            frame_count: 0,
        }
    }

    /// Record one frame-rate sample.
    pub fn add_frame(&mut self, fps: f64) {
        if self.frame_count >= WARMUP_FRAMES {
            self.total_fps += fps;
        }
        self.frame_count += 1;
    }

    /// The average over all samples past the warm-up window, or 0 if no
    /// such sample has been seen yet.
    #[must_use]
    pub fn average_fps(&self) -> f64 {
        if self.frame_count <= WARMUP_FRAMES {
            return 0.;
        }
        self.total_fps / (self.frame_count - WARMUP_FRAMES) as f64
    }

    /// Append the current average as one CSV record, creating the file with
    /// a header line if it does not exist yet.
    ///
    /// With no samples past the warm-up window this is a no-op. An I/O
    /// failure leaves the in-memory state untouched, so a retry may succeed.
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        if self.frame_count <= WARMUP_FRAMES {
            warn!(
                "only {} frames recorded, not enough for a benchmark record",
                self.frame_count
            );
            return Ok(());
        }

        let path = path.as_ref();
        let exists = path.exists();

        let mut file = BufWriter::new(
            OpenOptions::new().append(true).create(true).open(path)?,
        );
        if !exists {
            writeln!(file, "{CSV_HEADER}")?;
        }
        writeln!(
            file,
            "{},{},{:.2}",
            self.implementation,
            self.num_bodies,
            self.average_fps()
        )?;
        file.flush()?;

        info!(
            "benchmark saved: {} with {} bodies, average FPS {:.2}",
            self.implementation,
            self.num_bodies,
            self.average_fps()
        );

        Ok(())
    }
}
