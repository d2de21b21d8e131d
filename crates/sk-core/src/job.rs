use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

static NEXT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Identity for one generation job.
///
/// A job id names the persisted script, the render media directory and the
/// rendered video basename, so everything one request writes stays under
/// tokens only it owns. Two mints never collide within a process: the
/// sequence counter breaks ties between jobs minted in the same clock
/// millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JobId {
    millis: i64,
    seq: u64,
}

impl JobId {
    /// Mints a fresh id from the current wall-clock time and the process-wide
    /// sequence counter.
    pub fn mint() -> Self {
        Self {
            millis: Utc::now().timestamp_millis(),
            seq: NEXT_SEQ.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Builds an id from explicit parts, for tests and replay tooling.
    pub fn from_parts(millis: i64, seq: u64) -> Self {
        Self { millis, seq }
    }

    /// File name of the persisted Python script.
    pub fn script_file_name(&self) -> String {
        format!("{self}.py")
    }

    /// Stem the renderer derives its module directory from (the script file
    /// name without extension).
    pub fn script_stem(&self) -> String {
        self.to_string()
    }

    /// Basename passed to the renderer via `-o`; the engine appends `.mp4`.
    pub fn output_base(&self) -> String {
        self.to_string()
    }

    /// Directory name isolating this job's media tree from concurrent jobs.
    pub fn media_dir_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "manim_{}_{}", self.millis, self.seq)
    }
}
