// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Landmark stream sources.
//!
//! This module provides abstractions for where per-frame landmark data
//! comes from. The pose model itself is an external collaborator; what
//! reaches the engine is a stream of [`FrameSample`]s — one JSON object
//! per line, either replayed from a file or piped in on stdin from a
//! live pose-model bridge.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ControlError, Result};
use crate::landmarks::NormalizedLandmarks;

/// One frame's worth of pose-model output.
///
/// `landmarks` is `None` when the model reported no detection for the
/// frame; such frames are no-ops for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameSample {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Detected landmarks, normalized to `[0, 1]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landmarks: Option<NormalizedLandmarks>,
}

/// Represents different landmark stream sources.
#[derive(Debug, Clone)]
pub enum Source {
    /// JSON Lines replay file, one [`FrameSample`] per line.
    Replay(PathBuf),
    /// JSON Lines streamed on standard input.
    Stdin,
}

/// Convert from a string path to Source. `"-"` selects stdin.
impl From<&str> for Source {
    fn from(s: &str) -> Self {
        if s == "-" {
            Self::Stdin
        } else {
            Self::Replay(PathBuf::from(s))
        }
    }
}

/// Iterator over the frames of a [`Source`].
///
/// Yields one `Result<FrameSample>` per non-empty line. The underlying
/// reader is released when the iterator is dropped.
pub struct SourceIterator {
    reader: Box<dyn BufRead>,
    line_no: u64,
}

impl SourceIterator {
    /// Open a source for iteration.
    ///
    /// # Errors
    ///
    /// Returns an error if a replay file cannot be opened.
    pub fn new(source: &Source) -> Result<Self> {
        let reader: Box<dyn BufRead> = match source {
            Source::Replay(path) => {
                let file = File::open(path).map_err(|e| {
                    ControlError::SourceError(format!("cannot open {}: {e}", path.display()))
                })?;
                Box::new(BufReader::new(file))
            }
            Source::Stdin => Box::new(BufReader::new(io::stdin())),
        };
        Ok(Self::from_reader(reader))
    }

    /// Iterate frames from an arbitrary reader (e.g. an in-memory
    /// buffer).
    #[must_use]
    pub fn from_reader(reader: Box<dyn BufRead>) -> Self {
        Self { reader, line_no: 0 }
    }
}

impl Iterator for SourceIterator {
    type Item = Result<FrameSample>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None, // stream end
                Ok(_) => {
                    self.line_no += 1;
                    if line.trim().is_empty() {
                        continue;
                    }
                    return Some(serde_json::from_str(&line).map_err(|e| {
                        ControlError::ParseError(format!("line {}: {e}", self.line_no))
                    }));
                }
                Err(e) => {
                    return Some(Err(ControlError::SourceError(format!(
                        "read failed at line {}: {e}",
                        self.line_no + 1
                    ))));
                }
            }
        }
    }
}
