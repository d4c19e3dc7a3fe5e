//! Recorded motion data and curve-comparison metrics.
//!
//! A [`Recording`] is an ordered sequence of `(time, value)` samples, either
//! captured from a real animation or synthesized from a curve. Metrics pair
//! two sequences positionally, never by timestamp: callers are responsible
//! for sampling both curves on the same grid.

use ndarray::Array1;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single recorded sample of an animated value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub t: f64,
    pub y: f64,
}

/// Errors that can occur when comparing recordings.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// Comparing against an empty recording would average over zero samples.
    #[error("cannot average errors over an empty recording")]
    EmptyRecording,
}

/// An ordered series of recorded samples.
///
/// No uniform spacing or sort order is enforced; samples are kept exactly as
/// supplied, and every operation that pairs two recordings does so by
/// position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recording {
    samples: Vec<Sample>,
}

impl Recording {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, t: f64, y: f64) {
        self.samples.push(Sample { t, y });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// The sample times as an array.
    #[must_use]
    pub fn times(&self) -> Array1<f64> {
        self.samples.iter().map(|s| s.t).collect()
    }

    /// The sample values as an array.
    #[must_use]
    pub fn values(&self) -> Array1<f64> {
        self.samples.iter().map(|s| s.y).collect()
    }

    /// The samples as `[t, y]` pairs, ready for plotting.
    #[must_use]
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.samples.iter().map(|s| [s.t, s.y]).collect()
    }

    /// Splits the recording into a time array and a value array rescaled by
    /// `(y - start_value) / (end_value - start_value)`.
    ///
    /// Equal start and end values divide by zero; the resulting non-finite
    /// values propagate to the caller unguarded.
    #[must_use]
    pub fn normalized(&self, start_value: f64, end_value: f64) -> (Array1<f64>, Array1<f64>) {
        let span = end_value - start_value;
        let ys = self.values().mapv(|y| (y - start_value) / span);
        (self.times(), ys)
    }

    /// Returns this recording's samples followed by `other`'s samples with
    /// every time shifted by `+offset`.
    ///
    /// No resorting happens: the result is strictly self-then-shifted-other
    /// regardless of the actual time values. Callers needing monotonic time
    /// must pick an `offset` that places `other` entirely after `self`.
    #[must_use]
    pub fn concat(&self, other: &Recording, offset: f64) -> Recording {
        let samples = self
            .samples
            .iter()
            .copied()
            .chain(other.samples.iter().map(|s| Sample {
                t: s.t + offset,
                y: s.y,
            }))
            .collect();
        Recording { samples }
    }

    /// Mean absolute difference between paired sample values.
    ///
    /// Samples are paired positionally up to the shorter length; times are
    /// ignored entirely.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::EmptyRecording`] if either recording is
    /// empty, since the mean would divide by zero.
    pub fn mean_abs_error(&self, other: &Recording) -> Result<f64, MetricsError> {
        let count = self.len().min(other.len());
        if count == 0 {
            return Err(MetricsError::EmptyRecording);
        }

        let sum: f64 = self
            .samples
            .iter()
            .zip(&other.samples)
            .map(|(a, b)| (a.y - b.y).abs())
            .sum();

        Ok(sum / count as f64)
    }
}

impl From<Vec<[f64; 2]>> for Recording {
    fn from(pairs: Vec<[f64; 2]>) -> Self {
        pairs.into_iter().map(|[t, y]| (t, y)).collect()
    }
}

impl FromIterator<(f64, f64)> for Recording {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        Recording {
            samples: iter.into_iter().map(|(t, y)| Sample { t, y }).collect(),
        }
    }
}

/// Root of the mean squared difference between paired values.
///
/// Values are paired positionally up to the shorter length. Returns exactly
/// `0.0` when no pairs exist.
#[must_use]
pub fn rmse(y1: &Array1<f64>, y2: &Array1<f64>) -> f64 {
    let count = y1.len().min(y2.len());
    if count == 0 {
        return 0.0;
    }

    let sum: f64 = y1
        .iter()
        .zip(y2.iter())
        .map(|(a, b)| (a - b) * (a - b))
        .sum();

    (sum / count as f64).sqrt()
}
