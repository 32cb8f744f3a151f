//! Reusable buffers for resampling operations
//!
//! A bootstrap task draws thousands of index sets of the same length. The
//! workspace keeps one index buffer and one value buffer alive across those
//! draws so each iteration only overwrites memory it already owns.

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// Index and value buffers owned by a single resampling task
#[derive(Debug, Default, Clone)]
pub struct ResampleWorkspace {
    indices: Vec<usize>,
    values: Vec<f64>,
}

impl ResampleWorkspace {
    /// Create a workspace sized for samples of length `n`
    pub fn with_capacity(n: usize) -> Self {
        Self {
            indices: Vec::with_capacity(n),
            values: Vec::with_capacity(n),
        }
    }

    /// Fill the index buffer with `n_samples` draws from `[0, n_samples)` with replacement
    pub fn generate_indices<R: Rng + ?Sized>(&mut self, rng: &mut R, n_samples: usize) -> &[usize] {
        self.indices.clear();
        if n_samples == 0 {
            return &self.indices;
        }
        let dist = Uniform::new(0, n_samples);
        self.indices
            .extend((0..n_samples).map(|_| dist.sample(&mut *rng)));
        &self.indices
    }

    /// Copy `source[indices[i]]` into the value buffer, using the last generated indices
    pub fn resample(&mut self, source: &[f64]) -> &mut [f64] {
        self.values.clear();
        self.values.extend(self.indices.iter().map(|&idx| {
            debug_assert!(idx < source.len(), "Index {idx} out of bounds");
            source[idx]
        }));
        &mut self.values
    }

    /// Draw a fresh bootstrap resample of `source` into the value buffer
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R, source: &[f64]) -> &mut [f64] {
        self.generate_indices(rng, source.len());
        self.resample(source)
    }

    /// Copy `source` without the element at `skip` into the value buffer
    pub fn leave_one_out(&mut self, source: &[f64], skip: usize) -> &mut [f64] {
        self.values.clear();
        self.values.extend_from_slice(&source[..skip]);
        self.values.extend_from_slice(&source[skip + 1..]);
        &mut self.values
    }

    /// Copy `source` unchanged into the value buffer
    pub fn copy_from(&mut self, source: &[f64]) -> &mut [f64] {
        self.values.clear();
        self.values.extend_from_slice(source);
        &mut self.values
    }

    /// Indices from the last call to [`generate_indices`](Self::generate_indices)
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }
}
