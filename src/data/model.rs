use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DatasetError;

/// Number of vectors produced by the default configuration.
pub const NUM_VECS: usize = 50;
/// Components per vector in the default configuration.
pub const DIM: usize = 12;
/// Exclusive upper bound of every sampled scalar in the default configuration.
pub const MAX: f64 = 20.0;

// ---------------------------------------------------------------------------
// GeneratorConfig – the shape and range of a dataset
// ---------------------------------------------------------------------------

/// Parameters for [`generate`](super::generator::generate).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    /// How many vectors to produce.
    pub num_vecs: usize,
    /// Components per vector.
    pub dim: usize,
    /// Exclusive upper bound; scalars are drawn from `[0, max)`.
    pub max: f64,
    /// Seed for a reproducible run. `None` draws from the thread-local source.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_vecs: NUM_VECS,
            dim: DIM,
            max: MAX,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn new(num_vecs: usize, dim: usize, max: f64) -> Self {
        Self {
            num_vecs,
            dim,
            max,
            seed: None,
        }
    }

    /// Same shape, fixed seed.
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }
}

// ---------------------------------------------------------------------------
// Vector – one row of the dataset
// ---------------------------------------------------------------------------

/// An ordered run of scalars. Serializes as a bare JSON array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector {
    values: Vec<f64>,
}

impl Vector {
    pub fn new(values: Vec<f64>) -> Self {
        Vector { values }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.values.iter()
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<f64>> for Vector {
    fn from(values: Vec<f64>) -> Self {
        Vector::new(values)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v:.4}")?;
        }
        write!(f, "]")
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete generated collection
// ---------------------------------------------------------------------------

/// Vectors in generation order, all of the same length.
///
/// Built once and never mutated; the fields are private so the rectangular
/// shape checked in [`Dataset::from_vectors`] always holds.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Dataset {
    vectors: Vec<Vector>,
}

impl Dataset {
    /// Wrap `vectors`, rejecting rows whose length differs from the first.
    pub fn from_vectors(vectors: Vec<Vector>) -> Result<Self, DatasetError> {
        if let Some(first) = vectors.first() {
            let expected = first.len();
            if let Some((index, v)) = vectors
                .iter()
                .enumerate()
                .find(|(_, v)| v.len() != expected)
            {
                return Err(DatasetError::DimensionMismatch {
                    index,
                    expected,
                    found: v.len(),
                });
            }
        }
        Ok(Dataset { vectors })
    }

    /// Number of vectors.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Whether the dataset holds no vectors.
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Shared dimensionality, or `None` for an empty dataset.
    pub fn dim(&self) -> Option<usize> {
        self.vectors.first().map(Vector::len)
    }

    pub fn vectors(&self) -> &[Vector] {
        &self.vectors
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vector> {
        self.vectors.iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Vector;
    type IntoIter = std::slice::Iter<'a, Vector>;

    fn into_iter(self) -> Self::IntoIter {
        self.vectors.iter()
    }
}
