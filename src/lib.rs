//! Synthetic vector dataset generation.
//!
//! Produces `num_vecs` vectors of `dim` scalars drawn uniformly from
//! `[0, max)` and renders them as pretty-printed JSON.

pub mod data;

pub use data::error::DatasetError;
pub use data::generator::{generate, generate_with_rng};
pub use data::loader::{load_file, load_json};
pub use data::model::{DIM, Dataset, GeneratorConfig, MAX, NUM_VECS, Vector};
pub use data::render::{render, render_to_string};
