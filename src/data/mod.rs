/// Data layer: core types, generation, rendering and loading.
///
/// Architecture:
/// ```text
///   GeneratorConfig ──┐
///                     ▼
///   ┌────────────┐
///   │ generator  │  sample NUM_VECS × DIM scalars in [0, MAX)
///   └────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset  │  Vec<Vector>, rectangular, immutable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  render  │  pretty JSON → any io::Write (stdout by default)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  JSON text → Dataset
///   └──────────┘
/// ```

pub mod error;
pub mod generator;
pub mod loader;
pub mod model;
pub mod render;
