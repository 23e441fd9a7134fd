/// Data layer: table type, loading, and comparison.
///
/// Architecture:
/// ```text
///  candidate.dat   reference.dat
///        │               │
///        ▼               ▼
///   ┌───────────────────────┐
///   │        loader         │  existence check, parse → Table, shape check
///   └───────────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  compare  │  overall + per-channel MSE → Comparison
///   └──────────┘
/// ```

pub mod compare;
pub mod error;
pub mod loader;
pub mod model;
