/// Data layer: core types, mzML loading, and selection lookups.
///
/// Architecture:
/// ```text
///      .mzML
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file, keep MS1 scans → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<Spectrum> + parallel TIC series
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  select   │  nearest retention time, top-peak ranking
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod select;
