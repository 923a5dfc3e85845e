/// Data layer: core types, loading, and chart transforms.
///
/// Architecture:
/// ```text
///  launch CSV (path or URL)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + validate rows → LaunchDataset (once, at startup)
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ LaunchDataset  │  Vec<LaunchRecord>, site / booster indices
///   └───────────────┘
///        │   + SiteSelection, PayloadRange
///        ▼
///   ┌───────────┐
///   │ transform  │  pie slices + scatter points → ChartData
///   └───────────┘
/// ```

pub mod loader;
pub mod model;
pub mod transform;
