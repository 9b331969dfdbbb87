mod color;
pub use color::ColorGenerator;

mod series;
pub use series::{build_series, ChartSeries, SeriesDataset};

mod config;
pub use config::{ChartConfig, ChartKind, DatasetSpec};

#[cfg(target_arch = "wasm32")]
mod render;
#[cfg(target_arch = "wasm32")]
pub use render::ChartRenderer;
