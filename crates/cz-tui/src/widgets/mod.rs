//! Chart and status widgets

mod histogram;
mod orbits;
mod status;

pub use histogram::HistogramWidget;
pub use orbits::OrbitChartWidget;
pub use status::StatusWidget;
