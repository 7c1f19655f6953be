//! Charts drawn with plotters into an SVG string and injected into the view

pub mod bar_chart;
pub mod geo_scatter;
pub mod line_chart;
pub mod svg;

pub use bar_chart::{Bar, BarChart};
pub use geo_scatter::{GeoPoint, GeoScatter};
pub use line_chart::{LineChart, LineData};
