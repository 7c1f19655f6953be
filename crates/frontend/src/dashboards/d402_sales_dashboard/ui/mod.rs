pub mod chart_data;
pub mod dashboard;

pub use dashboard::SalesDashboard;
