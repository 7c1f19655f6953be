pub mod d402_sales_dashboard;

pub use d402_sales_dashboard::ui::SalesDashboard;
