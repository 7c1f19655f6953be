pub mod dto;
pub mod region;
pub mod top_n;

pub use dto::*;
pub use region::{Region, RegionOption};
pub use top_n::{clamp_top_n, top_sellers, SellerMeasure};

/// Number of states shown in the "top states" bar charts
pub const TOP_STATES: usize = 5;

/// Bounds and default of the "Qtde de Vendedores" input
pub const TOP_SELLERS_MIN: usize = 2;
pub const TOP_SELLERS_MAX: usize = 10;
pub const TOP_SELLERS_DEFAULT: usize = 5;

/// English month names, index 0 = January
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Years offered by the period slider
pub const YEAR_MIN: i32 = 2020;
pub const YEAR_MAX: i32 = 2023;
