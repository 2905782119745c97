pub mod dto;

pub use dto::{DashboardMetrics, TopProduct, TopSeller};
