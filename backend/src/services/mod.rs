//! Service layer: the filter/aggregate engine behind the charts.
//!
//! Every function here is pure over an explicitly borrowed
//! [`Dataset`](crate::dataset::Dataset). Nothing is cached or shared, so the functions
//! are safe to call from concurrent request handlers, tests or batch scripts
//! alike.

pub mod dashboard;
pub mod pie;
pub mod scatter;

pub use dashboard::dashboard_info;
pub use pie::{pie_for, PieOptions};
pub use scatter::scatter_for;
