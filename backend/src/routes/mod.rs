//! Route-level data types for the dashboard API.
//!
//! Each submodule owns the serializable result of one endpoint together with
//! its route path constants. The computations that fill these types live in
//! [`crate::services`].

pub mod dashboard;
pub mod pie;
pub mod scatter;
