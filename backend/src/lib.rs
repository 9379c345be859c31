//! # Launch Dashboard Backend
//!
//! Launch analytics over a static table of SpaceX launch records.
//!
//! The crate loads a CSV of launches once at startup, then answers two
//! questions about it: how launches from a site split between success and
//! failure, and how outcome relates to payload mass within a payload range.
//! The answers are exposed as plain functions and, with the `http-server`
//! feature, as a REST API plus an interactive page that charts them.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Launch record domain types
//! - [`dataset`]: CSV loading and the immutable launch table
//! - [`services`]: Filter/aggregate functions behind each chart
//! - [`routes`]: Serializable chart results and route constants
//! - [`api`]: Public DTO surface and aggregation inputs
//! - [`config`]: TOML + environment configuration
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Example
//!
//! ```no_run
//! use launch_dash::api::{PayloadRange, SiteSelection};
//! use launch_dash::dataset::Dataset;
//! use launch_dash::services::{pie_for, scatter_for, PieOptions};
//!
//! let dataset = Dataset::load("data/spacex_launch_dash.csv")?;
//! let pie = pie_for(&dataset, &SiteSelection::All, PieOptions::default());
//! let scatter = scatter_for(&dataset, &SiteSelection::site("KSC LC-39A"), PayloadRange::new(0.0, 5000.0));
//! println!("{}: {} launches, {} points", pie.title, pie.total, scatter.points.len());
//! # Ok::<(), launch_dash::dataset::LoadError>(())
//! ```

pub mod api;
pub mod config;
pub mod dataset;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
