//! gtv_rs
//!
//! A lightweight Rust library for rendering monthly global temperature variance as a
//! calendar heat map. Pairs with the `gtv` CLI and the `gtv-gui` desktop viewer.
//!
//! ### Features
//! - Fetch the dataset once (or load it from a local JSON file) and validate every record
//! - Derive year/month/temperature scales and equal-width color buckets
//! - Compute cell geometry, axis ticks, legend tiling and the description line
//! - Hover tooltips as an explicit `on_hover` / `on_unhover` state machine
//! - Write SVG/PNG via plotters or a self-contained interactive HTML page
//!
//! ### Example
//! ```no_run
//! use gtv_rs::{Client, HeatMapConfig, HeatMapRenderer};
//!
//! let dataset = Client::default().fetch_dataset()?;
//! let config = HeatMapConfig::default();
//! let layout = HeatMapRenderer::new(&config).render(&dataset)?;
//! println!("{}", layout.description);
//! gtv_rs::viz::render_to_file(&layout, "heat-map.svg")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod format;
pub mod html;
pub mod layout;
pub mod models;
pub mod palette;
pub mod scale;
pub mod stats;
pub mod storage;
pub mod tooltip;
pub mod viz;

pub use api::Client;
pub use config::HeatMapConfig;
pub use error::HeatMapError;
pub use layout::{HeatMapLayout, HeatMapRenderer};
pub use models::{Dataset, MonthlyRecord};
pub use scale::{ScaleBuilder, Scales};
pub use tooltip::{TooltipController, TooltipState};
