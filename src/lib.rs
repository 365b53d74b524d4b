// Library exports for the binary and tests
pub mod batch;
pub mod canvas;
pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod render;
pub mod stroke;
pub mod targets;

pub use batch::{render_batch, BatchSummary};
pub use error::{IconError, RenderError};
pub use render::{render, render_icon, RenderOptions};
pub use targets::{IconTarget, Platform, TARGETS};
