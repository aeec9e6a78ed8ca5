pub mod color;
pub mod config;
pub mod digest;
pub mod error;
pub mod grid;
pub mod name;
#[cfg(feature = "png")]
pub mod output;
pub mod pipeline;
pub mod raster;
pub mod render;

pub use pipeline::Identicon;
