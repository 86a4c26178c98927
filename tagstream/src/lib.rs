mod config;
mod pipeline;
pub use config::*;
pub use pipeline::*;
pub mod check;
