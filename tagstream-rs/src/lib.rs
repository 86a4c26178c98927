//! # tagstream-rs
//! A library for cleaning and tagging IPTV m3u playlists
//!
//! Every entry of the rewritten playlist carries standardized `#EXTINF`
//! metadata (tvg-id, tvg-name, tvg-logo, group-title). Section headers found
//! in the playlist are used to infer group-title, and missing logos are
//! filled from per-group defaults.
//!
//! # Example
//! ```rust
//! use tagstream_rs::Normalizer;
//! use std::io::Cursor;
//!
//! let mut normalizer = Normalizer::new(Cursor::new(r#"#EXTM3U
//! #EXTINF:-1,Kanal 1
//! http://example.com/1.m3u8"#));
//! normalizer.normalize().unwrap();
//! let result = normalizer.get_result();
//! assert_eq!(result.len(), 3);
//! assert!(result[1].contains("tvg-id=\"Kanal.1\""));
//! ```

mod builder;
mod classifier;
pub mod format;
mod normalizer;
mod parser;
pub use classifier::*;
pub use normalizer::*;
pub use parser::*;
