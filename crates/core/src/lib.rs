//! modelfetch_core - Core library for picking and fetching model files
//!
//! This crate provides:
//! - The built-in model catalog and its importance tiers
//! - Checklist selection state for an interactive session
//! - HuggingFace location parsing and file downloads

pub mod catalog;
pub mod config;
pub mod downloaders;
pub mod error;
pub mod fetch;
pub mod location;
pub mod selection;

pub use catalog::{Descriptor, Tier, CATALOG};
pub use config::Config;
pub use fetch::fetch_all;
pub use location::RemoteFile;
pub use selection::{Action, Flow, Mark, Selection, Viewport};
