//! Item pipelines for crawled app store metadata.
//!
//! Crawled items pass through an ordered chain of stages that deduplicate them, download
//! their images, persist them with their relations and notify a downstream sync API. See
//! [`pipeline`] for the stage order and [`startup`] for wiring everything together.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod service;
pub mod startup;
pub mod util;
