//! Data types that flow between pipeline stages.
//!
//! - `item` - crawled items handed over by the host crawler
//! - `outcome` - what a stage decided to do with an item
//! - `image` - correlated image fetch requests and results

pub mod image;
pub mod item;
pub mod outcome;
