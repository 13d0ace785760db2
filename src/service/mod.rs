//! Business logic shared by the pipeline stages.
//!
//! - `image` - image downloads and the storage seam they are written through
//! - `relation` - permission, category, tag and screenshot sync for one app
//! - `sync` - client for the downstream sync API

pub mod image;
pub mod relation;
pub mod sync;
