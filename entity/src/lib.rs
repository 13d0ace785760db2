//! SeaORM entities for crawled app store metadata.

pub mod prelude;

pub mod app;
pub mod app_identification;
pub mod app_permission;
pub mod app_tag;
pub mod category;
pub mod category_tag;
pub mod permission;
pub mod screenshot;
pub mod tag;
