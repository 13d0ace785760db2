use super::*;

mod get_or_create;
mod get_with_app;
mod mark_crawled;
