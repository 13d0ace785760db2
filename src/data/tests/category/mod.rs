use super::*;

mod get_or_create;
mod link_tag;
