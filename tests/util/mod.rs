pub mod factory;
pub mod test_utils;
