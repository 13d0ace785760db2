//! Database model type aliases for test utilities.

pub type AppIdentificationModel = entity::app_identification::Model;

pub type AppModel = entity::app::Model;
