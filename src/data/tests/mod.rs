use apphub_test_utils::prelude::*;

use crate::data::{
    app::AppRepository, app_identification::AppIdentificationRepository,
    category::CategoryRepository, permission::PermissionRepository,
    screenshot::ScreenshotRepository, tag::TagRepository,
};

mod app_identification;
mod category;
mod permission;
mod screenshot;
