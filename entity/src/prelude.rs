pub use super::app::Entity as App;
pub use super::app_identification::Entity as AppIdentification;
pub use super::app_permission::Entity as AppPermission;
pub use super::app_tag::Entity as AppTag;
pub use super::category::Entity as Category;
pub use super::category_tag::Entity as CategoryTag;
pub use super::permission::Entity as Permission;
pub use super::screenshot::Entity as Screenshot;
pub use super::tag::Entity as Tag;
