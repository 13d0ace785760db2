//! Full app detail record, backed by exactly one [`super::app_identification`] row.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "app")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub app_identification_id: i32,
    pub name: String,
    pub apk_name: String,
    pub last_version: String,
    pub rom: String,
    pub language: String,
    pub size: String,
    pub developer: String,
    #[sea_orm(column_type = "Text")]
    pub intro: String,
    pub download_url: String,
    pub score: String,
    pub update_date: String,
    #[sea_orm(column_type = "Text")]
    pub update_log: String,
    pub logo: Option<String>,
    pub logo_origin_url: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub permissions_str: String,
    pub category_id: Option<i32>,
    pub is_crawled: bool,
    pub last_crawl_time: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::app_identification::Entity",
        from = "Column::AppIdentificationId",
        to = "super::app_identification::Column::Id"
    )]
    AppIdentification,
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
    #[sea_orm(has_many = "super::screenshot::Entity")]
    Screenshot,
    #[sea_orm(has_many = "super::app_permission::Entity")]
    AppPermission,
    #[sea_orm(has_many = "super::app_tag::Entity")]
    AppTag,
}

impl Related<super::app_identification::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AppIdentification.def()
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::screenshot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Screenshot.def()
    }
}

impl Related<super::permission::Entity> for Entity {
    fn to() -> RelationDef {
        super::app_permission::Relation::Permission.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::app_permission::Relation::App.def().rev())
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        super::app_tag::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::app_tag::Relation::App.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
