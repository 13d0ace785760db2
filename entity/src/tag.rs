use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tag")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::app_tag::Entity")]
    AppTag,
    #[sea_orm(has_many = "super::category_tag::Entity")]
    CategoryTag,
}

impl Related<super::app::Entity> for Entity {
    fn to() -> RelationDef {
        super::app_tag::Relation::App.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::app_tag::Relation::Tag.def().rev())
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        super::category_tag::Relation::Category.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::category_tag::Relation::Tag.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
