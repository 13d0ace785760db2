use dioxus_logger::tracing;
use sea_orm::ConnectionTrait;

use crate::{
    data::{
        app::AppRepository, category::CategoryRepository, permission::PermissionRepository,
        screenshot::ScreenshotRepository, tag::TagRepository,
    },
    error::Error,
    model::item::AppDetailItem,
};

pub struct AppRelationService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AppRelationService<'a, C> {
    /// Creates a new instance of [`AppRelationService`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Syncs permissions, category, tags and screenshots of an app with a crawled detail item
    ///
    /// Pass a transaction shared with the app record write so a failure here leaves no
    /// half-stored crawl behind. Links are only ever added, so repeating the call with
    /// the same item leaves the database unchanged apart from timestamps. A screenshot whose
    /// download failed keeps any previously stored image path.
    ///
    /// # Arguments
    /// - `identification`: Identification the app belongs to, its `top_type` scopes the category
    /// - `app`: App record the detail fields were already written to
    /// - `detail`: Crawled detail item with fetched image paths applied
    ///
    /// # Returns
    /// The app record with its permission summary and category set
    pub async fn update_app_related(
        &self,
        identification: &entity::app_identification::Model,
        app: entity::app::Model,
        detail: &AppDetailItem,
    ) -> Result<entity::app::Model, Error> {
        let permission_repo = PermissionRepository::new(self.db);
        for (name, description) in &detail.permissions {
            let permission = permission_repo.upsert(name, description).await?;
            permission_repo.link_app(app.id, permission.id).await?;
        }

        let top_type = identification.top_type.as_deref().unwrap_or_default();
        let category_repo = CategoryRepository::new(self.db);
        let category = category_repo.get_or_create(&detail.category, top_type).await?;

        let tag_repo = TagRepository::new(self.db);
        for name in &detail.tags {
            let tag = tag_repo.get_or_create(name).await?;
            category_repo.link_tag(category.id, tag.id).await?;
            tag_repo.link_app(app.id, tag.id).await?;
        }

        let screenshot_repo = ScreenshotRepository::new(self.db);
        for screenshot in &detail.screenshots {
            screenshot_repo
                .upsert(app.id, &screenshot.url, screenshot.path.clone())
                .await?;
        }

        let app = AppRepository::new(self.db)
            .update_relations(app, detail.permissions_str.clone(), category.id)
            .await?;

        tracing::debug!(
            "Synced {} permissions, {} tags and {} screenshots for {}",
            detail.permissions.len(),
            detail.tags.len(),
            detail.screenshots.len(),
            detail.apk_name
        );

        Ok(app)
    }
}
