use async_trait::async_trait;
use sea_orm::{
    DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set, sea_query::OnConflict,
};

use tracing::warn;

use crate::db::entities::media;
use crate::db::repository::{Repository, RepositoryError, SortOrder, new_document_id};
use crate::models::Media;

#[derive(Clone, Debug)]
pub struct MediaRepository {
    db: DatabaseConnection,
}

impl MediaRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<media::Model> for Media {
    fn from(model: media::Model) -> Self {
        Media {
            id: Some(model.id),
            caption: model.caption,
            description: model.description,
            location: model.location,
        }
    }
}

fn column(property: &str) -> Option<media::Column> {
    match property {
        "id" => Some(media::Column::Id),
        "caption" => Some(media::Column::Caption),
        "description" => Some(media::Column::Description),
        "location" => Some(media::Column::Location),
        _ => None,
    }
}

#[async_trait]
impl Repository<Media> for MediaRepository {
    async fn save(&self, mut document: Media) -> Result<Media, RepositoryError> {
        let id = document.id.get_or_insert_with(new_document_id).clone();
        let model = media::ActiveModel {
            id: Set(id),
            caption: Set(document.caption.clone()),
            description: Set(document.description.clone()),
            location: Set(document.location.clone()),
        };

        media::Entity::insert(model)
            .on_conflict(
                OnConflict::column(media::Column::Id)
                    .update_columns([
                        media::Column::Caption,
                        media::Column::Description,
                        media::Column::Location,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        Ok(document)
    }

    async fn find_all(&self, sort: &[SortOrder]) -> Result<Vec<Media>, RepositoryError> {
        let mut query = media::Entity::find();
        for order in sort {
            match column(&order.property) {
                Some(column) => query = query.order_by(column, order.direction.into()),
                None => warn!(property = %order.property, "Ignoring unknown sort property."),
            }
        }
        let models = query.all(&self.db).await?;
        Ok(models.into_iter().map(Media::from).collect())
    }

    async fn find_one(&self, id: &str) -> Result<Option<Media>, RepositoryError> {
        let model = media::Entity::find_by_id(id.to_owned()).one(&self.db).await?;
        Ok(model.map(Media::from))
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        media::Entity::delete_by_id(id.to_owned()).exec(&self.db).await?;
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), RepositoryError> {
        media::Entity::delete_many().exec(&self.db).await?;
        Ok(())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(media::Entity::find().count(&self.db).await?)
    }
}
