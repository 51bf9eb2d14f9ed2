use async_trait::async_trait;
use sea_orm::{
    DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set, sea_query::OnConflict,
};

use tracing::warn;

use crate::db::entities::album;
use crate::db::repository::{Repository, RepositoryError, SortOrder, new_document_id};
use crate::models::Album;

#[derive(Clone, Debug)]
pub struct AlbumRepository {
    db: DatabaseConnection,
}

impl AlbumRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<album::Model> for Album {
    fn from(model: album::Model) -> Self {
        Album {
            id: Some(model.id),
            name: model.name,
            description: model.description,
        }
    }
}

fn column(property: &str) -> Option<album::Column> {
    match property {
        "id" => Some(album::Column::Id),
        "name" => Some(album::Column::Name),
        "description" => Some(album::Column::Description),
        _ => None,
    }
}

#[async_trait]
impl Repository<Album> for AlbumRepository {
    async fn save(&self, mut document: Album) -> Result<Album, RepositoryError> {
        let id = document.id.get_or_insert_with(new_document_id).clone();
        let model = album::ActiveModel {
            id: Set(id),
            name: Set(document.name.clone()),
            description: Set(document.description.clone()),
        };

        album::Entity::insert(model)
            .on_conflict(
                OnConflict::column(album::Column::Id)
                    .update_columns([album::Column::Name, album::Column::Description])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        Ok(document)
    }

    async fn find_all(&self, sort: &[SortOrder]) -> Result<Vec<Album>, RepositoryError> {
        let mut query = album::Entity::find();
        for order in sort {
            match column(&order.property) {
                Some(column) => query = query.order_by(column, order.direction.into()),
                None => warn!(property = %order.property, "Ignoring unknown sort property."),
            }
        }
        let models = query.all(&self.db).await?;
        Ok(models.into_iter().map(Album::from).collect())
    }

    async fn find_one(&self, id: &str) -> Result<Option<Album>, RepositoryError> {
        let model = album::Entity::find_by_id(id.to_owned()).one(&self.db).await?;
        Ok(model.map(Album::from))
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        album::Entity::delete_by_id(id.to_owned()).exec(&self.db).await?;
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), RepositoryError> {
        album::Entity::delete_many().exec(&self.db).await?;
        Ok(())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(album::Entity::find().count(&self.db).await?)
    }
}
