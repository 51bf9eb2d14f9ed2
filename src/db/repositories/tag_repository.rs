use async_trait::async_trait;
use sea_orm::{
    DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set, sea_query::OnConflict,
};

use tracing::warn;

use crate::db::entities::tag;
use crate::db::repository::{Repository, RepositoryError, SortOrder, new_document_id};
use crate::models::Tag;

#[derive(Clone, Debug)]
pub struct TagRepository {
    db: DatabaseConnection,
}

impl TagRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<tag::Model> for Tag {
    fn from(model: tag::Model) -> Self {
        Tag { id: Some(model.id) }
    }
}

fn column(property: &str) -> Option<tag::Column> {
    match property {
        "id" => Some(tag::Column::Id),
        _ => None,
    }
}

#[async_trait]
impl Repository<Tag> for TagRepository {
    async fn save(&self, mut document: Tag) -> Result<Tag, RepositoryError> {
        let id = document.id.get_or_insert_with(new_document_id).clone();
        let model = tag::ActiveModel { id: Set(id) };

        // Nothing besides the id is stored, so replacing an existing tag is a no-op.
        tag::Entity::insert(model)
            .on_conflict(OnConflict::column(tag::Column::Id).do_nothing().to_owned())
            .exec_without_returning(&self.db)
            .await?;

        Ok(document)
    }

    async fn find_all(&self, sort: &[SortOrder]) -> Result<Vec<Tag>, RepositoryError> {
        let mut query = tag::Entity::find();
        for order in sort {
            match column(&order.property) {
                Some(column) => query = query.order_by(column, order.direction.into()),
                None => warn!(property = %order.property, "Ignoring unknown sort property."),
            }
        }
        let models = query.all(&self.db).await?;
        Ok(models.into_iter().map(Tag::from).collect())
    }

    async fn find_one(&self, id: &str) -> Result<Option<Tag>, RepositoryError> {
        let model = tag::Entity::find_by_id(id.to_owned()).one(&self.db).await?;
        Ok(model.map(Tag::from))
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        tag::Entity::delete_by_id(id.to_owned()).exec(&self.db).await?;
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), RepositoryError> {
        tag::Entity::delete_many().exec(&self.db).await?;
        Ok(())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(tag::Entity::find().count(&self.db).await?)
    }
}
