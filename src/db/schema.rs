use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, Schema};
use tracing::debug;

use crate::db::entities::prelude::{Album, Media, Tag};

/// Creates the `albums`, `media` and `tags` tables when they are missing.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let statements = [
        schema.create_table_from_entity(Album),
        schema.create_table_from_entity(Media),
        schema.create_table_from_entity(Tag),
    ];

    for mut statement in statements {
        statement.if_not_exists();
        db.execute(backend.build(&statement)).await?;
    }

    debug!("Gallery collections are in place.");
    Ok(())
}
