use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use crate::{
    entities::movie,
    error::AppResult,
    models::{MovieFields, MovieFilter},
};

#[derive(Clone)]
pub struct MovieRepository {
    db: DatabaseConnection,
}

impl MovieRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Movies matching every filter that is present, by ascending id.
    pub async fn list(&self, filter: MovieFilter) -> AppResult<Vec<movie::Model>> {
        let mut query = movie::Entity::find();
        if let Some(director_id) = filter.director_id {
            query = query.filter(movie::Column::DirectorId.eq(director_id));
        }
        if let Some(genre_id) = filter.genre_id {
            query = query.filter(movie::Column::GenreId.eq(genre_id));
        }

        Ok(query.order_by_asc(movie::Column::Id).all(&self.db).await?)
    }

    pub async fn get(&self, id: i32) -> AppResult<Option<movie::Model>> {
        Ok(movie::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn create(&self, fields: MovieFields) -> AppResult<movie::Model> {
        let model = movie::ActiveModel {
            id: NotSet,
            title: Set(fields.title),
            description: Set(fields.description),
            trailer: Set(fields.trailer),
            year: Set(fields.year),
            rating: Set(fields.rating),
            genre_id: Set(fields.genre_id),
            director_id: Set(fields.director_id),
        };

        Ok(model.insert(&self.db).await?)
    }

    /// Overwrites all mutable columns. `None` when the row does not exist,
    /// in which case nothing is written.
    pub async fn update(&self, id: i32, fields: MovieFields) -> AppResult<Option<movie::Model>> {
        let txn = self.db.begin().await?;

        let Some(existing) = movie::Entity::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut model: movie::ActiveModel = existing.into();
        model.title = Set(fields.title);
        model.description = Set(fields.description);
        model.trailer = Set(fields.trailer);
        model.year = Set(fields.year);
        model.rating = Set(fields.rating);
        model.genre_id = Set(fields.genre_id);
        model.director_id = Set(fields.director_id);

        let updated = model.update(&txn).await?;
        txn.commit().await?;

        Ok(Some(updated))
    }

    /// Returns whether a row was removed.
    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
