use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, QueryOrder, Set, TransactionTrait,
};

use crate::{entities::genre, error::AppResult, models::NameFields};

#[derive(Clone)]
pub struct GenreRepository {
    db: DatabaseConnection,
}

impl GenreRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> AppResult<Vec<genre::Model>> {
        Ok(genre::Entity::find().order_by_asc(genre::Column::Id).all(&self.db).await?)
    }

    pub async fn get(&self, id: i32) -> AppResult<Option<genre::Model>> {
        Ok(genre::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn create(&self, fields: NameFields) -> AppResult<genre::Model> {
        let model = genre::ActiveModel { id: NotSet, name: Set(fields.name) };
        Ok(model.insert(&self.db).await?)
    }

    pub async fn update(&self, id: i32, fields: NameFields) -> AppResult<Option<genre::Model>> {
        let txn = self.db.begin().await?;

        let Some(existing) = genre::Entity::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut model: genre::ActiveModel = existing.into();
        model.name = Set(fields.name);

        let updated = model.update(&txn).await?;
        txn.commit().await?;

        Ok(Some(updated))
    }

    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = genre::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
