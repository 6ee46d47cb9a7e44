use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, QueryOrder, Set, TransactionTrait,
};

use crate::{entities::director, error::AppResult, models::NameFields};

#[derive(Clone)]
pub struct DirectorRepository {
    db: DatabaseConnection,
}

impl DirectorRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> AppResult<Vec<director::Model>> {
        Ok(director::Entity::find().order_by_asc(director::Column::Id).all(&self.db).await?)
    }

    pub async fn get(&self, id: i32) -> AppResult<Option<director::Model>> {
        Ok(director::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn create(&self, fields: NameFields) -> AppResult<director::Model> {
        let model = director::ActiveModel { id: NotSet, name: Set(fields.name) };
        Ok(model.insert(&self.db).await?)
    }

    pub async fn update(&self, id: i32, fields: NameFields) -> AppResult<Option<director::Model>> {
        let txn = self.db.begin().await?;

        let Some(existing) = director::Entity::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut model: director::ActiveModel = existing.into();
        model.name = Set(fields.name);

        let updated = model.update(&txn).await?;
        txn.commit().await?;

        Ok(Some(updated))
    }

    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = director::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
