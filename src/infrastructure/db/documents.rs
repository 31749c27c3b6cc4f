use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use sqlx::{types::Json, PgPool};
use uuid::Uuid;

use crate::{entities::record::Record, errors::AppError};

/// The document collections known to the store. Table names never come from
/// request input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Contacts,
    Projects,
    Skills,
}

impl Collection {
    pub fn table(self) -> &'static str {
        match self {
            Collection::Contacts => "contacts",
            Collection::Projects => "projects",
            Collection::Skills => "skills",
        }
    }
}

/// JSONB-backed document store: one table per collection, each row holding a
/// store-assigned id and the document body.
#[derive(Clone)]
pub struct DocumentStore {
    pool: PgPool,
}

impl DocumentStore {
    pub fn new(pool: PgPool) -> Self {
        DocumentStore { pool }
    }

    pub async fn insert<T>(&self, collection: Collection, doc: &T) -> Result<Uuid, AppError>
    where
        T: Serialize + Sync,
    {
        let body = serde_json::to_value(doc)?;
        let sql = format!("INSERT INTO {} (doc) VALUES ($1) RETURNING id", collection.table());

        let id = sqlx::query_scalar::<_, Uuid>(&sql)
            .bind(Json(body))
            .fetch_one(&self.pool)
            .await?;

        Ok(id)
    }

    /// Every document of the collection, oldest first.
    pub async fn find_all<T>(&self, collection: Collection) -> Result<Vec<Record<T>>, AppError>
    where
        T: DeserializeOwned,
    {
        let sql = format!("SELECT id, doc FROM {} ORDER BY seq", collection.table());

        let rows = sqlx::query_as::<_, (Uuid, Json<Value>)>(&sql)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(|(id, Json(doc))| Ok(Record::new(id, serde_json::from_value(doc)?)))
            .collect()
    }

    /// Returns whether a document was removed.
    pub async fn delete(&self, collection: Collection, id: &Uuid) -> Result<bool, AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", collection.table());

        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Shallow-merges `patch` into the stored document.
    pub async fn merge(&self, collection: Collection, id: &Uuid, patch: Value) -> Result<bool, AppError> {
        let sql = format!("UPDATE {} SET doc = doc || $2 WHERE id = $1", collection.table());

        let result = sqlx::query(&sql)
            .bind(id)
            .bind(Json(patch))
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collections_map_to_fixed_tables() {
        assert_eq!(Collection::Contacts.table(), "contacts");
        assert_eq!(Collection::Projects.table(), "projects");
        assert_eq!(Collection::Skills.table(), "skills");
    }
}
