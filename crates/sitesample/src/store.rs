use async_trait::async_trait;
use mongodb::bson::Document;
use mongodb::{Client, Database};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),
    #[error("Document conversion error: {0}")]
    Bson(#[from] mongodb::bson::ser::Error),
}

/// Write side of the document store. Collections are created implicitly on
/// first insert; returned ids are rendered as strings for logging only.
#[async_trait]
pub trait DocumentSink: Send + Sync {
    async fn insert_one(&self, collection: &str, document: &Value) -> Result<String, StoreError>;

    async fn insert_many(
        &self,
        collection: &str,
        documents: &[Value],
    ) -> Result<Vec<String>, StoreError>;
}

#[derive(Debug, Clone)]
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        let db = client.database(database);
        log::debug!("Connected to MongoDB at {}", uri);
        Ok(Self { db })
    }
}

#[async_trait]
impl DocumentSink for MongoStore {
    async fn insert_one(&self, collection: &str, document: &Value) -> Result<String, StoreError> {
        let doc = mongodb::bson::to_document(document)?;
        let result = self
            .db
            .collection::<Document>(collection)
            .insert_one(doc)
            .await?;
        Ok(result.inserted_id.to_string())
    }

    async fn insert_many(
        &self,
        collection: &str,
        documents: &[Value],
    ) -> Result<Vec<String>, StoreError> {
        let docs = documents
            .iter()
            .map(mongodb::bson::to_document)
            .collect::<Result<Vec<_>, _>>()?;
        let result = self
            .db
            .collection::<Document>(collection)
            .insert_many(docs)
            .await?;

        let mut ids: Vec<_> = result.inserted_ids.into_iter().collect();
        ids.sort_by_key(|(index, _)| *index);
        Ok(ids.into_iter().map(|(_, id)| id.to_string()).collect())
    }
}

/// Persists a batch of records into the named collection.
///
/// An empty slice performs zero writes; a non-empty slice is inserted as
/// exactly one batch. Storage failures are logged and swallowed, with no
/// retry and no rollback of partially inserted batches.
pub async fn persist_records<T: Serialize>(
    sink: &dyn DocumentSink,
    collection: &str,
    records: &[T],
) {
    if records.is_empty() {
        log::debug!("No data to insert into {} collection", collection);
        return;
    }

    let documents: Vec<Value> = match records.iter().map(serde_json::to_value).collect() {
        Ok(documents) => documents,
        Err(e) => {
            log::error!("Error serializing records for {}: {}", collection, e);
            return;
        }
    };

    log::debug!(
        "Inserting {} documents into {} collection",
        documents.len(),
        collection
    );
    match sink.insert_many(collection, &documents).await {
        Ok(ids) => log::debug!("Inserted document IDs: {:?}", ids),
        Err(e) => log::error!("Error saving to {}: {}", collection, e),
    }
}

/// Persists a raw JSON payload, branching on its shape: an array becomes
/// one batch insert of its elements, an object becomes a single document.
/// Scalars and null cannot be stored as documents and are skipped.
pub async fn persist_value(sink: &dyn DocumentSink, collection: &str, value: &Value) {
    match value {
        Value::Array(items) => {
            if items.is_empty() {
                log::debug!("No data to insert into {} collection", collection);
                return;
            }
            log::debug!(
                "Inserting {} documents into {} collection",
                items.len(),
                collection
            );
            match sink.insert_many(collection, items).await {
                Ok(ids) => log::debug!("Inserted document IDs: {:?}", ids),
                Err(e) => log::error!("Error saving to {}: {}", collection, e),
            }
        }
        Value::Object(_) => {
            log::debug!("Inserting 1 document into {} collection", collection);
            match sink.insert_one(collection, value).await {
                Ok(id) => log::debug!("Inserted document ID: {}", id),
                Err(e) => log::error!("Error saving to {}: {}", collection, e),
            }
        }
        other => log::warn!(
            "Payload for {} is neither a document nor a list, skipping: {}",
            collection,
            other
        ),
    }
}
