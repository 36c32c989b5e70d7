use std::time::Duration;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::Database;
use serde::de::DeserializeOwned;

use crate::domain::errors::DomainError;
use crate::domain::ports::CustomerStore;
use crate::domain::records::{Customer, CustomerCompany};

use super::models::{CustomerCompanyDoc, CustomerDoc};

/// Upper bound on a single full-collection read. On expiry the request
/// reports a timeout instead of hanging on a slow store.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

impl From<mongodb::error::Error> for DomainError {
    fn from(e: mongodb::error::Error) -> Self {
        DomainError::StoreUnavailable {
            store: "document",
            reason: e.to_string(),
        }
    }
}

/// Document store adapter over a MongoDB database handle.
pub struct MongoCustomerStore {
    db: Database,
}

impl MongoCustomerStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    async fn find_all<T>(&self, collection: &str) -> Result<Vec<T>, DomainError>
    where
        T: DeserializeOwned + Unpin + Send + Sync,
    {
        let fetch = async {
            let cursor = self.db.collection::<T>(collection).find(doc! {}).await?;
            cursor.try_collect::<Vec<T>>().await
        };

        match tokio::time::timeout(FETCH_TIMEOUT, fetch).await {
            Ok(result) => result.map_err(DomainError::from),
            Err(_) => Err(DomainError::StoreTimeout { store: "document" }),
        }
    }
}

#[async_trait]
impl CustomerStore for MongoCustomerStore {
    async fn fetch_customers(&self) -> Result<Vec<Customer>, DomainError> {
        let docs: Vec<CustomerDoc> = self.find_all("customers").await?;
        Ok(docs.into_iter().map(Customer::from).collect())
    }

    async fn fetch_companies(&self) -> Result<Vec<CustomerCompany>, DomainError> {
        let docs: Vec<CustomerCompanyDoc> = self.find_all("customer_companies").await?;
        Ok(docs.into_iter().map(CustomerCompany::from).collect())
    }
}
