//! Catalog item endpoints

use meridian_domain::{Item, ItemPatch, NewItem, Page};

use crate::api::{ApiClient, ApiError};

/// Access to `/items`
pub struct Items<'a> {
    pub(crate) api: &'a ApiClient,
}

impl Items<'_> {
    /// List items of a program
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn list(&self, program_id: &str, page: Option<u32>) -> Result<Page<Item>, ApiError> {
        let mut query = vec![("program_id", program_id.to_string())];
        if let Some(page) = page {
            query.push(("page", page.to_string()));
        }
        self.api.get("/items", &query).await
    }

    /// Fetch a single item
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get(&self, id: &str) -> Result<Item, ApiError> {
        self.api.get(&format!("/items/{id}"), &[]).await
    }

    /// Create a catalog item
    ///
    /// # Errors
    /// Returns error if the request fails or the payload is rejected.
    pub async fn create(&self, item: &NewItem) -> Result<Item, ApiError> {
        self.api.post("/items", item).await
    }

    /// Apply a partial update to an item
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn update(&self, id: &str, patch: &ItemPatch) -> Result<Item, ApiError> {
        self.api.patch(&format!("/items/{id}"), patch).await
    }

    /// Delete an item
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.api.delete(&format!("/items/{id}")).await
    }
}
