//! Program endpoints

use meridian_domain::{Page, Program};

use crate::api::{ApiClient, ApiError};

/// Access to `/programs`
pub struct Programs<'a> {
    pub(crate) api: &'a ApiClient,
}

impl Programs<'_> {
    /// List programs visible to the authenticated client
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn list(&self, page: Option<u32>) -> Result<Page<Program>, ApiError> {
        let mut query = Vec::new();
        if let Some(page) = page {
            query.push(("page", page.to_string()));
        }
        self.api.get("/programs", &query).await
    }

    /// Fetch a single program by id
    ///
    /// # Errors
    /// Returns error if the request fails or the program does not exist.
    pub async fn get(&self, id: &str) -> Result<Program, ApiError> {
        self.api.get(&format!("/programs/{id}"), &[]).await
    }
}
