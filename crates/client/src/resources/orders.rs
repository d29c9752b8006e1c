//! Order endpoints

use meridian_domain::{NewOrder, Order, Page};

use crate::api::{ApiClient, ApiError};

/// Access to `/orders`
pub struct Orders<'a> {
    pub(crate) api: &'a ApiClient,
}

impl Orders<'_> {
    /// List orders, optionally scoped to one member
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn list(
        &self,
        member_id: Option<&str>,
        page: Option<u32>,
    ) -> Result<Page<Order>, ApiError> {
        let mut query = Vec::new();
        if let Some(member_id) = member_id {
            query.push(("member_id", member_id.to_string()));
        }
        if let Some(page) = page {
            query.push(("page", page.to_string()));
        }
        self.api.get("/orders", &query).await
    }

    /// Fetch a single order
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get(&self, id: &str) -> Result<Order, ApiError> {
        self.api.get(&format!("/orders/{id}"), &[]).await
    }

    /// Place an order
    ///
    /// # Errors
    /// Returns error if the request fails or the payload is rejected.
    pub async fn create(&self, order: &NewOrder) -> Result<Order, ApiError> {
        self.api.post("/orders", order).await
    }
}
