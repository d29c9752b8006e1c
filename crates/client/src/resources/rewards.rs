//! Reward endpoints

use meridian_domain::{Page, Reward};

use crate::api::{ApiClient, ApiError};

/// Access to `/rewards`
pub struct Rewards<'a> {
    pub(crate) api: &'a ApiClient,
}

impl Rewards<'_> {
    /// List rewards of a program
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn list(&self, program_id: &str) -> Result<Page<Reward>, ApiError> {
        self.api.get("/rewards", &[("program_id", program_id.to_string())]).await
    }

    /// Fetch a single reward
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get(&self, id: &str) -> Result<Reward, ApiError> {
        self.api.get(&format!("/rewards/{id}"), &[]).await
    }
}
