//! Subsegment endpoints

use meridian_domain::{NewSubsegment, Page, Subsegment, SubsegmentPatch};

use crate::api::{ApiClient, ApiError};

/// Access to `/subsegments`
pub struct Subsegments<'a> {
    pub(crate) api: &'a ApiClient,
}

impl Subsegments<'_> {
    /// List subsegments of a program
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn list(&self, program_id: &str) -> Result<Page<Subsegment>, ApiError> {
        self.api.get("/subsegments", &[("program_id", program_id.to_string())]).await
    }

    /// Create a subsegment
    ///
    /// # Errors
    /// Returns error if the request fails or the payload is rejected.
    pub async fn create(&self, subsegment: &NewSubsegment) -> Result<Subsegment, ApiError> {
        self.api.post("/subsegments", subsegment).await
    }

    /// Apply a partial update to a subsegment
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn update(
        &self,
        id: &str,
        patch: &SubsegmentPatch,
    ) -> Result<Subsegment, ApiError> {
        self.api.patch(&format!("/subsegments/{id}"), patch).await
    }

    /// Delete a subsegment
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.api.delete(&format!("/subsegments/{id}")).await
    }
}
