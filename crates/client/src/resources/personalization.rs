//! Personalization endpoints

use meridian_domain::PersonalizationProfile;

use crate::api::{ApiClient, ApiError};

/// Access to per-member personalization data
pub struct Personalization<'a> {
    pub(crate) api: &'a ApiClient,
}

impl Personalization<'_> {
    /// Fetch the personalization profile of a member
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get(&self, member_id: &str) -> Result<PersonalizationProfile, ApiError> {
        self.api.get(&format!("/members/{member_id}/personalization"), &[]).await
    }
}
