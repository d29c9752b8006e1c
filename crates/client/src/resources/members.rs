//! Member endpoints

use meridian_domain::{Member, MemberPatch, NewMember, Page};

use crate::api::{ApiClient, ApiError};

/// Access to `/members`
pub struct Members<'a> {
    pub(crate) api: &'a ApiClient,
}

impl Members<'_> {
    /// List members of a program
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn list(
        &self,
        program_id: &str,
        page: Option<u32>,
    ) -> Result<Page<Member>, ApiError> {
        let mut query = vec![("program_id", program_id.to_string())];
        if let Some(page) = page {
            query.push(("page", page.to_string()));
        }
        self.api.get("/members", &query).await
    }

    /// Fetch a single member
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get(&self, id: &str) -> Result<Member, ApiError> {
        self.api.get(&format!("/members/{id}"), &[]).await
    }

    /// Enroll a member
    ///
    /// # Errors
    /// Returns error if the request fails or the payload is rejected.
    pub async fn create(&self, member: &NewMember) -> Result<Member, ApiError> {
        self.api.post("/members", member).await
    }

    /// Apply a partial update to a member
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn update(&self, id: &str, patch: &MemberPatch) -> Result<Member, ApiError> {
        self.api.patch(&format!("/members/{id}"), patch).await
    }
}
