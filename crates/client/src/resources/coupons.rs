//! Coupon endpoints

use meridian_domain::{Coupon, NewCoupon, Page};

use crate::api::{ApiClient, ApiError};

/// Access to `/coupons`
pub struct Coupons<'a> {
    pub(crate) api: &'a ApiClient,
}

impl Coupons<'_> {
    /// List coupons of a program
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn list(&self, program_id: &str) -> Result<Page<Coupon>, ApiError> {
        self.api.get("/coupons", &[("program_id", program_id.to_string())]).await
    }

    /// Issue a coupon
    ///
    /// # Errors
    /// Returns error if the request fails or the payload is rejected.
    pub async fn create(&self, coupon: &NewCoupon) -> Result<Coupon, ApiError> {
        self.api.post("/coupons", coupon).await
    }

    /// Revoke a coupon
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.api.delete(&format!("/coupons/{id}")).await
    }
}
