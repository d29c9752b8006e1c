//! Paginated list envelope

use serde::{Deserialize, Serialize};

/// Standard list envelope returned by collection endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
}

impl<T> Page<T> {
    /// True when a subsequent page exists
    #[must_use]
    pub fn has_more(&self) -> bool {
        u64::from(self.page) * u64::from(self.per_page) < self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_more_accounts_for_final_page() {
        let page =
            Page { data: vec![1, 2, 3], page: 2, per_page: 25, total: 51 };
        assert!(page.has_more());

        let last = Page { data: vec![1], page: 3, per_page: 25, total: 51 };
        assert!(!last.has_more());
    }
}
