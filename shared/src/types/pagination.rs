//! Pagination types for list endpoints
//!
//! The client forwards paging parameters verbatim and mirrors the paging
//! metadata the backend returns; there is no client-side paging logic.

use serde::{Deserialize, Serialize};

/// Paging parameters forwarded as query parameters
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PaginationQuery {
    /// Page number (1-indexed); backend default when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Items per page; backend default when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl PaginationQuery {
    /// Request a specific page with the given page size
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
        }
    }

    /// Request a specific page with the backend's default page size
    pub fn page(page: u32) -> Self {
        Self {
            page: Some(page),
            limit: None,
        }
    }
}

/// Paging metadata mirrored from list responses
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PaginationInfo {
    /// Current page number (1-indexed)
    pub page: u32,

    /// Items per page
    pub limit: u32,

    /// Total number of items across all pages
    pub total: u64,

    /// Total number of pages
    pub total_pages: u32,
}

impl PaginationInfo {
    /// Whether a later page exists
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether an earlier page exists
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}
