use uuid::Uuid;

use crate::domain::shared::value_objects::TenantId;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 100;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub tenant_id: Option<TenantId>,
    pub category_id: Option<Uuid>,
    /// `Some(true)` restricts to published products; `None` means no filter.
    pub is_publish: Option<bool>,
}

impl ProductFilter {
    /// Builds the filter from raw query parameters.
    ///
    /// A category that is not a valid identifier is dropped rather than
    /// rejected, and only the literal `"true"` turns the publish filter on.
    pub fn from_query(
        tenant_id: Option<String>,
        category_id: Option<String>,
        is_publish: Option<String>,
    ) -> Self {
        Self {
            tenant_id: tenant_id.filter(|t| !t.is_empty()).map(TenantId::new),
            category_id: category_id.and_then(|c| Uuid::parse_str(&c).ok()),
            is_publish: (is_publish.as_deref() == Some("true")).then_some(true),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    /// Parses page and limit from text. Non-numeric or zero values fall back
    /// to the defaults and the limit is capped at [`MAX_LIMIT`].
    pub fn from_query(page: Option<String>, limit: Option<String>) -> Self {
        let page = parse_positive(page).unwrap_or(DEFAULT_PAGE);
        let limit = parse_positive(limit).unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
        Self { page, limit }
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }
}

fn parse_positive(value: Option<String>) -> Option<u32> {
    value
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|v| *v > 0)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductSearch {
    /// Free-text term matched against the product name.
    pub q: Option<String>,
    pub filter: ProductFilter,
    pub pagination: Pagination,
}

impl ProductSearch {
    pub fn new(q: Option<String>, filter: ProductFilter, pagination: Pagination) -> Self {
        Self {
            q: q.map(|q| q.trim().to_string()).filter(|q| !q.is_empty()),
            filter,
            pagination,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub page_size: u32,
    pub current_page: u32,
}

impl<T> Page<T> {
    pub fn empty(pagination: Pagination) -> Self {
        Self {
            data: Vec::new(),
            total: 0,
            page_size: pagination.limit,
            current_page: pagination.page,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            data: self.data.into_iter().map(f).collect(),
            total: self.total,
            page_size: self.page_size,
            current_page: self.current_page,
        }
    }
}
