use serde::{Deserialize, Serialize};

/// Upper bound on `page_size` regardless of what the client asks for.
pub const MAX_PAGE_SIZE: u32 = 100;

/// `?page=N&page_size=M` query parameters for list endpoints (1-based pages).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl PageQuery {
    /// Resolves the request against the configured default size.
    pub fn resolve(&self, default_size: u32) -> PageWindow {
        let page = self.page.unwrap_or(1).max(1);
        let size = self
            .page_size
            .unwrap_or(default_size)
            .clamp(1, MAX_PAGE_SIZE);
        PageWindow { page, size }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u32,
    pub size: u32,
}

impl PageWindow {
    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.size)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub count: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Wraps one page of `results` out of `count` total items listed at `path`.
    pub fn new(path: &str, window: PageWindow, count: i64, results: Vec<T>) -> Self {
        let link = |page: u32| format!("{}?page={}&page_size={}", path, page, window.size);
        let has_next = window.offset() + window.limit() < count;
        Self {
            count,
            next: has_next.then(|| link(window.page + 1)),
            previous: (window.page > 1).then(|| link(window.page - 1)),
            results,
        }
    }
}
