pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    /// Non-positive or missing values fall back to the defaults.
    pub fn from_raw(page: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            page: positive_or(page, DEFAULT_PAGE),
            limit: positive_or(limit, DEFAULT_LIMIT),
        }
    }

    /// Slices `items` to this page. Out-of-range pages are empty.
    pub fn slice<T: Clone>(&self, items: &[T]) -> Page<T> {
        let total = items.len() as u64;
        let start = self.page.saturating_sub(1).saturating_mul(self.limit);
        let end = self.page.saturating_mul(self.limit);

        let start = usize::try_from(start.min(total)).unwrap_or(items.len());
        let end = usize::try_from(end.min(total)).unwrap_or(items.len());

        Page {
            items: items[start..end].to_vec(),
            page: self.page,
            limit: self.limit,
            total,
            total_pages: total.div_ceil(self.limit),
        }
    }
}

fn positive_or(value: Option<i64>, default: u64) -> u64 {
    value
        .and_then(|v| u64::try_from(v).ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
}
