/// Page number (1-based) plus page size for an offset-paginated list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
}

impl Pagination {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    pub fn first(limit: u32) -> Self {
        Self::new(1, limit)
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page.max(1) - 1) * u64::from(self.limit)
    }

    pub fn total_pages(&self, total: u64) -> u32 {
        let pages = total.div_ceil(u64::from(self.limit.max(1)));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn with_page(self, page: u32) -> Self {
        Self::new(page, self.limit)
    }

    pub fn query_pairs(&self) -> Vec<(String, String)> {
        vec![
            ("limit".to_string(), self.limit.to_string()),
            ("offset".to_string(), self.offset().to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_follows_page() {
        for page in 1..=20u32 {
            let pagination = Pagination::new(page, 5);
            assert_eq!(pagination.offset(), u64::from(page - 1) * 5);
        }
    }

    #[test]
    fn total_pages_rounds_up() {
        let pagination = Pagination::first(5);
        assert_eq!(pagination.total_pages(0), 0);
        assert_eq!(pagination.total_pages(5), 1);
        assert_eq!(pagination.total_pages(6), 2);
        assert_eq!(pagination.total_pages(41), 9);
    }

    #[test]
    fn page_zero_is_clamped() {
        let pagination = Pagination::new(0, 0);
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.offset(), 0);
    }

    #[test]
    fn pages_past_the_end_still_build_queries() {
        let pairs = Pagination::new(400, 5).query_pairs();
        assert_eq!(pairs[1], ("offset".to_string(), "1995".to_string()));
    }
}
