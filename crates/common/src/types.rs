//! 通用类型定义

use serde::{Deserialize, Serialize};

/// 分页参数，页码从 1 开始
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
        }
    }
}

impl Pagination {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// 查询偏移量，page 为 0 时按第一页处理
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }
}

/// 一页查询结果及其分页元信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

impl<T> PagedResult<T> {
    pub fn new(items: Vec<T>, total: u64, pagination: &Pagination) -> Self {
        Self {
            items,
            total,
            page: pagination.page,
            page_size: pagination.page_size,
        }
    }

    /// 末页页码 = ceil(total / page_size)
    ///
    /// page_size 为 0 的查询在前置校验已被拒绝，这里按 0 页兜底而不是除零。
    pub fn total_pages(&self) -> u32 {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.page_size)) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_grows_with_page() {
        assert_eq!(Pagination::new(1, 10).offset(), 0);
        assert_eq!(Pagination::new(2, 10).offset(), 10);
        assert_eq!(Pagination::new(4, 25).offset(), 75);
    }

    #[test]
    fn offset_treats_page_zero_as_first_page() {
        assert_eq!(Pagination::new(0, 10).offset(), 0);
    }

    #[test]
    fn offset_does_not_overflow_large_pages() {
        let pagination = Pagination::new(u32::MAX, u32::MAX);
        assert_eq!(
            pagination.offset(),
            (u64::from(u32::MAX) - 1) * u64::from(u32::MAX)
        );
    }

    #[test]
    fn total_pages_rounds_up() {
        let pagination = Pagination::new(1, 10);
        assert_eq!(PagedResult::<u8>::new(vec![], 0, &pagination).total_pages(), 0);
        assert_eq!(PagedResult::<u8>::new(vec![], 10, &pagination).total_pages(), 1);
        assert_eq!(PagedResult::<u8>::new(vec![], 11, &pagination).total_pages(), 2);
        assert_eq!(PagedResult::<u8>::new(vec![], 99, &pagination).total_pages(), 10);
    }

    #[test]
    fn total_pages_survives_zero_page_size() {
        let result = PagedResult::<u8>::new(vec![], 42, &Pagination::new(1, 0));
        assert_eq!(result.total_pages(), 0);
    }
}
