use serde::Serialize;
use std::ops::Range;

/// 每页文章数
pub const PAGE_SIZE: usize = 15;

/// 计算总页数，空集合为 0 页
pub fn page_count(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

/// 计算指定页在筛选结果中的半开区间 `[index * size, (index + 1) * size)`
///
/// 超出范围时返回空区间或截短的最后一页，不会越界，也不会因乘法溢出而 panic。
pub fn page_range(len: usize, page_index: usize, page_size: usize) -> Range<usize> {
    let page_size = page_size.max(1);
    let start = page_index.saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);

    start..end
}

/// 一次分页计算的结果：总页数与当前页区间总是一起更新
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub page_count: usize,
    pub range: Range<usize>,
}

/// 对长度为 `len` 的筛选结果分页
pub fn paginate(len: usize, page_index: usize, page_size: usize) -> PageWindow {
    PageWindow {
        page_count: page_count(len, page_size),
        range: page_range(len, page_index, page_size),
    }
}

/// 分页摘要 - 提供给展示层的页码信息
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationSummary {
    /// 当前页码（从 0 开始）
    pub page_index: usize,
    /// 总页数
    pub page_count: usize,
}

impl PaginationSummary {
    pub fn new(page_index: usize, page_count: usize) -> Self {
        Self {
            page_index,
            page_count,
        }
    }

    /// 是否可以前往上一页
    pub fn can_go_previous(&self) -> bool {
        self.page_index != 0
    }

    /// 是否可以前往下一页
    ///
    /// 当前页已是最后一页、结果为空，或页码已超出总页数时均不可用。
    pub fn can_go_next(&self) -> bool {
        self.page_index.saturating_add(1) < self.page_count
    }

    /// 页脚文本，例如 `Page 1/2`
    pub fn label(&self) -> String {
        format!("Page {}/{}", self.page_index.saturating_add(1), self.page_count)
    }
}
