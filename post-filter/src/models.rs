use serde::{Deserialize, Serialize};
use utils_common::{format_publish_date, Post};

use crate::fetch::POSTS_ENDPOINT;
use crate::pagination::{PaginationSummary, PAGE_SIZE};

/// 看板配置 - 默认每页 15 条，从 `api/posts` 获取文章
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// 每页条数
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// 文章接口地址
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_page_size() -> usize {
    PAGE_SIZE
}

fn default_endpoint() -> String {
    POSTS_ENDPOINT.to_string()
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            endpoint: default_endpoint(),
        }
    }
}

/// 可切换的分类选项
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    pub name: String,
    pub selected: bool,
}

/// 表格中的一行
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PostRow {
    /// 在当前页中的位置（从 1 开始）
    pub position: usize,
    pub id: String,
    pub title: String,
    pub author: String,
    pub avatar: String,
    /// 原始发布时间
    pub publish_date: String,
    /// `DD-MM-YYYY` 格式的发布日期
    pub display_date: String,
    pub summary: String,
    pub categories: Vec<String>,
}

impl PostRow {
    pub fn new(position: usize, post: &Post) -> Self {
        Self {
            position,
            id: post.id.clone(),
            title: post.title.clone(),
            author: post.author.name.clone(),
            avatar: post.author.avatar.clone(),
            publish_date: post.publish_date.clone(),
            display_date: format_publish_date(&post.publish_date),
            summary: post.summary.clone(),
            categories: post.category_names().map(str::to_string).collect(),
        }
    }
}

/// 看板快照 - 展示层一次渲染所需的全部只读数据
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    /// 文章尚未加载（或加载失败）
    pub loading: bool,
    /// 当前页文章
    pub posts: Vec<PostRow>,
    /// 当前页可用的分类及选中状态
    pub categories: Vec<CategoryOption>,
    /// 已选中的分类
    pub selected_filters: Vec<String>,
    /// 分页信息
    pub pagination: PaginationSummary,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    /// 筛选后的文章总数
    pub total: usize,
}
