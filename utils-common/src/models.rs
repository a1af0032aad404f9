use serde::{Deserialize, Serialize};

/// 作者信息 - 文章列表中展示的作者名称与头像
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Author {
    /// 作者名称
    pub name: String,
    /// 头像地址
    pub avatar: String,
}

/// 分类 - 筛选时只看名称，同名不同ID的分类视为同一个
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Category {
    /// 分类唯一标识符
    pub id: String,
    /// 分类显示名称（筛选键）
    pub name: String,
}

/// 文章 - 接口返回的单条文章记录，加载后不可变
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// 文章唯一标识符
    pub id: String,
    /// 文章标题
    pub title: String,
    /// 发布时间，保留接口给出的原始 ISO-8601 文本
    pub publish_date: String,
    /// 作者
    pub author: Author,
    /// 文章摘要
    pub summary: String,
    /// 分类列表（保持接口顺序）
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Post {
    /// 按顺序返回文章所有分类的名称
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|category| category.name.as_str())
    }
}

/// `GET api/posts` 的响应体
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct PostsResponse {
    pub posts: Vec<Post>,
}
