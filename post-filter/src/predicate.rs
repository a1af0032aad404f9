use serde::{Deserialize, Serialize};
use utils_common::models::Post;

/// 筛选选择集 - 用户选中的分类名称
///
/// 名称唯一，保留选中顺序用于展示；匹配时与顺序无关。
/// 值语义：`toggled` 返回新的选择集，原值保持不变。
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct FilterSelection {
    names: Vec<String>,
}

impl FilterSelection {
    /// 创建空选择集
    pub fn new() -> Self {
        Self::default()
    }

    /// 切换分类：已选中则移除，否则追加到末尾
    pub fn toggled(&self, name: &str) -> Self {
        let mut names = self.names.clone();

        match names.iter().position(|selected| selected == name) {
            Some(index) => {
                names.remove(index);
            }
            None => names.push(name.to_string()),
        }

        Self { names }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|selected| selected == name)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// 按选中顺序遍历分类名称
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// 判断文章是否满足当前筛选
///
/// 选择集为空时所有文章都匹配；否则只要文章的任一分类名称被选中即匹配（OR 语义）。
pub fn matches(post: &Post, selection: &FilterSelection) -> bool {
    if selection.is_empty() {
        return true;
    }

    post.category_names().any(|name| selection.contains(name))
}

/// 按筛选条件过滤文章，返回命中文章在原集合中的下标（保持原顺序）
pub fn filter_indices(posts: &[Post], selection: &FilterSelection) -> Vec<usize> {
    posts
        .iter()
        .enumerate()
        .filter(|(_, post)| matches(post, selection))
        .map(|(index, _)| index)
        .collect()
}
