use utils_common::models::Post;

/// 提取一组文章中出现的分类名称
///
/// 结果去重，按首次出现的顺序排列（先按文章顺序，再按文章内分类顺序）。
pub fn derive_categories<'a, I>(posts: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Post>,
{
    let mut names: Vec<String> = Vec::new();

    for post in posts {
        for name in post.category_names() {
            if !names.iter().any(|seen| seen == name) {
                names.push(name.to_string());
            }
        }
    }

    names
}
