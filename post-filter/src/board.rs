//! 文章看板：持有文章集合、筛选选择集与页码，并维护派生视图。
//!
//! 派生关系：
//! - 文章集合变化 → 重新筛选 → 重新分页
//! - 页码变化 → 重新分页
//! - 选择集变化 → 重新筛选 → 重新分页
//! - 当前页变化 → 重新提取分类选项
//!
//! 所有派生数据都整体重算，不做增量修补。

use utils_common::models::Post;

use crate::categories::derive_categories;
use crate::diag;
use crate::fetch::FetchError;
use crate::models::{BoardConfig, BoardSnapshot, CategoryOption, PostRow};
use crate::pagination::{paginate, PaginationSummary};
use crate::predicate::{filter_indices, FilterSelection};

/// 文章存储 - 每次成功获取后整体替换，代数单调递增
#[derive(Debug, Default)]
pub struct PostStore {
    posts: Vec<Post>,
    generation: u64,
}

impl PostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 替换全部文章，返回新的代数
    pub fn replace(&mut self, posts: Vec<Post>) -> u64 {
        self.posts = posts;
        self.generation += 1;
        self.generation
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

/// 派生视图
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardView {
    /// 计算时文章存储的代数
    pub source_generation: u64,
    /// 筛选命中的文章下标
    filtered: Vec<usize>,
    /// 当前页文章下标
    page: Vec<usize>,
    page_count: usize,
    /// 当前页文章中出现的分类
    categories: Vec<String>,
}

/// 看板事件 - 所有状态变更都经由事件串行应用
#[derive(Debug)]
pub enum BoardEvent {
    /// 获取文章成功
    PostsLoaded(Vec<Post>),
    /// 获取文章失败
    FetchFailed(FetchError),
    /// 切换分类筛选
    SelectFilter(String),
    /// 跳转到指定页
    SetPage(usize),
}

/// 进行中的获取请求凭据
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

/// 文章看板
#[derive(Debug)]
pub struct PostBoard {
    config: BoardConfig,
    store: PostStore,
    selection: FilterSelection,
    page_index: usize,
    view: BoardView,
    fetch_in_flight: bool,
}

impl Default for PostBoard {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

impl PostBoard {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            store: PostStore::new(),
            selection: FilterSelection::new(),
            page_index: 0,
            view: BoardView::default(),
            fetch_in_flight: false,
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// 应用一个事件并同步重算受影响的派生数据
    pub fn dispatch(&mut self, event: BoardEvent) {
        match event {
            BoardEvent::PostsLoaded(posts) => {
                let count = posts.len();
                let generation = self.store.replace(posts);
                diag::log(&format!("已加载 {} 篇文章 (第 {} 代)", count, generation));
                self.refilter();
            }
            BoardEvent::FetchFailed(err) => {
                diag::warn(&format!("获取文章失败: {}", err));
            }
            BoardEvent::SelectFilter(name) => {
                self.selection = self.selection.toggled(&name);
                self.refilter();
            }
            BoardEvent::SetPage(index) => {
                self.page_index = index;
                self.repaginate();
            }
        }
    }

    /// 用一批文章替换存储
    pub fn load_posts(&mut self, posts: Vec<Post>) {
        self.dispatch(BoardEvent::PostsLoaded(posts));
    }

    /// 切换分类筛选，不会重置页码
    pub fn select_filter(&mut self, name: &str) {
        self.dispatch(BoardEvent::SelectFilter(name.to_string()));
    }

    /// 跳转到指定页，不做范围校验
    pub fn set_page(&mut self, index: usize) {
        self.dispatch(BoardEvent::SetPage(index));
    }

    /// 前往下一页，按钮不可用时返回 false
    pub fn next_page(&mut self) -> bool {
        if !self.pagination().can_go_next() {
            return false;
        }
        self.set_page(self.page_index + 1);
        true
    }

    /// 前往上一页，按钮不可用时返回 false
    pub fn previous_page(&mut self) -> bool {
        if !self.pagination().can_go_previous() {
            return false;
        }
        self.set_page(self.page_index - 1);
        true
    }

    /// 开始一次获取；已有请求进行中时返回 None
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        if self.fetch_in_flight {
            diag::warn("已有获取请求进行中，忽略本次请求");
            return None;
        }

        self.fetch_in_flight = true;
        Some(FetchTicket {
            generation: self.store.generation(),
        })
    }

    /// 完成获取；凭据过期（期间存储已被替换）时丢弃结果
    pub fn complete_fetch(&mut self, ticket: FetchTicket, result: Result<Vec<Post>, FetchError>) {
        self.fetch_in_flight = false;

        if ticket.generation != self.store.generation() {
            diag::warn(&format!(
                "丢弃过期的获取结果 (凭据第 {} 代, 当前第 {} 代)",
                ticket.generation,
                self.store.generation()
            ));
            return;
        }

        match result {
            Ok(posts) => self.dispatch(BoardEvent::PostsLoaded(posts)),
            Err(err) => self.dispatch(BoardEvent::FetchFailed(err)),
        }
    }

    pub fn is_fetching(&self) -> bool {
        self.fetch_in_flight
    }

    /// 文章尚未加载时展示加载中
    pub fn is_loading(&self) -> bool {
        self.store.is_empty()
    }

    pub fn store(&self) -> &PostStore {
        &self.store
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn view(&self) -> &BoardView {
        &self.view
    }

    /// 筛选后的文章
    pub fn filtered_posts(&self) -> Vec<&Post> {
        self.resolve(&self.view.filtered)
    }

    /// 当前页文章
    pub fn current_page(&self) -> Vec<&Post> {
        self.resolve(&self.view.page)
    }

    /// 当前页的分类选项及选中状态
    pub fn category_options(&self) -> Vec<CategoryOption> {
        self.view
            .categories
            .iter()
            .map(|name| CategoryOption {
                name: name.clone(),
                selected: self.selection.contains(name),
            })
            .collect()
    }

    pub fn pagination(&self) -> PaginationSummary {
        PaginationSummary::new(self.page_index, self.view.page_count)
    }

    /// 生成展示层快照
    pub fn snapshot(&self) -> BoardSnapshot {
        let pagination = self.pagination();

        BoardSnapshot {
            loading: self.is_loading(),
            posts: self
                .current_page()
                .into_iter()
                .enumerate()
                .map(|(i, post)| PostRow::new(i + 1, post))
                .collect(),
            categories: self.category_options(),
            selected_filters: self.selection.names().to_vec(),
            pagination,
            can_go_previous: pagination.can_go_previous(),
            can_go_next: pagination.can_go_next(),
            total: self.view.filtered.len(),
        }
    }

    fn resolve(&self, indices: &[usize]) -> Vec<&Post> {
        let posts = self.store.posts();
        indices.iter().filter_map(|&i| posts.get(i)).collect()
    }

    // 重新筛选，随后重新分页
    fn refilter(&mut self) {
        self.view.filtered = filter_indices(self.store.posts(), &self.selection);
        self.view.source_generation = self.store.generation();
        self.repaginate();
    }

    // 重新分页，页数、当前页和分类选项一起更新
    fn repaginate(&mut self) {
        let window = paginate(self.view.filtered.len(), self.page_index, self.config.page_size);
        let page = self.view.filtered[window.range].to_vec();
        let categories = derive_categories(self.resolve(&page));

        self.view.page_count = window.page_count;
        self.view.page = page;
        self.view.categories = categories;
    }
}
