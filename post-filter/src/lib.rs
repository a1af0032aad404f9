use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

// 导出模块
pub mod board;
pub mod categories;
pub mod diag;
pub mod fetch;
pub mod models;
pub mod pagination;
pub mod predicate;

pub use board::{BoardEvent, BoardView, FetchTicket, PostBoard, PostStore};
pub use categories::derive_categories;
pub use fetch::{parse_posts_body, FetchError, POSTS_ENDPOINT};
pub use models::{BoardConfig, BoardSnapshot, CategoryOption, PostRow};
pub use pagination::{page_count, page_range, paginate, PageWindow, PaginationSummary, PAGE_SIZE};
pub use predicate::{filter_indices, matches, FilterSelection};

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// 初始化函数 - 设置错误处理
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// 版本信息
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// 文章看板JS接口 - 提供给JavaScript使用的筛选与分页API
///
/// 看板只在主线程上使用；异步获取完成后通过共享引用写回。
#[wasm_bindgen]
pub struct PostBoardJS {
    board: Rc<RefCell<PostBoard>>,
}

impl Default for PostBoardJS {
    fn default() -> Self {
        Self::from_board(PostBoard::default())
    }
}

impl PostBoardJS {
    fn from_board(board: PostBoard) -> Self {
        Self {
            board: Rc::new(RefCell::new(board)),
        }
    }
}

#[wasm_bindgen]
impl PostBoardJS {
    /// 使用默认配置创建看板
    #[wasm_bindgen(constructor)]
    pub fn new() -> PostBoardJS {
        Self::default()
    }

    /// 使用 JSON 配置创建看板，例如 `{"page_size": 15, "endpoint": "api/posts"}`
    pub fn with_config(config_json: &str) -> Result<PostBoardJS, JsValue> {
        let config: BoardConfig = serde_json::from_str(config_json)
            .map_err(|e| JsValue::from_str(&format!("解析配置失败: {}", e)))?;

        Ok(Self::from_board(PostBoard::new(config)))
    }

    /// 直接加载 `{ "posts": [...] }` 响应体；失败时记录日志并保持原状态
    pub fn load_json(&self, body: &str) -> bool {
        let mut board = self.board.borrow_mut();

        match parse_posts_body(body) {
            Ok(posts) => {
                board.dispatch(BoardEvent::PostsLoaded(posts));
                true
            }
            Err(err) => {
                board.dispatch(BoardEvent::FetchFailed(err));
                false
            }
        }
    }

    /// 切换分类筛选
    pub fn select_filter(&self, name: &str) {
        self.board.borrow_mut().select_filter(name);
    }

    /// 跳转到指定页（从 0 开始）
    pub fn set_page(&self, index: usize) {
        self.board.borrow_mut().set_page(index);
    }

    /// 下一页
    pub fn next_page(&self) -> bool {
        self.board.borrow_mut().next_page()
    }

    /// 上一页
    pub fn previous_page(&self) -> bool {
        self.board.borrow_mut().previous_page()
    }

    /// 是否仍在加载中
    pub fn is_loading(&self) -> bool {
        self.board.borrow().is_loading()
    }

    /// 获取当前渲染所需的快照
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = self.board.borrow().snapshot();

        serde_wasm_bindgen::to_value(&snapshot)
            .map_err(|e| JsValue::from_str(&format!("序列化快照失败: {}", e)))
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl PostBoardJS {
    /// 从配置的接口获取文章，返回 Promise；失败只记录日志
    pub fn fetch_posts(&self) -> js_sys::Promise {
        let board = Rc::clone(&self.board);

        wasm_bindgen_futures::future_to_promise(async move {
            let (ticket, endpoint) = {
                let mut guard = board.borrow_mut();
                let endpoint = guard.config().endpoint.clone();
                match guard.begin_fetch() {
                    Some(ticket) => (ticket, endpoint),
                    None => return Ok(JsValue::FALSE),
                }
            };

            let result = fetch::fetch_posts(&endpoint).await;
            let loaded = result.is_ok();
            board.borrow_mut().complete_fetch(ticket, result);

            Ok(JsValue::from_bool(loaded))
        })
    }
}
