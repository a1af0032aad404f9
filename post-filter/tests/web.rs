//! 浏览器环境测试，使用 `wasm-pack test --headless --firefox` 运行

#![cfg(target_arch = "wasm32")]

use post_filter::PostBoardJS;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn body(count: usize) -> String {
    let posts: Vec<String> = (1..=count)
        .map(|n| {
            let category = if n % 4 == 0 { "Tech" } else { "News" };
            format!(
                r#"{{"id":"{n}","title":"Post {n}","publishDate":"2020-01-01T00:00:00Z",
                   "author":{{"name":"A","avatar":""}},"summary":"",
                   "categories":[{{"id":"c{n}","name":"{category}"}}]}}"#
            )
        })
        .collect();

    format!(r#"{{"posts":[{}]}}"#, posts.join(","))
}

#[wasm_bindgen_test]
fn snapshot_reaches_javascript() {
    let board = PostBoardJS::new();
    assert!(board.load_json(&body(20)));

    let value = board.snapshot().unwrap();
    let pagination = js_sys::Reflect::get(&value, &"pagination".into()).unwrap();
    let page_count = js_sys::Reflect::get(&pagination, &"page_count".into()).unwrap();

    assert_eq!(page_count.as_f64(), Some(2.0));
}

#[wasm_bindgen_test]
fn filtering_from_javascript() {
    let board = PostBoardJS::new();
    board.load_json(&body(20));
    board.select_filter("Tech");

    let value = board.snapshot().unwrap();
    let loading = js_sys::Reflect::get(&value, &"loading".into()).unwrap();
    let total = js_sys::Reflect::get(&value, &"total".into()).unwrap();

    assert_eq!(loading.as_bool(), Some(false));
    assert_eq!(total.as_f64(), Some(5.0));
    assert!(!board.next_page());
}

#[wasm_bindgen_test]
fn bad_body_keeps_loading() {
    let board = PostBoardJS::new();
    assert!(!board.load_json("<html></html>"));
    assert!(board.is_loading());
}
