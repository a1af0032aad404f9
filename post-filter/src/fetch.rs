use thiserror::Error;
use utils_common::models::{Post, PostsResponse};

/// 文章接口的默认地址（相对当前页面）
pub const POSTS_ENDPOINT: &str = "api/posts";

/// 获取文章失败的原因
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("网络请求失败: {0}")]
    Network(String),
    #[error("接口返回异常状态码: {0}")]
    Status(u16),
    #[error("读取响应体失败: {0}")]
    Body(String),
    #[error("解析文章数据失败: {0}")]
    Parse(#[from] serde_json::Error),
}

/// 解析 `{ "posts": [...] }` 响应体
pub fn parse_posts_body(body: &str) -> Result<Vec<Post>, FetchError> {
    let response: PostsResponse = serde_json::from_str(body)?;
    Ok(response.posts)
}

/// 请求文章列表，只请求一次，不重试
#[cfg(target_arch = "wasm32")]
pub async fn fetch_posts(endpoint: &str) -> Result<Vec<Post>, FetchError> {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    fn describe(value: &JsValue) -> String {
        value.as_string().unwrap_or_else(|| format!("{:?}", value))
    }

    let window = web_sys::window().ok_or_else(|| FetchError::Network("window 不可用".to_string()))?;

    let response = JsFuture::from(window.fetch_with_str(endpoint))
        .await
        .map_err(|e| FetchError::Network(describe(&e)))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|e| FetchError::Network(describe(&e)))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let text = response.text().map_err(|e| FetchError::Body(describe(&e)))?;
    let text = JsFuture::from(text)
        .await
        .map_err(|e| FetchError::Body(describe(&e)))?;
    let body = text
        .as_string()
        .ok_or_else(|| FetchError::Body("响应体不是文本".to_string()))?;

    parse_posts_body(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_posts_body() {
        let body = r#"{"posts":[{"id":"1","title":"T","publishDate":"2020-01-01T00:00:00Z",
            "author":{"name":"A","avatar":"x"},"summary":"S","categories":[{"id":"c","name":"Tech"}]}]}"#;

        let posts = parse_posts_body(body).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].categories[0].name, "Tech");
    }

    #[test]
    fn empty_list_is_valid() {
        assert!(parse_posts_body(r#"{"posts":[]}"#).unwrap().is_empty());
    }

    #[test]
    fn malformed_bodies_are_parse_errors() {
        for body in ["", "<html>404</html>", "{}", r#"{"posts":{}}"#, r#"{"posts":[{"id":1}]}"#] {
            let err = parse_posts_body(body).unwrap_err();
            assert!(matches!(err, FetchError::Parse(_)), "{}: {:?}", body, err);
        }
    }

    #[test]
    fn errors_render_readable_messages() {
        assert_eq!(FetchError::Status(500).to_string(), "接口返回异常状态码: 500");
        assert!(FetchError::Network("offline".to_string()).to_string().contains("offline"));
    }
}
