pub mod date;
pub mod models;

// 重新导出常用类型和函数，方便直接使用
pub use date::{format_publish_date, parse_publish_date};
pub use models::{Author, Category, Post, PostsResponse};
