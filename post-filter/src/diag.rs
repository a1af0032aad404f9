//! 诊断输出：浏览器中写入控制台，本地运行时写入 stderr

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;
#[cfg(target_arch = "wasm32")]
use web_sys::console;

/// 普通诊断信息
pub fn log(message: &str) {
    #[cfg(target_arch = "wasm32")]
    console::log_1(&JsValue::from_str(message));

    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{}", message);
}

/// 警告，用于被吞掉的失败
pub fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    console::warn_1(&JsValue::from_str(message));

    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("警告: {}", message);
}
