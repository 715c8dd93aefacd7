//! Small browser/native shims used by the components.

use std::time::Duration;

use chrono::{Local, NaiveDate};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Put `text` on the system clipboard, waiting for the browser to accept it.
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window().ok_or_else(|| "no browser window".to_string())?;
        let promise = window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| format!("clipboard write rejected: {:?}", e))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = text;
        Err("clipboard not available on this platform".to_string())
    }
}

/// Open `url` in a new browser tab.
pub fn open_in_new_tab(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.open_with_url_and_target(url, "_blank") {
                tracing::error!("Failed to open {}: {:?}", url, e);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!("Cannot open links on this platform: {}", url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_clipboard_failure_is_reported() {
        let err = copy_to_clipboard("Rua das Flores, 42").await.unwrap_err();
        assert!(err.contains("clipboard"));
    }
}
