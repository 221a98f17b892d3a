//! Browser external URL adapter.

use platform_host::{ExternalUrlFuture, ExternalUrlService};

#[derive(Debug, Clone, Copy, Default)]
/// Opens URLs in a new tab through `window.open`.
pub struct WebExternalUrlService;

impl WebExternalUrlService {
    fn open_now(self, url: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
            window
                .open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")
                .map(|_| ())
                .map_err(|e| format!("window.open failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = url;
            Ok(())
        }
    }
}

impl ExternalUrlService for WebExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        let service = *self;
        Box::pin(async move { service.open_now(url) })
    }
}
