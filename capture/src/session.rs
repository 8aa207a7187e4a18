//! Headless-browser session for export captures.
//!
//! One browser, one page, reused across every day of a run. Navigation is
//! sequential by design: concurrent navigation on the shared page would
//! corrupt in-flight state.

use std::time::Duration;

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::dom::Rgba;
use chromiumoxide::cdp::browser_protocol::emulation::SetDefaultBackgroundColorOverrideParams;
use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::handler::viewport::Viewport;
use chromiumoxide::page::Page;
use futures::StreamExt;
use tokio::task::JoinHandle;

use crate::config::CaptureConfig;
use crate::error::CaptureError;

/// The element the UI renders the card into.
pub const CARD_SELECTOR: &str = ".crystal-card";
/// The wrapper the capture injects and screenshots.
pub const FRAME_SELECTOR: &str = "#export-frame";

const CARD_POLL: Duration = Duration::from_millis(250);

/// In-page mutation that turns the live page into an export frame: a
/// fixed 400x720 wrapper with a seamless two-layer backplane (flat color
/// plus gradients reproducing the ambient look without viewport-relative
/// effects), chrome hidden, card forced to fill the wrapper. The page is
/// re-navigated for every day, so the DOM is always fresh and double
/// wrapping cannot occur.
const EXPORT_FRAME_JS: &str = r##"
(() => {
    const card = document.querySelector('.crystal-card');
    if (!card) return false;

    const seamlessGradient = `
        linear-gradient(to bottom, #151921 0%, #040406 100%),
        radial-gradient(circle at 85% 30%, rgba(240, 185, 11, 0.06) 0%, transparent 60%)
    `;
    const exactBgColor = '#040406';

    const style = document.createElement('style');
    style.innerHTML = 'body { overflow: hidden !important; }';
    document.head.appendChild(style);

    const wrapper = document.createElement('div');
    wrapper.id = 'export-frame';
    wrapper.style.position = 'relative';
    wrapper.style.width = '400px';
    wrapper.style.height = '720px';
    wrapper.style.margin = '50px';

    const bgLayer = document.createElement('div');
    bgLayer.style.position = 'absolute';
    bgLayer.style.top = '0';
    bgLayer.style.left = '0';
    bgLayer.style.width = '100%';
    bgLayer.style.height = '100%';
    bgLayer.style.borderRadius = '32px';
    bgLayer.style.overflow = 'hidden';
    bgLayer.style.zIndex = '-1';
    bgLayer.style.backgroundColor = exactBgColor;
    bgLayer.style.backgroundImage = seamlessGradient;
    bgLayer.style.backgroundAttachment = 'fixed';
    bgLayer.style.backgroundPosition = 'center top';
    bgLayer.style.backgroundSize = '100vw 100vh';
    bgLayer.style.backgroundRepeat = 'no-repeat';

    card.parentNode.insertBefore(wrapper, card);
    wrapper.appendChild(bgLayer);
    wrapper.appendChild(card);

    card.style.position = 'absolute';
    card.style.top = '0';
    card.style.left = '0';
    card.style.width = '100%';
    card.style.height = '100%';
    card.style.margin = '0';

    document.body.style.background = 'transparent';
    const hub = document.querySelector('.frozen-light-hub');
    if (hub) hub.style.display = 'none';
    document.querySelectorAll('.hide-on-capture').forEach((n) => {
        n.style.display = 'none';
    });

    return true;
})()
"##;

/// A launched browser plus the single page every capture goes through.
pub struct ExportSession {
    browser: Browser,
    page: Page,
    handler: JoinHandle<()>,
}

impl ExportSession {
    /// Launch headless Chrome with the export rendering flags.
    pub async fn launch(config: &CaptureConfig) -> Result<Self, CaptureError> {
        let browser_config = BrowserConfig::builder()
            .args(vec![
                "--no-sandbox",
                "--disable-setuid-sandbox",
                "--force-color-profile=srgb",
                "--font-render-hinting=none",
            ])
            .window_size(config.viewport_width, config.viewport_height)
            .viewport(Viewport {
                width: config.viewport_width,
                height: config.viewport_height,
                device_scale_factor: Some(config.device_scale_factor),
                ..Viewport::default()
            })
            .build()
            .map_err(CaptureError::BrowserConfig)?;

        let (browser, mut events) = Browser::launch(browser_config).await?;
        let handler = tokio::spawn(async move {
            while let Some(event) = events.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let page = browser.new_page("about:blank").await?;

        // Let transparency through element screenshots (omitBackground).
        page.execute(SetDefaultBackgroundColorOverrideParams {
            color: Some(Rgba {
                r: 0,
                g: 0,
                b: 0,
                a: Some(0.0),
            }),
        })
        .await?;

        tracing::info!(
            "export session started: {}x{} @ {}x dpi",
            config.viewport_width,
            config.viewport_height,
            config.device_scale_factor
        );

        Ok(Self {
            browser,
            page,
            handler,
        })
    }

    /// Navigate the page to one day's export view.
    pub async fn goto_day(
        &self,
        config: &CaptureConfig,
        month: u32,
        day: u32,
    ) -> Result<(), CaptureError> {
        let url = config.day_url(month, day);
        let nav = async {
            self.page.goto(url.as_str()).await?;
            self.page.wait_for_navigation().await?;
            Ok::<(), CaptureError>(())
        };
        tokio::time::timeout(Duration::from_millis(config.nav_timeout_ms), nav)
            .await
            .map_err(|_| CaptureError::NavigationTimeout {
                url,
                timeout_ms: config.nav_timeout_ms,
            })?
    }

    /// Wait for the card element, then the settle heuristic.
    pub async fn wait_for_card(&self, config: &CaptureConfig) -> Result<(), CaptureError> {
        let deadline = tokio::time::Instant::now() + Duration::from_millis(config.card_wait_ms);
        loop {
            if self.page.find_element(CARD_SELECTOR).await.is_ok() {
                break;
            }
            if tokio::time::Instant::now() >= deadline {
                return Err(CaptureError::CardTimeout {
                    selector: CARD_SELECTOR.to_string(),
                    waited_ms: config.card_wait_ms,
                });
            }
            tokio::time::sleep(CARD_POLL).await;
        }
        tokio::time::sleep(Duration::from_millis(config.render_wait_ms)).await;
        Ok(())
    }

    /// Wrap the card in the export frame and screenshot exactly that
    /// frame (not the full page) as a PNG.
    pub async fn screenshot_frame(&self) -> Result<Vec<u8>, CaptureError> {
        self.page.evaluate(EXPORT_FRAME_JS).await?;

        let frame = self
            .page
            .find_element(FRAME_SELECTOR)
            .await
            .map_err(|_| CaptureError::FrameMissing {
                selector: FRAME_SELECTOR.to_string(),
            })?;

        Ok(frame.screenshot(CaptureScreenshotFormat::Png).await?)
    }

    /// Shut the browser down. Best effort; errors are logged, not raised.
    pub async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            tracing::warn!("browser close failed: {e}");
        }
        if let Err(e) = self.browser.wait().await {
            tracing::warn!("browser wait failed: {e}");
        }
        self.handler.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_script_injects_the_expected_wrapper() {
        assert!(EXPORT_FRAME_JS.contains("export-frame"));
        assert!(EXPORT_FRAME_JS.contains(CARD_SELECTOR));
        assert!(EXPORT_FRAME_JS.contains(".hide-on-capture"));
        assert!(EXPORT_FRAME_JS.contains(".frozen-light-hub"));
    }
}
