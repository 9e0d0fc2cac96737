use base64::{engine::general_purpose::STANDARD, Engine as _};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlAnchorElement;

use super::{ExportError, ExportSink};

/// Delay before the print dialog, so the new document can lay out
const PRINT_DELAY_MS: u32 = 500;

fn browser_error(err: JsValue) -> ExportError {
    ExportError::Browser(format!("{:?}", err))
}

/// Export sink backed by the browser window
#[derive(Clone, Copy, Default)]
pub struct BrowserExportSink;

impl ExportSink for BrowserExportSink {
    fn download(&self, filename: &str, mime: &str, content: &str) -> Result<(), ExportError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| ExportError::Browser("no document".to_string()))?;
        let body = document
            .body()
            .ok_or_else(|| ExportError::Browser("no body".to_string()))?;

        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(browser_error)?
            .dyn_into()
            .map_err(|_| ExportError::Browser("not an anchor".to_string()))?;
        anchor.set_href(&format!("data:{};base64,{}", mime, STANDARD.encode(content)));
        anchor.set_download(filename);

        body.append_child(&anchor).map_err(browser_error)?;
        anchor.click();
        body.remove_child(&anchor).map_err(browser_error)?;
        Ok(())
    }

    fn print_html(&self, html: &str) -> Result<(), ExportError> {
        let window = web_sys::window().ok_or_else(|| ExportError::Browser("no window".to_string()))?;
        let print_window = window
            .open_with_url_and_target("", "_blank")
            .map_err(browser_error)?
            .ok_or_else(|| ExportError::Browser("popup blocked".to_string()))?;

        let root = print_window
            .document()
            .and_then(|d| d.document_element())
            .ok_or_else(|| ExportError::Browser("print window has no document".to_string()))?;
        root.set_inner_html(html);

        let _ = gloo_timers::callback::Timeout::new(PRINT_DELAY_MS, move || {
            if let Err(e) = print_window.print() {
                log::error!("Print failed: {:?}", e);
            }
        })
        .forget();
        Ok(())
    }
}
