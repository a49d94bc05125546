// Thin wrappers over the browser APIs the components need.

use wasm_bindgen_futures::JsFuture;
use web_sys::KeyboardEvent;
use yew::NodeRef;

use crate::error::BrowserError;

/// Blocking `alert()`; silently skipped when there is no window.
pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        if let Err(err) = win.alert_with_message(message) {
            log::warn!("alert failed: {:?}", err);
        }
    }
}

pub async fn copy_to_clipboard(text: &str) -> Result<(), BrowserError> {
    let win = web_sys::window().ok_or(BrowserError::NoWindow)?;
    let promise = win.navigator().clipboard().write_text(text);
    JsFuture::from(promise).await?;
    Ok(())
}

/// Viewport coordinates of the centre of the referenced element.
pub fn element_center(node: &NodeRef) -> Option<(f64, f64)> {
    let el = node.cast::<web_sys::Element>()?;
    let rect = el.get_bounding_client_rect();
    Some((rect.left() + rect.width() / 2.0, rect.top() + rect.height() / 2.0))
}

pub fn is_space(e: &KeyboardEvent) -> bool {
    let key = e.key();
    e.code() == "Space" || key == " " || key == "Spacebar"
}
