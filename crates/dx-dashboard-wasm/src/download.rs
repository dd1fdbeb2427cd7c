//! CSV file download through a transient anchor element.

use dx_dashboard_core::config::CSV_MEDIA_TYPE;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Offer `content` to the user as a file named `filename`.
///
/// Builds a `text/csv` Blob, points a temporary `<a download>` at its object
/// URL, clicks it and cleans up again.
pub fn trigger_download(content: &str, filename: &str) -> Result<(), JsValue> {
    let parts = js_sys::Array::of1(&JsValue::from_str(content));
    let options = BlobPropertyBag::new();
    options.set_type(CSV_MEDIA_TYPE);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;

    let url = Url::create_object_url_with_blob(&blob)?;
    let result = click_link(&url, filename);
    // Release the blob even if the click failed
    Url::revoke_object_url(&url)?;
    result
}

fn click_link(url: &str, filename: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .ok_or("No window")?
        .document()
        .ok_or("No document")?;
    let body = document.body().ok_or("No document body")?;

    let anchor = document
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()?;
    anchor.set_href(url);
    anchor.set_download(filename);

    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Ok(())
}
