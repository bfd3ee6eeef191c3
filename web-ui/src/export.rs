// Export flow: fetch image bytes, pack the archive, trigger the download

use lilipad_core::{pack_collection, Item};
use wasm_bindgen::JsCast;

use crate::errors::DownloadError;
use crate::messages::DOWNLOAD_FAILED_ALERT;

/// Fetch every item's image from its object URL and pack the archive
///
/// Images are fetched one at a time; item order is preserved by the
/// packer regardless of input order
pub async fn build_archive(items: &[Item]) -> Result<Vec<u8>, DownloadError> {
    let mut entries = Vec::with_capacity(items.len());

    for item in items {
        let response = gloo_net::http::Request::get(&item.image)
            .send()
            .await
            .map_err(|err| DownloadError::FetchError(err.to_string()))?;
        let bytes = response
            .binary()
            .await
            .map_err(|err| DownloadError::FetchError(err.to_string()))?;
        entries.push((item.clone(), bytes));
    }

    pack_collection(&entries).map_err(DownloadError::PackError)
}

/// Hand the archive bytes to the browser as a file download
pub fn trigger_download(bytes: &[u8], filename: &str) -> Result<(), DownloadError> {
    let blob_parts = js_sys::Array::new();
    let uint8_array = js_sys::Uint8Array::from(bytes);
    blob_parts.push(&uint8_array);

    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/zip");

    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&blob_parts, &options)
        .map_err(|_| DownloadError::BrowserError("blob creation failed".to_string()))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| DownloadError::BrowserError("object URL creation failed".to_string()))?;

    let window = web_sys::window()
        .ok_or_else(|| DownloadError::BrowserError("no window".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| DownloadError::BrowserError("no document".to_string()))?;
    let anchor = document
        .create_element("a")
        .map_err(|_| DownloadError::BrowserError("anchor creation failed".to_string()))?;
    let anchor = anchor
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| DownloadError::BrowserError("anchor cast failed".to_string()))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    web_sys::Url::revoke_object_url(&url)
        .map_err(|_| DownloadError::BrowserError("object URL revoke failed".to_string()))?;

    Ok(())
}

/// Show the generic failure alert for any export error
pub fn alert_download_failed() {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(DOWNLOAD_FAILED_ALERT);
    }
}
