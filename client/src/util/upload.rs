//! Bridges the browser file picker to [`UploadFile`].

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use drive::request::UploadFile;

/// Build an upload from picker metadata. Browsers report an unknown MIME type
/// as the empty string.
pub fn upload_from_parts(name: String, mime: String, bytes: Vec<u8>) -> UploadFile {
    let file = UploadFile::new(name, bytes);
    if mime.trim().is_empty() { file } else { file.with_content_type(mime) }
}

/// Read a picked file fully into memory.
///
/// # Errors
///
/// Returns the JS error text if the browser fails to read the file.
#[cfg(feature = "csr")]
pub async fn read_file(file: web_sys::File) -> Result<UploadFile, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{e:?}"))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(upload_from_parts(file.name(), file.type_(), bytes))
}
