//! `gloo-net` transport for the browser.
//!
//! Client-side (csr): real `fetch` calls via `gloo-net`.
//! Native builds: every send fails with [`ApiError::Transport`] since there
//! is no `fetch` outside the browser.
//!
//! Multipart bodies are rebuilt as a `FormData`, which lets the browser pick
//! the boundary and the multipart content type.

#![allow(clippy::unused_async)]

use async_trait::async_trait;
use drive::error::ApiError;
use drive::request::ApiRequest;
use drive::transport::{RawResponse, Transport};

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            send_fetch(request).await
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Transport(format!(
                "{} {}: fetch is only available in the browser",
                request.method.as_str(),
                request.url
            )))
        }
    }
}

#[cfg(feature = "csr")]
async fn send_fetch(request: ApiRequest) -> Result<RawResponse, ApiError> {
    use drive::request::{Method, RequestBody};
    use gloo_net::http::{Method as HttpMethod, RequestBuilder};

    let method = match request.method {
        Method::Get => HttpMethod::GET,
        Method::Post => HttpMethod::POST,
        Method::Put => HttpMethod::PUT,
        Method::Delete => HttpMethod::DELETE,
    };
    let mut builder = RequestBuilder::new(&request.url).method(method);
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }
    let built = match request.body {
        RequestBody::Empty => builder.build(),
        RequestBody::Json(value) => builder.body(value.to_string()),
        RequestBody::Multipart { field, file } => builder.body(form_data(&field, &file)?),
    }
    .map_err(|e| ApiError::Transport(e.to_string()))?;

    let resp = built
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    Ok(RawResponse { status, body })
}

#[cfg(feature = "csr")]
fn form_data(field: &str, file: &drive::request::UploadFile) -> Result<web_sys::FormData, ApiError> {
    let js_err = |e: wasm_bindgen::JsValue| ApiError::Transport(format!("{e:?}"));

    let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = web_sys::BlobPropertyBag::new();
    if let Some(content_type) = &file.content_type {
        options.set_type(content_type);
    }
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)?;
    let form = web_sys::FormData::new().map_err(js_err)?;
    form.append_with_blob_and_filename(field, &blob, &file.file_name)
        .map_err(js_err)?;
    Ok(form)
}
