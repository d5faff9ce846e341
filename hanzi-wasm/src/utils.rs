use hanzi_core::api::check_status;
use hanzi_core::{ApiError, ViewRect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, Element, Headers, Request, RequestInit, Response, Window};

/// Log a message to the browser console.
pub fn log(s: &str) {
    web_sys::console::log_1(&JsValue::from_str(s));
}

pub fn warn(s: &str) {
    web_sys::console::warn_1(&JsValue::from_str(s));
}

/// Render a `JsValue` error for logs and [`ApiError`] payloads.
pub fn js_error(e: &JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

/// `window.__BASE_URL`, set by the host page when the app is not served
/// from the site root.
pub fn base_url_hint(window: &Window) -> Option<String> {
    js_sys::Reflect::get(window, &JsValue::from_str("__BASE_URL"))
        .ok()?
        .as_string()
}

/// Current time as an ISO 8601 string.
pub fn now_iso() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}

pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

pub fn element_rect(el: &Element) -> ViewRect {
    let rect = el.get_bounding_client_rect();
    ViewRect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

async fn send(window: &Window, request: &Request) -> Result<Response, ApiError> {
    let resp_value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(|e| ApiError::Network(js_error(&e)))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| ApiError::Network(js_error(&e)))?;
    check_status(resp.status())?;
    Ok(resp)
}

fn get_request(url: &str) -> Result<Request, ApiError> {
    Request::new_with_str(url).map_err(|e| ApiError::Network(js_error(&e)))
}

pub async fn fetch_text(window: &Window, url: &str) -> Result<String, ApiError> {
    let resp = send(window, &get_request(url)?).await?;
    let promise = resp.text().map_err(|e| ApiError::Decode(js_error(&e)))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| ApiError::Decode(js_error(&e)))?
        .as_string()
        .ok_or_else(|| ApiError::Decode("body is not text".to_string()))
}

pub async fn fetch_blob(window: &Window, url: &str) -> Result<Blob, ApiError> {
    let resp = send(window, &get_request(url)?).await?;
    let promise = resp.blob().map_err(|e| ApiError::Decode(js_error(&e)))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| ApiError::Decode(js_error(&e)))?
        .dyn_into::<Blob>()
        .map_err(|e| ApiError::Decode(js_error(&e)))
}

pub async fn post_json(window: &Window, url: &str, body: &str) -> Result<(), ApiError> {
    let headers = Headers::new().map_err(|e| ApiError::Network(js_error(&e)))?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| ApiError::Network(js_error(&e)))?;
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(body));
    let request = Request::new_with_str_and_init(url, &init)
        .map_err(|e| ApiError::Network(js_error(&e)))?;
    send(window, &request).await?;
    Ok(())
}
