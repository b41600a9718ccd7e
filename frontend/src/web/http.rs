//! HTTP 传输层
//!
//! 使用 `web_sys::fetch` 实现共享层的 `HttpClient`，替代 `gloo-net`。
//! 非 2xx 状态不在这里判断，交给 `SchoolApi` 处理。

use async_trait::async_trait;
use school_admin_shared::request::{HttpClient, HttpRequest, HttpResponse};
use school_admin_shared::{AdminError, AdminResult};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

/// 浏览器 fetch 客户端
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchClient;

impl FetchClient {
    fn build_request(req: &HttpRequest) -> AdminResult<Request> {
        let headers = Headers::new()
            .map_err(|e| AdminError::network(format!("创建 Headers 失败: {:?}", e)))?;

        for (key, value) in &req.headers {
            headers
                .set(key, value)
                .map_err(|e| AdminError::network(format!("设置 Header 失败: {:?}", e)))?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());

        if let Some(body) = &req.body {
            opts.set_body(&JsValue::from_str(body));
        }

        Request::new_with_str_and_init(&req.url, &opts)
            .map_err(|e| AdminError::network(format!("请求构建失败: {:?}", e)))
    }
}

#[async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, req: HttpRequest) -> AdminResult<HttpResponse> {
        let request = Self::build_request(&req).map_err(|e| e.in_op_with("fetch", &req.url))?;

        let window = web_sys::window()
            .ok_or_else(|| AdminError::network("无法获取 window 对象").in_op("fetch"))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| AdminError::network(format!("{:?}", e)).in_op_with("fetch", &req.url))?;

        let response: Response = resp_value.dyn_into().map_err(|e| {
            AdminError::serialization(format!("Response 类型转换失败: {:?}", e)).in_op("fetch")
        })?;

        let status = response.status();
        let promise = response
            .text()
            .map_err(|e| AdminError::network(format!("{:?}", e)).in_op("fetch.text"))?;
        let body = JsFuture::from(promise)
            .await
            .map_err(|e| AdminError::network(format!("{:?}", e)).in_op("fetch.text"))?
            .as_string()
            .unwrap_or_default();

        Ok(HttpResponse { status, body })
    }
}
