use std::collections::HashMap;

#[cfg(test)]
use std::cell::RefCell;

use crate::error::AdminResult;
use crate::protocol::HttpMethod;

// =========================================================
// 核心抽象层 (HTTP Interface Abstraction)
// =========================================================

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(url: &str, method: HttpMethod) -> Self {
        Self {
            url: url.to_string(),
            method,
            headers: HashMap::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// 2xx
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// 传输层抽象
///
/// 浏览器中由 `fetch` 实现；测试中由 `MockHttpClient` 实现。
/// 浏览器 future 不是 `Send`，因此使用 `?Send`。
#[async_trait::async_trait(?Send)]
pub trait HttpClient {
    /// 只在传输失败时返回 Err；非 2xx 状态码照常返回 Ok
    async fn send(&self, req: HttpRequest) -> AdminResult<HttpResponse>;
}

// =========================================================
// 测试工具: MockHttpClient
// =========================================================

#[cfg(test)]
pub struct MockHttpClient {
    // (Method URL) -> (Status, Response Body)
    responses: RefCell<HashMap<String, (u16, String)>>,
    // 记录发出的请求
    pub requests: RefCell<Vec<HttpRequest>>,
    offline: RefCell<bool>,
}

#[cfg(test)]
impl MockHttpClient {
    pub fn new() -> Self {
        Self {
            responses: RefCell::new(HashMap::new()),
            requests: RefCell::new(Vec::new()),
            offline: RefCell::new(false),
        }
    }

    fn route_key(method: HttpMethod, url: &str) -> String {
        format!("{} {}", method.as_str(), url)
    }

    pub fn mock_response(&self, method: HttpMethod, url: &str, status: u16, body: serde_json::Value) {
        self.mock_raw(method, url, status, &body.to_string());
    }

    pub fn mock_raw(&self, method: HttpMethod, url: &str, status: u16, body: &str) {
        self.responses
            .borrow_mut()
            .insert(Self::route_key(method, url), (status, body.to_string()));
    }

    /// 模拟网络中断：之后所有请求都返回传输错误
    pub fn go_offline(&self) {
        *self.offline.borrow_mut() = true;
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.borrow().last().cloned()
    }
}

#[cfg(test)]
#[async_trait::async_trait(?Send)]
impl HttpClient for MockHttpClient {
    async fn send(&self, req: HttpRequest) -> AdminResult<HttpResponse> {
        self.requests.borrow_mut().push(req.clone());

        if *self.offline.borrow() {
            return Err(crate::error::AdminError::network("Failed to fetch"));
        }

        let responses = self.responses.borrow();
        if let Some((status, body)) = responses.get(&Self::route_key(req.method, &req.url)) {
            Ok(HttpResponse {
                status: *status,
                body: body.clone(),
            })
        } else {
            Ok(HttpResponse {
                status: 404,
                body: "404 page not found".to_string(),
            })
        }
    }
}
