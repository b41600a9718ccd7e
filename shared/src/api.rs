//! Typed client for the school records REST API.

use crate::error::{AdminError, AdminResult};
use crate::models::{LoginRequest, RegisterRequest, Teacher};
use crate::protocol::{
    ApiRequest, CreateRecord, DeleteRecord, ListRecords, TeacherQuery, UpdateRecord,
};
use crate::request::{HttpClient, HttpRequest};
use crate::resource::{MISSING_FIELDS_MESSAGE, RecordId, Resource};

#[derive(Clone, Debug, PartialEq)]
pub struct SchoolApi<C> {
    base_url: String,
    client: C,
}

impl<C: HttpClient> SchoolApi<C> {
    pub fn new(base_url: impl Into<String>, client: C) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 发送强类型请求并解析响应
    ///
    /// 非 2xx 状态码统一转换为 `AdminErrorStatus::Http`。
    pub async fn send<T: ApiRequest>(&self, req: &T) -> AdminResult<T::Response> {
        let path = req.path();
        let mut http = HttpRequest::new(&self.url(&path), T::METHOD);

        if let Some(body) = req.body() {
            let json = serde_json::to_string(body)
                .map_err(|e| AdminError::from(e).in_op_with(T::OP, path.clone()))?;
            http = http
                .with_header("Content-Type", "application/json")
                .with_body(json);
        }

        let resp = self
            .client
            .send(http)
            .await
            .map_err(|e| e.in_op_with(T::OP, path.clone()))?;

        if !resp.ok() {
            return Err(AdminError::http(
                resp.status,
                format!("{} {} failed with status {}", T::METHOD.as_str(), path, resp.status),
            )
            .in_op_with(T::OP, path));
        }

        T::decode(&resp.body).map_err(|e| e.in_op_with(T::OP, path))
    }

    pub async fn list<R: Resource>(&self) -> AdminResult<Vec<R>> {
        self.send(&ListRecords::<R>::new()).await
    }

    pub async fn create<R: Resource>(&self, draft: R::Draft) -> AdminResult<R> {
        self.send(&CreateRecord::<R> { draft }).await
    }

    pub async fn update<R: Resource>(&self, record: R) -> AdminResult<R> {
        self.send(&UpdateRecord { record }).await
    }

    pub async fn delete<R: Resource>(&self, id: RecordId) -> AdminResult<()> {
        self.send(&DeleteRecord::<R>::new(id)).await
    }

    pub async fn search_teachers(&self, query: &TeacherQuery) -> AdminResult<Vec<Teacher>> {
        self.send(query).await
    }

    /// 登录：仅当响应体 `message == "success"` 时成功
    pub async fn login(&self, email: &str, password: &str) -> AdminResult<()> {
        let req = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let resp = self.send(&req).await?;
        if !resp.is_success() {
            return Err(AdminError::unauthorized(format!(
                "login rejected: {:?}",
                resp.message
            ))
            .in_op("api.login"));
        }
        Ok(())
    }

    /// 注册：客户端只做非空校验
    pub async fn register(&self, req: &RegisterRequest) -> AdminResult<()> {
        if !req.is_complete() {
            return Err(AdminError::invalid_input(MISSING_FIELDS_MESSAGE).in_op("api.register"));
        }
        self.send(req).await
    }
}
