use std::fmt;

use serde::{Deserialize, Serialize};

// =========================================================
// 错误状态枚举
// =========================================================

/// 错误状态枚举
///
/// 界面上所有失败都只显示一条通用提示，但内部仍保留错误语义，
/// 便于日志排查。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdminErrorStatus {
    /// 网络层失败 (fetch 被拒绝、CORS、连接中断)
    Network,
    /// 后端返回非 2xx 状态码
    Http(u16),
    /// JSON 序列化或反序列化失败
    Serialization,
    /// 表单校验失败（在发出请求之前）
    InvalidInput,
    /// 登录被拒绝
    Unauthorized,
    /// LocalStorage 不可用或写入失败
    Storage,
}

impl AdminErrorStatus {
    /// 对应的 HTTP 状态码（若有）
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AdminErrorStatus::Http(code) => Some(*code),
            AdminErrorStatus::Unauthorized => Some(401),
            _ => None,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            AdminErrorStatus::Network => "NETWORK_ERROR",
            AdminErrorStatus::Http(_) => "HTTP_ERROR",
            AdminErrorStatus::Serialization => "JSON_PARSE_ERROR",
            AdminErrorStatus::InvalidInput => "INVALID_INPUT",
            AdminErrorStatus::Unauthorized => "UNAUTHORIZED",
            AdminErrorStatus::Storage => "STORAGE_ERROR",
        }
    }
}

// =========================================================
// 错误追踪
// =========================================================

/// 记录错误发生时的操作和相关细节
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorSpan {
    /// 操作名称，如 "api.create", "session.persist"
    pub operation: String,
    /// 额外细节，如请求路径
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorSpan {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            detail: None,
        }
    }

    pub fn with_detail(operation: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            detail: Some(detail.into()),
        }
    }
}

// =========================================================
// 核心错误类型
// =========================================================

/// 管理后台客户端错误
///
/// - status: 错误语义
/// - message: 错误消息
/// - spans: 结构化的调用追踪
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminError {
    pub status: AdminErrorStatus,
    pub message: String,
    spans: Vec<ErrorSpan>,
}

impl AdminError {
    pub fn new(status: AdminErrorStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            spans: Vec::new(),
        }
    }

    // --- Convenience constructors ---

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(AdminErrorStatus::Network, message)
    }

    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::new(AdminErrorStatus::Http(status), message)
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(AdminErrorStatus::Serialization, message)
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(AdminErrorStatus::InvalidInput, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(AdminErrorStatus::Unauthorized, message)
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(AdminErrorStatus::Storage, message)
    }

    // --- Context builders ---

    /// 添加操作追踪（无额外细节）
    pub fn in_op(mut self, operation: impl Into<String>) -> Self {
        self.spans.push(ErrorSpan::new(operation));
        self
    }

    /// 添加操作追踪（带额外细节）
    pub fn in_op_with(mut self, operation: impl Into<String>, detail: impl Into<String>) -> Self {
        self.spans.push(ErrorSpan::with_detail(operation, detail));
        self
    }

    // --- Accessors ---

    pub fn error_code(&self) -> &'static str {
        self.status.error_code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn spans(&self) -> &[ErrorSpan] {
        &self.spans
    }

    /// 是否为表单校验错误（这类错误直接展示给用户）
    pub fn is_invalid_input(&self) -> bool {
        self.status == AdminErrorStatus::InvalidInput
    }

    /// 登录失败时的提示：服务端应答但未返回成功标记为 "Login failed"，
    /// 其余（非 2xx、网络、解析、存储）均为 "Login error"
    pub fn login_failure_message(&self) -> &'static str {
        match self.status {
            AdminErrorStatus::Unauthorized => "Login failed",
            _ => "Login error",
        }
    }
}

impl fmt::Display for AdminError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.error_code(), self.message)?;

        if !self.spans.is_empty() {
            write!(f, " | trace: ")?;
            for (i, span) in self.spans.iter().enumerate() {
                if i > 0 {
                    write!(f, " -> ")?;
                }
                write!(f, "{}", span.operation)?;
                if let Some(detail) = &span.detail {
                    write!(f, "({})", detail)?;
                }
            }
        }
        Ok(())
    }
}

impl std::error::Error for AdminError {}

impl From<serde_json::Error> for AdminError {
    fn from(e: serde_json::Error) -> Self {
        AdminError::serialization(e.to_string())
    }
}

pub type AdminResult<T> = std::result::Result<T, AdminError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_trace() {
        let err = AdminError::http(500, "Internal Server Error")
            .in_op("api.send")
            .in_op_with("api.delete", "/students/3");

        assert_eq!(
            err.to_string(),
            "[HTTP_ERROR] Internal Server Error | trace: api.send -> api.delete(/students/3)"
        );
        assert_eq!(err.status.status_code(), Some(500));
    }

    #[test]
    fn test_display_without_trace() {
        let err = AdminError::invalid_input("Please fill in all fields");
        assert_eq!(err.to_string(), "[INVALID_INPUT] Please fill in all fields");
        assert!(err.is_invalid_input());
        assert!(err.spans().is_empty());
    }

    #[test]
    fn test_login_failure_message() {
        assert_eq!(
            AdminError::unauthorized("Invalid credentials").login_failure_message(),
            "Login failed"
        );
        assert_eq!(AdminError::http(401, "Unauthorized").login_failure_message(), "Login error");
        assert_eq!(AdminError::http(500, "boom").login_failure_message(), "Login error");
        assert_eq!(AdminError::network("offline").login_failure_message(), "Login error");
        assert_eq!(AdminError::storage("full").login_failure_message(), "Login error");
    }

    #[test]
    fn test_from_serde_error() {
        let parse: Result<u32, _> = serde_json::from_str("not json");
        let err: AdminError = parse.unwrap_err().into();
        assert_eq!(err.status, AdminErrorStatus::Serialization);
    }
}
