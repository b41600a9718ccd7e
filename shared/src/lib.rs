//! School admin console: shared domain layer.
//!
//! Everything here is plain Rust with no browser dependency, so the state
//! machines behind the screens are tested natively:
//! - `models` / `resource`: records and the generic `Resource` description
//! - `protocol` / `request` / `api`: typed REST client over an `HttpClient`
//! - `store` / `pagination`: per-screen list state
//! - `route` / `session` / `config`: shell-level state

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod pagination;
pub mod protocol;
pub mod request;
pub mod resource;
pub mod route;
pub mod serde_helper;
pub mod session;
pub mod store;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 每页显示的记录数
pub const PAGE_SIZE: usize = 5;
/// 登录响应中表示成功的 `message`
pub const LOGIN_SUCCESS_MESSAGE: &str = "success";

pub use api::SchoolApi;
pub use error::{AdminError, AdminErrorStatus, AdminResult};
pub use models::{
    LoginRequest, LoginResponse, NewStudent, NewSubject, NewTeacher, NewUser, RegisterRequest,
    Student, Subject, Teacher, User,
};
pub use resource::{EditMode, FieldKind, FieldSpec, FormValues, RecordId, Resource};
pub use route::AppRoute;
pub use store::{DeleteStep, ResourceList};
