//! 认证模块
//!
//! 管理登录状态，与路由系统解耦：路由服务只读取注入的认证信号，
//! 登录/注销后的跳转由路由服务监听信号完成。

use crate::api::AdminApi;
use crate::web::LocalStorage;
use leptos::prelude::*;
use school_admin_shared::AdminResult;
use school_admin_shared::session::Session;

/// 认证状态
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub is_authenticated: bool,
    /// 当前登录用户的邮箱（导航栏显示）
    pub email: Option<String>,
}

impl From<Session> for AuthState {
    fn from(session: Session) -> Self {
        Self {
            is_authenticated: session.logged_in,
            email: session.email,
        }
    }
}

/// 认证上下文
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: ReadSignal<AuthState>,
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState::default());
        Self { state, set_state }
    }

    /// 认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated)
    }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 从 LocalStorage 恢复会话
pub fn init_auth(ctx: &AuthContext) {
    let session = Session::load(&LocalStorage);
    if session.logged_in {
        log_info!("[Auth] restored session for {:?}", session.email);
    }
    ctx.set_state.set(session.into());
}

/// 登录并持久化会话
///
/// 服务端返回 `message == "success"` 才算成功，否则为 `Unauthorized`。
pub async fn login(ctx: &AuthContext, api: &AdminApi, email: String, password: String) -> AdminResult<()> {
    api.login(&email, &password).await?;
    let session = Session::persist_login(&LocalStorage, &email)?;
    log_info!("[Auth] logged in as {}", email);
    ctx.set_state.set(session.into());
    Ok(())
}

/// 注销：清除 LocalStorage 中的会话键
pub fn logout(ctx: &AuthContext) {
    let session = Session::clear(&LocalStorage);
    log_info!("[Auth] logged out");
    ctx.set_state.set(session.into());
}
