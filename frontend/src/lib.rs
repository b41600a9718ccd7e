//! 学校管理后台前端
//!
//! 采用 Context-Driven 架构，业务状态机都在 `school_admin_shared` 中：
//! - `web`: 浏览器 API 封装（fetch、LocalStorage、History 路由）
//! - `auth`: 认证状态管理
//! - `api`: 配置好的 REST 客户端
//! - `components`: UI 组件层

// =========================================================
// 条件编译日志宏
// =========================================================
#[cfg(target_arch = "wasm32")]
macro_rules! log_info {
    ($($t:tt)*) => (web_sys::console::log_1(&format!($($t)*).into()))
}
#[cfg(not(target_arch = "wasm32"))]
macro_rules! log_info {
    ($($t:tt)*) => (println!($($t)*))
}

#[cfg(target_arch = "wasm32")]
macro_rules! log_error {
    ($($t:tt)*) => (web_sys::console::error_1(&format!($($t)*).into()))
}
#[cfg(not(target_arch = "wasm32"))]
macro_rules! log_error {
    ($($t:tt)*) => (eprintln!($($t)*))
}

mod api;
mod auth;
mod components;
mod pages;
mod web;

use crate::auth::{AuthContext, init_auth};
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::toast::{ToastHost, provide_toaster};
use crate::pages::{LoginPage, RegisterPage, StudentsPage, SubjectsPage, TeachersPage, UsersPage};

use leptos::prelude::*;
use school_admin_shared::AppRoute;
use web::router::{Link, Router, RouterOutlet};

/// 路由匹配函数
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Users => view! { <UsersPage /> }.into_any(),
        AppRoute::Students => view! { <StudentsPage /> }.into_any(),
        AppRoute::Teachers => view! { <TeachersPage /> }.into_any(),
        AppRoute::Subjects => view! { <SubjectsPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex flex-col items-center justify-center py-24 gap-4">
                <h1 class="text-6xl font-bold text-error">"404"</h1>
                <p class="text-xl">"Page not found"</p>
                <Link route=AppRoute::Users class="btn btn-primary">"Back to users"</Link>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 全局通知与 API 客户端
    provide_toaster();
    api::provide_api();

    // 2. 认证上下文，从 LocalStorage 恢复会话
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);
    init_auth(&auth_ctx);

    // 3. 认证信号注入路由服务
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <div class="min-h-screen flex flex-col bg-base-200 font-sans">
                <Navbar />
                <main class="flex-1 w-full max-w-6xl mx-auto p-4 md:p-8">
                    <RouterOutlet matcher=route_matcher />
                </main>
                <Footer />
            </div>
            <ToastHost />
        </Router>
    }
}
