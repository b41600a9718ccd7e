//! 路由服务模块 - 核心引擎
//!
//! 封装 web_sys 的 History API，所有对 window.history 的操作都集中在此。
//! 守卫规则本身在 `AppRoute::resolve` 中定义，这里只负责执行：
//! "监听 -> 守卫 -> 写入 History -> 更新信号"。

use leptos::prelude::*;
use school_admin_shared::AppRoute;
use wasm_bindgen::prelude::*;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 写入 History；`push` 为 false 时替换当前条目
fn write_history(path: &str, push: bool) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let result = if push {
        history.push_state_with_url(&JsValue::NULL, "", Some(path))
    } else {
        history.replace_state_with_url(&JsValue::NULL, "", Some(path))
    };
    if let Err(e) = result {
        log_error!("[Router] history update failed: {:?}", e);
    }
}

/// 路由器服务
///
/// 通过注入的认证信号与认证系统解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    is_authenticated: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>) -> Self {
        let requested = AppRoute::from_path(&current_path());
        let initial = requested.resolve(is_authenticated.get_untracked());
        if initial != requested {
            log_info!("[Router] {} -> {} (guard)", requested, initial);
            write_history(initial.to_path(), false);
        }
        let (current_route, set_route) = signal(initial);

        Self {
            current_route,
            set_route,
            is_authenticated,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }


    /// 被守卫拦截时替换 History，否则压入新条目
    pub fn navigate_to_route(&self, target: AppRoute) {
        let resolved = target.resolve(self.is_authenticated.get_untracked());
        if resolved != target {
            log_info!("[Router] {} -> {} (guard)", target, resolved);
        }
        if resolved != self.current_route.get_untracked() {
            write_history(resolved.to_path(), resolved == target);
        }
        self.set_route.set(resolved);
    }

    /// 浏览器后退/前进：重新执行守卫
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        let closure = Closure::<dyn Fn()>::new(move || {
            let requested = AppRoute::from_path(&current_path());
            let resolved = requested.resolve(is_authenticated.get_untracked());
            if resolved != requested {
                write_history(resolved.to_path(), false);
            }
            set_route.set(resolved);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 监听器与页面同生命周期
        closure.forget();
    }

    /// 登录/注销后自动跳转
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        Effect::new(move |_| {
            let is_auth = is_authenticated.get();
            let route = current_route.get_untracked();
            let resolved = route.resolve(is_auth);

            if resolved != route {
                log_info!(
                    "[Router] auth state changed (logged_in={}), {} -> {}",
                    is_auth,
                    route,
                    resolved
                );
                write_history(resolved.to_path(), true);
                set_route.set(resolved);
            }
        });
    }
}

fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);
    router.init_popstate_listener();
    router.setup_auth_redirect();
    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件，提供路由上下文
#[component]
pub fn Router(is_authenticated: Signal<bool>, children: Children) -> impl IntoView {
    provide_router(is_authenticated);
    children()
}

/// 路由出口：根据当前路由渲染对应视图
#[component]
pub fn RouterOutlet(matcher: fn(AppRoute) -> AnyView) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// 站内链接：拦截点击，走路由服务而不是整页刷新
#[component]
pub fn Link(
    route: AppRoute,
    #[prop(into)] class: Signal<String>,
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate_to_route(route);
    };

    view! {
        <a href=route.to_path() class=move || class.get() on:click=on_click>
            {children()}
        </a>
    }
}
