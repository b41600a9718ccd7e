use crate::auth::{logout, use_auth};
use crate::components::icons::{GraduationCap, LogOut};
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use school_admin_shared::AppRoute;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let is_authenticated = move || auth.state.get().is_authenticated;
    let email = move || auth.state.get().email.unwrap_or_default();

    let link_class = move |route: AppRoute| {
        Signal::derive(move || {
            if router.current_route().get() == route {
                "btn btn-ghost btn-sm btn-active".to_string()
            } else {
                "btn btn-ghost btn-sm".to_string()
            }
        })
    };

    // 跳转到登录页由路由服务监听认证状态完成
    let on_logout = move |_| logout(&auth);

    view! {
        <div class="navbar bg-base-100 shadow-xl px-4">
            <div class="flex-1 gap-2">
                <GraduationCap attr:class="text-primary h-6 w-6" />
                <span class="text-xl font-bold">"School Admin"</span>
                <ul class="menu menu-horizontal px-1 gap-1 hidden md:flex">
                    {AppRoute::RESOURCES
                        .into_iter()
                        .map(|route| {
                            view! {
                                <li>
                                    <Link route=route class=link_class(route)>
                                        {route.title()}
                                    </Link>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
            <div class="flex-none gap-2">
                <Show
                    when=is_authenticated
                    fallback=|| {
                        view! {
                            <Link route=AppRoute::Login class="btn btn-ghost btn-sm">
                                "Login"
                            </Link>
                            <Link route=AppRoute::Register class="btn btn-primary btn-sm">
                                "Register"
                            </Link>
                        }
                    }
                >
                    <span class="badge badge-neutral hidden md:inline-flex">{email}</span>
                    <button on:click=on_logout class="btn btn-outline btn-error btn-sm gap-2">
                        <LogOut attr:class="h-4 w-4" />
                        "Logout"
                    </button>
                </Show>
            </div>
        </div>
    }
}
