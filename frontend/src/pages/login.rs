use crate::api::use_api;
use crate::auth::{login, use_auth};
use crate::components::icons::{Eye, EyeOff, GraduationCap};
use crate::components::toast::use_toaster;
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;
use school_admin_shared::resource::MISSING_FIELDS_MESSAGE;
use school_admin_shared::AppRoute;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let api = use_api();
    let toaster = use_toaster();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (is_submitting, set_is_submitting) = signal(false);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let (email, password) = (email.get(), password.get());
        if email.trim().is_empty() || password.is_empty() {
            toaster.error(MISSING_FIELDS_MESSAGE);
            return;
        }

        set_is_submitting.set(true);
        let api = api.clone();
        spawn_local(async move {
            // 成功后由路由服务监听认证状态跳转到用户列表
            match login(&auth, &api, email, password).await {
                Ok(()) => toaster.success("Login successful"),
                Err(e) => {
                    log_error!("[Login] {}", e);
                    toaster.error(e.login_failure_message());
                }
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero py-12">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <GraduationCap attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"Sign in"</h1>
                        <p class="text-base-content/70">"Log in to manage school records"</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="admin@school.test"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <div class="join w-full">
                                <input
                                    id="password"
                                    type=move || if show_password.get() { "text" } else { "password" }
                                    placeholder="••••••••"
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                    prop:value=password
                                    class="input input-bordered join-item w-full"
                                />
                                <button
                                    type="button"
                                    class="btn join-item"
                                    title="Show or hide password"
                                    on:click=move |_| set_show_password.update(|v| *v = !*v)
                                >
                                    {move || {
                                        if show_password.get() {
                                            view! { <EyeOff attr:class="h-4 w-4" /> }.into_any()
                                        } else {
                                            view! { <Eye attr:class="h-4 w-4" /> }.into_any()
                                        }
                                    }}
                                </button>
                            </div>
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || {
                                    if is_submitting.get() {
                                        view! { <span class="loading loading-spinner"></span> "Signing in..." }
                                            .into_any()
                                    } else {
                                        "Login".into_any()
                                    }
                                }}
                            </button>
                        </div>
                        <p class="text-sm text-center text-base-content/70">
                            "No account yet? "
                            <Link route=AppRoute::Register class="link link-primary">"Register"</Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
