use crate::api::use_api;
use crate::components::icons::GraduationCap;
use crate::components::toast::use_toaster;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use leptos::task::spawn_local;
use school_admin_shared::{AppRoute, RegisterRequest};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = use_api();
    let toaster = use_toaster();
    let router = use_router();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (is_submitting, set_is_submitting) = signal(false);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let req = RegisterRequest {
            name: name.get(),
            email: email.get(),
            password: password.get(),
        };

        set_is_submitting.set(true);
        let api = api.clone();
        spawn_local(async move {
            match api.register(&req).await {
                Ok(()) => {
                    toaster.success("Registration successful");
                    router.navigate_to_route(AppRoute::Login);
                }
                Err(e) if e.is_invalid_input() => toaster.error(e.message()),
                Err(e) => {
                    log_error!("[Register] {}", e);
                    toaster.error("Registration failed. Please try again.");
                }
            }
            set_is_submitting.set(false);
        });
    };

    let input = move |id: &'static str, label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <div class="form-control">
                <label class="label" for=id>
                    <span class="label-text">{label}</span>
                </label>
                <input
                    id=id
                    type=kind
                    on:input=move |ev| value.set(event_target_value(&ev))
                    prop:value=value
                    class="input input-bordered"
                />
            </div>
        }
    };

    view! {
        <div class="hero py-12">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="flex flex-col items-center gap-2 mb-4">
                    <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                        <GraduationCap attr:class="h-8 w-8" />
                    </div>
                    <h1 class="text-3xl font-bold">"Create an account"</h1>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        {input("name", "Name", "text", name)}
                        {input("email", "Email", "email", email)}
                        {input("password", "Password", "password", password)}
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || {
                                    if is_submitting.get() {
                                        view! { <span class="loading loading-spinner"></span> "Registering..." }
                                            .into_any()
                                    } else {
                                        "Register".into_any()
                                    }
                                }}
                            </button>
                        </div>
                        <p class="text-sm text-center text-base-content/70">
                            "Already registered? "
                            <Link route=AppRoute::Login class="link link-primary">"Login"</Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
