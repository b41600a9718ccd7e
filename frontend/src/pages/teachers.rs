//! 教师管理（弹窗编辑）以及按姓名/年龄/薪资搜索

use crate::components::icons::Search;
use crate::components::resource_screen::{ScreenState, resource_screen};
use leptos::prelude::*;
use school_admin_shared::Teacher;
use school_admin_shared::protocol::TeacherQuery;

#[component]
fn TeacherSearchBar(
    #[prop(into)] on_search: Callback<TeacherQuery>,
    #[prop(into)] on_clear: Callback<()>,
) -> impl IntoView {
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let age = RwSignal::new(String::new());
    let salary = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        on_search.run(TeacherQuery {
            first_name: first_name.get(),
            last_name: last_name.get(),
            age: age.get(),
            salary: salary.get(),
        });
    };

    let clear = move |_| {
        for field in [first_name, last_name, age, salary] {
            field.set(String::new());
        }
        on_clear.run(());
    };

    let filter = move |placeholder: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <input
                type=kind
                placeholder=placeholder
                on:input=move |ev| value.set(event_target_value(&ev))
                prop:value=value
                class="input input-bordered input-sm w-full"
            />
        }
    };

    view! {
        <form on:submit=on_submit class="card bg-base-100 shadow p-4 mb-6">
            <div class="grid grid-cols-2 md:grid-cols-5 gap-2 items-center">
                {filter("First name", "text", first_name)}
                {filter("Last name", "text", last_name)}
                {filter("Age", "number", age)}
                {filter("Salary", "number", salary)}
                <div class="flex gap-2">
                    <button type="submit" class="btn btn-primary btn-sm gap-1">
                        <Search attr:class="h-4 w-4" />
                        "Search"
                    </button>
                    <button type="button" class="btn btn-ghost btn-sm" on:click=clear>
                        "Clear"
                    </button>
                </div>
            </div>
        </form>
    }
}

#[component]
pub fn TeachersPage() -> impl IntoView {
    let state = ScreenState::<Teacher>::new();

    // 空查询等同于读取全部
    let on_search = move |query: TeacherQuery| {
        if query.is_empty() {
            state.load();
        } else {
            state.fetch(move |api| async move { api.search_teachers(&query).await });
        }
    };
    let on_clear = move |_: ()| state.load();

    view! {
        <TeacherSearchBar on_search=on_search on_clear=on_clear />
        {resource_screen(state)}
    }
}
