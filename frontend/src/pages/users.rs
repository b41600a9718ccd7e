use crate::components::resource_screen::{ScreenState, resource_screen};
use leptos::prelude::*;
use school_admin_shared::User;

/// 用户管理（行内编辑）
#[component]
pub fn UsersPage() -> impl IntoView {
    resource_screen(ScreenState::<User>::new())
}
