use crate::components::resource_screen::{ScreenState, resource_screen};
use leptos::prelude::*;
use school_admin_shared::Subject;

/// 科目管理（弹窗编辑）
#[component]
pub fn SubjectsPage() -> impl IntoView {
    resource_screen(ScreenState::<Subject>::new())
}
