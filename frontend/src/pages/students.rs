use crate::components::resource_screen::{ScreenState, resource_screen};
use leptos::prelude::*;
use school_admin_shared::Student;

/// 学生管理（行内编辑）
#[component]
pub fn StudentsPage() -> impl IntoView {
    resource_screen(ScreenState::<Student>::new())
}
