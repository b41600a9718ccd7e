//! 全局通知
//!
//! 每个操作结束后弹出一条成功/失败提示，3 秒后自动消失。

use leptos::prelude::*;
use std::time::Duration;

const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn alert_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "alert alert-success shadow-lg",
            ToastKind::Error => "alert alert-error shadow-lg",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    id: u64,
    kind: ToastKind,
    message: String,
}

/// 通知队列（Copy，可随意传入闭包）
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toaster {
    fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|list| list.push(Toast { id, kind, message }));

        let toasts = self.toasts;
        set_timeout(
            move || toasts.update(|list| list.retain(|t| t.id != id)),
            TOAST_DURATION,
        );
    }
}

pub fn provide_toaster() -> Toaster {
    let toaster = Toaster::new();
    provide_context(toaster);
    toaster
}

pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().expect("Toaster should be provided")
}

/// 通知显示区域，挂在应用根部
#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="toast toast-top toast-end z-50">
            <For
                each=move || toaster.toasts.get()
                key=|toast| toast.id
                children=|toast| {
                    view! {
                        <div class=toast.kind.alert_class()>
                            <span>{toast.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
