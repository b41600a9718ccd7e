//! 新增/编辑弹窗
//!
//! 新增时表单为空；弹窗编辑时把选中记录复制进独立的表单状态，
//! 保存时再写回列表的编辑会话。

use leptos::prelude::*;
use leptos::task::spawn_local;
use school_admin_shared::{FieldSpec, FormValues, RecordId, Resource};

use crate::components::form_state::{FieldInputs, FormState};
use crate::components::resource_screen::ScreenState;

#[derive(Clone, Copy)]
pub struct DialogState {
    open: RwSignal<bool>,
    /// `None` 表示新增
    editing: RwSignal<Option<RecordId>>,
    form: FormState,
}

impl DialogState {
    pub fn new(fields: &'static [FieldSpec]) -> Self {
        Self {
            open: RwSignal::new(false),
            editing: RwSignal::new(None),
            form: FormState::new(fields),
        }
    }

    pub fn open_create(&self) {
        self.editing.set(None);
        self.form.reset();
        self.open.set(true);
    }

    pub fn open_edit(&self, id: RecordId, values: FormValues) {
        self.editing.set(Some(id));
        self.form.load(values);
        self.open.set(true);
    }

    pub fn close(&self) {
        self.open.set(false);
    }
}

pub fn resource_dialog<R: Resource>(state: ScreenState<R>, dialog: DialogState) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    Effect::new(move |_| {
        if let Some(el) = dialog_ref.get() {
            let open = dialog.open.get();
            if open && !el.open() {
                let _ = el.show_modal();
            } else if !open && el.open() {
                el.close();
            }
        }
    });

    // ESC、背景点击和取消按钮都会走到这里；未保存的编辑会话被丢弃
    let on_close = move |_| {
        dialog.open.set(false);
        if dialog.editing.get_untracked().is_some() {
            state.list.update(|list| list.cancel_edit());
            dialog.editing.set(None);
        }
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let values = dialog.form.snapshot();
        let editing = dialog.editing.get_untracked();

        spawn_local(async move {
            let saved = match editing {
                None => state.create(values).await,
                Some(_) => {
                    state.list.update(|list| {
                        for field in R::FIELDS {
                            list.set_edit_field(field.key, values.get(field.key));
                        }
                    });
                    state.save_edit().await
                }
            };
            if saved {
                dialog.close();
            }
        });
    };

    let title = move || {
        if dialog.editing.get().is_some() {
            format!("Edit {}", R::SINGULAR)
        } else {
            format!("Add {}", R::SINGULAR)
        }
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=on_close>
            <div class="modal-box">
                <h3 class="font-bold text-lg">{title}</h3>

                <form on:submit=on_submit class="space-y-4 pt-4">
                    <FieldInputs form=dialog.form />

                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" on:click=move |_| dialog.close()>
                            "Cancel"
                        </button>
                        <button type="submit" disabled=move || state.busy.get() class="btn btn-primary">
                            {move || {
                                if state.busy.get() {
                                    view! { <span class="loading loading-spinner"></span> "Saving..." }
                                        .into_any()
                                } else {
                                    "Save".into_any()
                                }
                            }}
                        </button>
                    </div>
                </form>
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}
