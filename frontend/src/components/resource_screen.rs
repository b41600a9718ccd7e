//! 通用 CRUD 页面
//!
//! 四个资源页面共用同一套表格：分页、新增、行内或弹窗编辑、两次点击删除。
//! 本地状态全部由 `ResourceList` 管理，只在服务端确认后才变更。

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use school_admin_shared::{
    AdminError, AdminResult, DeleteStep, EditMode, FormValues, RecordId, Resource, ResourceList,
};

use crate::api::{AdminApi, use_api};
use crate::components::icons::{Pencil, Plus, RefreshCw, Trash2};
use crate::components::pagination::PageControls;
use crate::components::resource_dialog::{DialogState, resource_dialog};
use crate::components::toast::{Toaster, use_toaster};

/// 单个资源页面的响应式状态
pub struct ScreenState<R: Resource> {
    pub list: RwSignal<ResourceList<R>>,
    /// 有写操作在途时禁用提交按钮，防止重复提交
    pub busy: RwSignal<bool>,
    pub loading: RwSignal<bool>,
    api: StoredValue<AdminApi>,
    toaster: Toaster,
}

impl<R: Resource> Clone for ScreenState<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for ScreenState<R> {}

impl<R: Resource> ScreenState<R> {
    pub fn new() -> Self {
        Self {
            list: RwSignal::new(ResourceList::new()),
            busy: RwSignal::new(false),
            loading: RwSignal::new(false),
            api: StoredValue::new(use_api()),
            toaster: use_toaster(),
        }
    }

    /// 重新读取全部记录
    pub fn load(self) {
        self.fetch(|api| async move { api.list::<R>().await });
    }

    /// 用任意读取请求的结果替换列表（全量读取或搜索）
    pub fn fetch<F, Fut>(self, request: F)
    where
        F: FnOnce(AdminApi) -> Fut + 'static,
        Fut: Future<Output = AdminResult<Vec<R>>> + 'static,
    {
        let api = self.api.get_value();
        self.loading.set(true);
        spawn_local(async move {
            match request(api).await {
                Ok(records) => {
                    log_info!("[{}] loaded {} records", R::COLLECTION, records.len());
                    self.list.update(|list| list.replace_all(records));
                }
                Err(e) => self.report("load", e),
            }
            self.loading.set(false);
        });
    }

    /// 新建记录；成功返回 true
    pub async fn create(self, form: FormValues) -> bool {
        let draft = match R::draft_from_form(&form) {
            Ok(draft) => draft,
            Err(e) => {
                self.report("add", e);
                return false;
            }
        };
        if !self.try_begin() {
            return false;
        }

        let result = self.api.get_value().create::<R>(draft).await;
        self.busy.set(false);
        match result {
            Ok(record) => {
                log_info!("[{}] created #{}", R::COLLECTION, record.id());
                self.list.update(|list| list.apply_created(record));
                self.toaster
                    .success(format!("{} added successfully", R::SINGULAR));
                true
            }
            Err(e) => {
                self.report("add", e);
                false
            }
        }
    }

    /// 保存当前编辑会话；成功返回 true
    pub async fn save_edit(self) -> bool {
        let record = match self.list.with_untracked(|list| list.prepare_update()) {
            Ok(record) => record,
            Err(e) => {
                self.report("update", e);
                return false;
            }
        };
        if !self.try_begin() {
            return false;
        }

        let result = self.api.get_value().update(record).await;
        self.busy.set(false);
        match result {
            Ok(saved) => {
                log_info!("[{}] updated #{}", R::COLLECTION, saved.id());
                self.list.update(|list| {
                    list.apply_updated(saved);
                });
                self.toaster
                    .success(format!("{} updated successfully", R::SINGULAR));
                true
            }
            Err(e) => {
                self.report("update", e);
                false
            }
        }
    }

    /// 删除按钮：第一次点击进入确认，同一行第二次点击才发出 DELETE
    pub fn delete_clicked(self, id: RecordId) {
        if self.busy.get_untracked() {
            return;
        }
        let Some(DeleteStep::Confirmed(id)) = self.list.try_update(|list| list.request_delete(id))
        else {
            return;
        };

        self.busy.set(true);
        let api = self.api.get_value();
        spawn_local(async move {
            let result = api.delete::<R>(id).await;
            self.busy.set(false);
            match result {
                Ok(()) => {
                    log_info!("[{}] deleted #{}", R::COLLECTION, id);
                    self.list.update(|list| {
                        list.apply_deleted(id);
                    });
                    self.toaster
                        .success(format!("{} deleted successfully", R::SINGULAR));
                }
                Err(e) => self.report("delete", e),
            }
        });
    }

    fn try_begin(&self) -> bool {
        if self.busy.get_untracked() {
            return false;
        }
        self.busy.set(true);
        true
    }

    /// 记录日志并弹出错误通知；表单校验错误直接显示原因
    fn report(&self, action: &str, err: AdminError) {
        log_error!("[{}] {} failed: {}", R::COLLECTION, action, err);
        if err.is_invalid_input() {
            self.toaster.error(err.message());
        } else {
            self.toaster.error(format!(
                "Failed to {} {}",
                action,
                R::SINGULAR.to_lowercase()
            ));
        }
    }
}

/// 行的 key 包含单元格内容，记录被更新后该行会重新渲染
fn row_key<R: Resource>(record: &R) -> (RecordId, Vec<String>) {
    let cells = R::FIELDS.iter().map(|f| record.cell(f.key)).collect();
    (record.id(), cells)
}

fn start_edit<R: Resource>(state: ScreenState<R>, dialog: DialogState, id: RecordId) {
    let form = state
        .list
        .try_update(|list| {
            list.begin_edit(id);
            list.edit_session().map(|s| s.form.clone())
        })
        .flatten();

    if let Some(form) = form {
        if R::EDIT_MODE == EditMode::Modal {
            dialog.open_edit(id, form);
        }
    }
}

fn record_row<R: Resource>(state: ScreenState<R>, dialog: DialogState, record: R) -> impl IntoView {
    let id = record.id();
    let busy = state.busy;
    // Memo 保证输入时不会重建整行（否则输入框失去焦点）
    let editing = Memo::new(move |_| {
        R::EDIT_MODE == EditMode::Inline && state.list.with(|list| list.is_editing(id))
    });
    let armed = Memo::new(move |_| state.list.with(|list| list.is_delete_armed(id)));

    let cells = R::FIELDS
        .iter()
        .map(|field| {
            let key = field.key;
            let input_type = field.kind.input_type();
            let value = record.cell(key);
            view! {
                <td>
                    {move || {
                        if editing.get() {
                            view! {
                                <input
                                    type=input_type
                                    class="input input-bordered input-sm w-full"
                                    prop:value=move || {
                                        state.list.with(|list| {
                                            list.edit_session()
                                                .map(|s| s.form.get(key).to_string())
                                                .unwrap_or_default()
                                        })
                                    }
                                    on:input=move |ev| {
                                        let v = event_target_value(&ev);
                                        state.list.update(|list| list.set_edit_field(key, v));
                                    }
                                />
                            }
                                .into_any()
                        } else {
                            value.clone().into_any()
                        }
                    }}
                </td>
            }
        })
        .collect_view();

    let actions = move || {
        if editing.get() {
            view! {
                <button
                    class="btn btn-success btn-sm"
                    disabled=move || busy.get()
                    on:click=move |_| spawn_local(async move {
                        state.save_edit().await;
                    })
                >
                    "Save"
                </button>
                <button
                    class="btn btn-ghost btn-sm"
                    on:click=move |_| state.list.update(|list| list.cancel_edit())
                >
                    "Cancel"
                </button>
            }
                .into_any()
        } else if armed.get() {
            view! {
                <button
                    class="btn btn-error btn-sm"
                    disabled=move || busy.get()
                    on:click=move |_| state.delete_clicked(id)
                >
                    "Confirm"
                </button>
                <button
                    class="btn btn-ghost btn-sm"
                    on:click=move |_| state.list.update(|list| list.cancel_delete())
                >
                    "Cancel"
                </button>
            }
                .into_any()
        } else {
            view! {
                <button
                    class="btn btn-ghost btn-sm btn-square"
                    title="Edit"
                    on:click=move |_| start_edit(state, dialog, id)
                >
                    <Pencil attr:class="h-4 w-4" />
                </button>
                <button
                    class="btn btn-ghost btn-sm btn-square text-error"
                    title="Delete"
                    on:click=move |_| state.delete_clicked(id)
                >
                    <Trash2 attr:class="h-4 w-4" />
                </button>
            }
                .into_any()
        }
    };

    view! {
        <tr>
            <td class="font-mono text-xs opacity-60">{id}</td>
            {cells}
            <td>
                <div class="flex justify-end gap-1">{actions}</div>
            </td>
        </tr>
    }
}

/// 渲染资源表格并在挂载时读取一次全部记录
pub fn resource_screen<R: Resource>(state: ScreenState<R>) -> impl IntoView {
    let dialog = DialogState::new(R::FIELDS);
    state.load();

    let rows = Memo::new(move |_| state.list.with(|list| list.visible().to_vec()));
    let current = Signal::derive(move || state.list.with(|list| list.current_page()));
    let count = Signal::derive(move || state.list.with(|list| list.page_count()));
    let on_select = Callback::new(move |page: usize| {
        state.list.update(|list| list.go_to_page(page))
    });

    let colspan = (R::FIELDS.len() + 2).to_string();
    let empty_colspan = colspan.clone();
    let is_empty = move || state.list.with(|list| list.is_loaded() && list.is_empty());
    let first_load = move || state.loading.get() && !state.list.with(|list| list.is_loaded());

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body p-0">
                <div class="flex items-center justify-between p-6 pb-2">
                    <div>
                        <h3 class="card-title">{format!("{}s", R::SINGULAR)}</h3>
                        <p class="text-base-content/70 text-sm">
                            {move || format!("{} records", state.list.with(|list| list.len()))}
                        </p>
                    </div>
                    <div class="flex gap-2">
                        <button
                            on:click=move |_| state.load()
                            disabled=move || state.loading.get()
                            class="btn btn-ghost btn-circle"
                            title="Refresh"
                        >
                            <span class=move || if state.loading.get() { "animate-spin" } else { "" }>
                                <RefreshCw attr:class="h-5 w-5" />
                            </span>
                        </button>
                        <button class="btn btn-primary gap-2" on:click=move |_| dialog.open_create()>
                            <Plus attr:class="h-4 w-4" />
                            {format!("Add {}", R::SINGULAR)}
                        </button>
                    </div>
                </div>

                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"ID"</th>
                                {R::FIELDS
                                    .iter()
                                    .map(|field| view! { <th>{field.label}</th> })
                                    .collect_view()}
                                <th class="text-right">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=is_empty>
                                <tr>
                                    <td colspan=empty_colspan.clone() class="text-center py-8 text-base-content/50">
                                        "No records found."
                                    </td>
                                </tr>
                            </Show>
                            <Show when=first_load>
                                <tr>
                                    <td colspan=colspan.clone() class="text-center py-8 text-base-content/50">
                                        <span class="loading loading-spinner loading-md"></span>
                                        " Loading..."
                                    </td>
                                </tr>
                            </Show>
                            <For
                                each=move || rows.get()
                                key={row_key::<R>}
                                children=move |record| record_row(state, dialog, record)
                            />
                        </tbody>
                    </table>
                </div>

                <PageControls current=current count=count on_select=on_select />
            </div>
        </div>
        {resource_dialog(state, dialog)}
    }
}
