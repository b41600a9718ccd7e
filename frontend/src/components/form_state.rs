//! 表单状态管理模块
//!
//! 把一组字段的原始输入整合为一个 `FormState`，负责：
//! - 数据的持有与重置
//! - 按 `FieldSpec` 渲染输入框
//!
//! 转换为请求对象的校验逻辑在共享层的 `Resource::draft_from_form` 中。

use leptos::prelude::*;
use school_admin_shared::{FieldSpec, FormValues};

/// 表单状态
///
/// 内部是 `RwSignal`，因此是 `Copy`，适合作为 Props 在组件间传递。
#[derive(Clone, Copy)]
pub struct FormState {
    fields: &'static [FieldSpec],
    values: RwSignal<FormValues>,
}

impl FormState {
    pub fn new(fields: &'static [FieldSpec]) -> Self {
        Self {
            fields,
            values: RwSignal::new(FormValues::blank(fields)),
        }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// 重置为空白表单
    pub fn reset(&self) {
        self.values.set(FormValues::blank(self.fields));
    }

    /// 用已有记录的值预填
    pub fn load(&self, values: FormValues) {
        self.values.set(values);
    }

    pub fn set(&self, key: &'static str, value: String) {
        self.values.update(|v| v.set(key, value));
    }

    pub fn value(&self, key: &'static str) -> String {
        self.values.with(|v| v.get(key).to_string())
    }

    pub fn snapshot(&self) -> FormValues {
        self.values.get_untracked()
    }
}

/// 按字段定义渲染一组带标签的输入框
#[component]
pub fn FieldInputs(form: FormState) -> impl IntoView {
    form.fields()
        .iter()
        .map(|field| {
            let key = field.key;
            let id = format!("field_{}", key);
            view! {
                <div class="form-control">
                    <label for=id.clone() class="label">
                        <span class="label-text">{field.label}</span>
                    </label>
                    <input
                        id=id
                        type=field.kind.input_type()
                        placeholder=field.placeholder
                        on:input=move |ev| form.set(key, event_target_value(&ev))
                        prop:value=move || form.value(key)
                        class="input input-bordered w-full"
                    />
                </div>
            }
        })
        .collect_view()
}
