//! 资源列表状态
//!
//! 一个 CRUD 页面的全部本地状态：已加载的记录、分页、行内编辑会话
//! 以及按行的删除确认。所有变更只在服务端确认之后才应用。

use crate::error::{AdminError, AdminResult};
use crate::pagination::Paginator;
use crate::resource::{FormValues, RecordId, Resource};

/// 正在编辑的记录及其草稿
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub id: RecordId,
    pub form: FormValues,
}

/// 点击删除按钮后的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteStep {
    /// 第一次点击：该行进入待确认状态
    Armed,
    /// 同一行第二次点击：应当发出 DELETE
    Confirmed(RecordId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceList<R> {
    records: Vec<R>,
    pager: Paginator,
    /// 删除确认只作用于单行
    pending_delete: Option<RecordId>,
    editing: Option<EditSession>,
    loaded: bool,
}

impl<R: Resource> Default for ResourceList<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> ResourceList<R> {
    pub fn new() -> Self {
        Self::with_paginator(Paginator::default())
    }

    pub fn with_paginator(pager: Paginator) -> Self {
        Self {
            records: Vec::new(),
            pager,
            pending_delete: None,
            editing: None,
            loaded: false,
        }
    }

    // --- 读取 ---

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 是否已完成首次加载
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn get(&self, id: RecordId) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.get(id).is_some()
    }

    /// 当前页的记录
    pub fn visible(&self) -> &[R] {
        self.pager.slice(&self.records)
    }

    pub fn current_page(&self) -> usize {
        self.pager.current_page()
    }

    pub fn page_count(&self) -> usize {
        self.pager.page_count(self.records.len())
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.pager.go_to(page, self.records.len());
    }

    // --- 服务端确认后的变更 ---

    /// 用服务端返回的完整列表替换本地状态
    pub fn replace_all(&mut self, records: Vec<R>) {
        self.records = records;
        self.loaded = true;
        self.pager.clamp(self.records.len());

        if let Some(id) = self.pending_delete {
            if !self.contains(id) {
                self.pending_delete = None;
            }
        }
        if let Some(id) = self.editing.as_ref().map(|s| s.id) {
            if !self.contains(id) {
                self.editing = None;
            }
        }
    }

    /// 追加新建记录；若 id 已存在则替换，保证列表中只出现一次
    pub fn apply_created(&mut self, record: R) {
        let id = record.id();
        match self.records.iter_mut().find(|r| r.id() == id) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    /// 按 id 替换记录并结束对应的编辑会话
    ///
    /// 返回记录是否存在于本地列表中。
    pub fn apply_updated(&mut self, record: R) -> bool {
        let id = record.id();
        if self.editing.as_ref().is_some_and(|s| s.id == id) {
            self.editing = None;
        }
        match self.records.iter_mut().find(|r| r.id() == id) {
            Some(existing) => {
                *existing = record;
                true
            }
            None => false,
        }
    }

    /// 移除记录；返回是否确实移除了
    pub fn apply_deleted(&mut self, id: RecordId) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);

        if self.pending_delete == Some(id) {
            self.pending_delete = None;
        }
        if self.editing.as_ref().is_some_and(|s| s.id == id) {
            self.editing = None;
        }
        self.pager.clamp(self.records.len());

        self.records.len() != before
    }

    // --- 删除确认 ---

    /// 第一次点击进入确认；同一行再次点击返回 `Confirmed`
    ///
    /// 点击另一行会把确认状态移到那一行。
    pub fn request_delete(&mut self, id: RecordId) -> DeleteStep {
        if self.pending_delete == Some(id) {
            DeleteStep::Confirmed(id)
        } else {
            self.pending_delete = Some(id);
            DeleteStep::Armed
        }
    }

    pub fn is_delete_armed(&self, id: RecordId) -> bool {
        self.pending_delete == Some(id)
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    // --- 编辑 ---

    /// 将记录复制进编辑草稿；记录不存在时返回 false
    pub fn begin_edit(&mut self, id: RecordId) -> bool {
        match self.get(id) {
            Some(record) => {
                let form = record.to_form();
                self.editing = Some(EditSession { id, form });
                self.pending_delete = None;
                true
            }
            None => false,
        }
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self, id: RecordId) -> bool {
        self.editing.as_ref().is_some_and(|s| s.id == id)
    }

    pub fn set_edit_field(&mut self, key: &'static str, value: impl Into<String>) {
        if let Some(session) = self.editing.as_mut() {
            session.form.set(key, value);
        }
    }

    /// 丢弃草稿；列表中的记录从未被修改，因此显示值自然恢复
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// 生成要 PUT 的完整记录（草稿合并进原记录）
    pub fn prepare_update(&self) -> AdminResult<R> {
        let session = self
            .editing
            .as_ref()
            .ok_or_else(|| AdminError::invalid_input("no record is being edited"))?;
        let record = self.get(session.id).ok_or_else(|| {
            AdminError::invalid_input(format!("{} {} is no longer listed", R::SINGULAR, session.id))
        })?;
        record
            .merge_form(&session.form)
            .map_err(|e| e.in_op_with("store.prepare_update", R::record_path(session.id)))
    }
}

#[cfg(test)]
mod tests;
