use super::*;
use crate::models::{Student, Subject};

// =========================================================
// 辅助函数
// =========================================================

fn subject(id: RecordId, name: &str) -> Subject {
    Subject {
        id,
        name: name.to_string(),
        description: format!("{} basics", name),
    }
}

fn student(id: RecordId, first: &str) -> Student {
    Student {
        id,
        first_name: first.to_string(),
        last_name: "Dee".to_string(),
        age: 12,
        grade: "6".to_string(),
    }
}

fn loaded_subjects(n: u64) -> ResourceList<Subject> {
    let mut list = ResourceList::new();
    list.replace_all((1..=n).map(|i| subject(i, &format!("S{}", i))).collect());
    list
}

fn count_id(list: &ResourceList<Subject>, id: RecordId) -> usize {
    list.records().iter().filter(|s| s.id == id).count()
}

// =========================================================
// 加载与分页
// =========================================================

#[test]
fn test_new_list_is_not_loaded() {
    let list = ResourceList::<Subject>::new();
    assert!(!list.is_loaded());
    assert!(list.is_empty());
    assert_eq!(list.page_count(), 0);
}

#[test]
fn test_visible_is_current_page() {
    let mut list = loaded_subjects(12);
    assert!(list.is_loaded());
    assert_eq!(list.page_count(), 3);

    let ids: Vec<_> = list.visible().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);

    list.go_to_page(3);
    let ids: Vec<_> = list.visible().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![11, 12]);
}

// =========================================================
// 新建
// =========================================================

#[test]
fn test_created_subject_appears_once() {
    let mut list = loaded_subjects(0);
    let created = Subject {
        id: 7,
        name: "Math".to_string(),
        description: "Algebra".to_string(),
    };

    list.apply_created(created);

    assert_eq!(count_id(&list, 7), 1);
    let row = &list.visible()[0];
    assert_eq!(row.cell("name"), "Math");
    assert_eq!(row.cell("description"), "Algebra");
}

#[test]
fn test_created_duplicate_id_is_replaced() {
    let mut list = loaded_subjects(3);
    list.apply_created(subject(2, "Replaced"));

    assert_eq!(list.len(), 3);
    assert_eq!(count_id(&list, 2), 1);
    assert_eq!(list.get(2).unwrap().name, "Replaced");
}

// =========================================================
// 删除
// =========================================================

#[test]
fn test_delete_requires_two_clicks() {
    let mut list = loaded_subjects(3);

    assert_eq!(list.request_delete(2), DeleteStep::Armed);
    assert!(list.is_delete_armed(2));
    assert!(list.contains(2));

    assert_eq!(list.request_delete(2), DeleteStep::Confirmed(2));
    assert!(list.apply_deleted(2));
    assert!(!list.contains(2));
    assert!(!list.is_delete_armed(2));
}

#[test]
fn test_delete_confirmation_is_per_row() {
    let mut list = loaded_subjects(3);

    assert_eq!(list.request_delete(1), DeleteStep::Armed);
    assert!(!list.is_delete_armed(2));
    assert!(!list.is_delete_armed(3));

    // 点击另一行只会转移确认状态，而不会删除
    assert_eq!(list.request_delete(3), DeleteStep::Armed);
    assert!(!list.is_delete_armed(1));
    assert!(list.is_delete_armed(3));
}

#[test]
fn test_cancel_delete() {
    let mut list = loaded_subjects(2);
    list.request_delete(1);
    list.cancel_delete();
    assert!(!list.is_delete_armed(1));
    assert_eq!(list.request_delete(1), DeleteStep::Armed);
}

#[test]
fn test_failed_delete_keeps_record_and_confirmation() {
    let mut list = loaded_subjects(2);
    list.request_delete(1);
    assert_eq!(list.request_delete(1), DeleteStep::Confirmed(1));
    // 请求失败时不调用 apply_deleted
    assert!(list.contains(1));
    assert!(list.is_delete_armed(1));
}

#[test]
fn test_delete_last_row_of_page_clamps() {
    let mut list = loaded_subjects(6);
    list.go_to_page(2);
    assert_eq!(list.visible().len(), 1);

    list.apply_deleted(6);
    assert_eq!(list.current_page(), 1);
    assert_eq!(list.visible().len(), 5);
}

#[test]
fn test_delete_unknown_id() {
    let mut list = loaded_subjects(2);
    assert!(!list.apply_deleted(99));
    assert_eq!(list.len(), 2);
}

// =========================================================
// 编辑
// =========================================================

#[test]
fn test_cancel_edit_restores_display() {
    let mut list = ResourceList::<Student>::new();
    list.replace_all(vec![student(1, "Ann"), student(2, "Bob")]);

    assert!(list.begin_edit(1));
    assert!(list.is_editing(1));
    assert!(!list.is_editing(2));
    list.set_edit_field("firstName", "Annabel");
    assert_eq!(list.edit_session().unwrap().form.get("firstName"), "Annabel");

    list.cancel_edit();
    assert!(list.edit_session().is_none());
    assert_eq!(list.get(1).unwrap().cell("firstName"), "Ann");
}

#[test]
fn test_prepare_update_merges_draft() {
    let mut list = ResourceList::<Student>::new();
    list.replace_all(vec![student(1, "Ann")]);
    list.begin_edit(1);
    list.set_edit_field("age", "13");
    list.set_edit_field("grade", "7");

    let record = list.prepare_update().unwrap();
    assert_eq!(record.id, 1);
    assert_eq!(record.age, 13);
    assert_eq!(record.grade, "7");
    // 本地记录在服务端确认前保持不变
    assert_eq!(list.get(1).unwrap().age, 12);

    assert!(list.apply_updated(record));
    assert!(list.edit_session().is_none());
    assert_eq!(list.get(1).unwrap().age, 13);
}

#[test]
fn test_prepare_update_rejects_invalid_draft() {
    let mut list = ResourceList::<Student>::new();
    list.replace_all(vec![student(1, "Ann")]);
    list.begin_edit(1);
    list.set_edit_field("age", "twelve");

    let err = list.prepare_update().unwrap_err();
    assert!(err.is_invalid_input());
    assert!(list.is_editing(1));
}

#[test]
fn test_prepare_update_without_session() {
    let list = loaded_subjects(1);
    assert!(list.prepare_update().is_err());
}

#[test]
fn test_begin_edit_disarms_delete() {
    let mut list = loaded_subjects(2);
    list.request_delete(1);
    list.begin_edit(1);
    assert!(!list.is_delete_armed(1));
}

#[test]
fn test_reload_drops_stale_sessions() {
    let mut list = loaded_subjects(3);
    list.begin_edit(3);
    list.request_delete(3);
    list.replace_all(vec![subject(1, "S1")]);

    assert!(list.edit_session().is_none());
    assert!(!list.is_delete_armed(3));
}
