//! 客户端会话
//!
//! 会话只是持久化在浏览器存储中的两个键：登录标志和当前用户邮箱。
//! 没有 token，也没有服务端校验。

use crate::error::{AdminError, AdminResult};

pub const KEY_LOGGED_IN: &str = "isLoggedIn";
pub const KEY_EMAIL: &str = "email";

/// 键值存储抽象
///
/// 浏览器中由 LocalStorage 实现，测试中由内存表实现。
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    /// 成功返回 true
    fn set(&self, key: &str, value: &str) -> bool;
    /// 成功返回 true
    fn delete(&self, key: &str) -> bool;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub logged_in: bool,
    pub email: Option<String>,
}

impl Session {
    /// 从存储恢复会话；登录标志缺失时忽略邮箱
    pub fn load(store: &impl KeyValueStore) -> Self {
        let logged_in = store.get(KEY_LOGGED_IN).as_deref() == Some("true");
        let email = if logged_in { store.get(KEY_EMAIL) } else { None };
        Self { logged_in, email }
    }

    /// 登录成功后写入登录标志和邮箱
    pub fn persist_login(store: &impl KeyValueStore, email: &str) -> AdminResult<Self> {
        if !store.set(KEY_LOGGED_IN, "true") || !store.set(KEY_EMAIL, email) {
            // 避免留下半截会话
            store.delete(KEY_LOGGED_IN);
            return Err(AdminError::storage("unable to write session").in_op("session.persist"));
        }
        Ok(Self {
            logged_in: true,
            email: Some(email.to_string()),
        })
    }

    /// 注销：删除两个键
    pub fn clear(store: &impl KeyValueStore) -> Self {
        store.delete(KEY_LOGGED_IN);
        store.delete(KEY_EMAIL);
        Self::default()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// 内存键值存储
    #[derive(Default)]
    pub struct MemoryStore {
        pub items: RefCell<HashMap<String, String>>,
        pub read_only: bool,
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> bool {
            if self.read_only {
                return false;
            }
            self.items
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            true
        }

        fn delete(&self, key: &str) -> bool {
            self.items.borrow_mut().remove(key);
            true
        }
    }

    #[test]
    fn test_empty_store_is_logged_out() {
        let store = MemoryStore::default();
        assert_eq!(Session::load(&store), Session::default());
    }

    #[test]
    fn test_persist_then_load() {
        let store = MemoryStore::default();
        let session = Session::persist_login(&store, "ann@school.test").unwrap();
        assert!(session.logged_in);

        assert_eq!(store.get(KEY_LOGGED_IN).as_deref(), Some("true"));
        assert_eq!(Session::load(&store), session);
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let store = MemoryStore::default();
        Session::persist_login(&store, "ann@school.test").unwrap();

        let session = Session::clear(&store);
        assert!(!session.logged_in);
        assert!(store.items.borrow().is_empty());
        assert!(!Session::load(&store).logged_in);
    }

    #[test]
    fn test_email_without_flag_is_ignored() {
        let store = MemoryStore::default();
        store.set(KEY_EMAIL, "stale@school.test");
        store.set(KEY_LOGGED_IN, "false");
        assert_eq!(Session::load(&store), Session::default());
    }

    #[test]
    fn test_persist_failure_is_storage_error() {
        let store = MemoryStore {
            read_only: true,
            ..Default::default()
        };
        let err = Session::persist_login(&store, "ann@school.test").unwrap_err();
        assert_eq!(err.status, crate::error::AdminErrorStatus::Storage);
        assert!(!Session::load(&store).logged_in);
    }
}
