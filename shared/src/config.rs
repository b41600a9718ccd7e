//! 客户端配置
//!
//! API 地址的优先级：浏览器存储 > 构建时环境变量 > 默认值。

use crate::session::KeyValueStore;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
/// 浏览器存储中覆盖 API 地址的键
pub const API_URL_STORAGE_KEY: &str = "school_admin_api_url";
/// 构建时读取的环境变量名
pub const API_URL_ENV_VAR: &str = "SCHOOL_ADMIN_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// `build_time` 通常为 `option_env!("SCHOOL_ADMIN_API_URL")`
    pub fn resolve(store: &impl KeyValueStore, build_time: Option<&str>) -> Self {
        let non_empty = |v: &str| {
            let v = v.trim().trim_end_matches('/');
            (!v.is_empty()).then(|| v.to_string())
        };

        let api_base_url = store
            .get(API_URL_STORAGE_KEY)
            .and_then(|v| non_empty(&v))
            .or_else(|| build_time.and_then(non_empty))
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Self { api_base_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::tests::MemoryStore;

    #[test]
    fn test_default_when_nothing_set() {
        let store = MemoryStore::default();
        assert_eq!(ClientConfig::resolve(&store, None), ClientConfig::default());
        assert_eq!(
            ClientConfig::resolve(&store, Some("  ")).api_base_url,
            DEFAULT_API_BASE_URL
        );
    }

    #[test]
    fn test_build_time_value() {
        let store = MemoryStore::default();
        let cfg = ClientConfig::resolve(&store, Some("https://records.school.test/api/"));
        assert_eq!(cfg.api_base_url, "https://records.school.test/api");
    }

    #[test]
    fn test_storage_overrides_build_time() {
        let store = MemoryStore::default();
        store.set(API_URL_STORAGE_KEY, "http://10.0.0.5:8000");
        let cfg = ClientConfig::resolve(&store, Some("https://records.school.test"));
        assert_eq!(cfg.api_base_url, "http://10.0.0.5:8000");
    }
}
