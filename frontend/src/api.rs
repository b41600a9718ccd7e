//! REST 客户端注入
//!
//! 启动时解析一次 API 地址，之后通过 Context 共享同一个客户端。

use crate::web::{FetchClient, LocalStorage};
use leptos::prelude::*;
use school_admin_shared::SchoolApi;
use school_admin_shared::config::ClientConfig;

pub type AdminApi = SchoolApi<FetchClient>;

fn build_api() -> AdminApi {
    let config = ClientConfig::resolve(&LocalStorage, option_env!("SCHOOL_ADMIN_API_URL"));
    log_info!("[Api] base url: {}", config.api_base_url);
    SchoolApi::new(config.api_base_url, FetchClient)
}

pub fn provide_api() {
    provide_context(build_api());
}

pub fn use_api() -> AdminApi {
    use_context::<AdminApi>().expect("AdminApi should be provided")
}
