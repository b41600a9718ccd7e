//! 路由定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由、守卫规则以及重定向目标。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面 (默认路由)
    #[default]
    Login,
    Register,
    Users,
    Students,
    Teachers,
    Subjects,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 导航栏中的资源页面，按显示顺序排列
    pub const RESOURCES: [AppRoute; 4] = [
        AppRoute::Users,
        AppRoute::Students,
        AppRoute::Subjects,
        AppRoute::Teachers,
    ];

    /// 将 URL path 解析为路由枚举
    ///
    /// 大小写不敏感，单复数均可，忽略末尾的 `/`。
    pub fn from_path(path: &str) -> Self {
        let path = path.split(|c: char| c == '?' || c == '#').next().unwrap_or("");
        let trimmed = path.trim_end_matches('/').to_ascii_lowercase();
        match trimmed.as_str() {
            "" | "/login" => Self::Login,
            "/register" => Self::Register,
            "/user" | "/users" => Self::Users,
            "/student" | "/students" => Self::Students,
            "/teacher" | "/teachers" => Self::Teachers,
            "/subject" | "/subjects" => Self::Subjects,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Users => "/user",
            Self::Students => "/student",
            Self::Teachers => "/teacher",
            Self::Subjects => "/subject",
            Self::NotFound => "/404",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
            Self::Users => "User",
            Self::Students => "Student",
            Self::Teachers => "Teacher",
            Self::Subjects => "Subject",
            Self::NotFound => "Not Found",
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::Users | Self::Students | Self::Teachers | Self::Subjects
        )
    }

    /// 已认证用户是否应该离开此路由（登录、注册页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    /// 认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 认证成功时的重定向目标
    pub fn auth_success_redirect() -> Self {
        Self::Users
    }

    /// 守卫：返回实际应当展示的路由
    ///
    /// 结果与目标不同即表示需要重定向。
    pub fn resolve(self, is_authenticated: bool) -> Self {
        if self.requires_auth() && !is_authenticated {
            Self::auth_failure_redirect()
        } else if self.should_redirect_when_authenticated() && is_authenticated {
            Self::auth_success_redirect()
        } else {
            self
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_variants() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Login);
        assert_eq!(AppRoute::from_path(""), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/Login"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/register/"), AppRoute::Register);
        assert_eq!(AppRoute::from_path("/User"), AppRoute::Users);
        assert_eq!(AppRoute::from_path("/students"), AppRoute::Students);
        assert_eq!(AppRoute::from_path("/Teacher?page=2"), AppRoute::Teachers);
        assert_eq!(AppRoute::from_path("/subject#top"), AppRoute::Subjects);
        assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
    }

    #[test]
    fn test_paths_round_trip() {
        for route in [
            AppRoute::Login,
            AppRoute::Register,
            AppRoute::Users,
            AppRoute::Students,
            AppRoute::Teachers,
            AppRoute::Subjects,
        ] {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
    }

    #[test]
    fn test_guard_redirects_anonymous_to_login() {
        for route in AppRoute::RESOURCES {
            assert_eq!(route.resolve(false), AppRoute::Login);
            assert_eq!(route.resolve(true), route);
        }
        assert_eq!(AppRoute::Register.resolve(false), AppRoute::Register);
        assert_eq!(AppRoute::NotFound.resolve(false), AppRoute::NotFound);
    }

    #[test]
    fn test_guard_moves_authenticated_off_auth_pages() {
        assert_eq!(AppRoute::Login.resolve(true), AppRoute::Users);
        assert_eq!(AppRoute::Register.resolve(true), AppRoute::Users);
        assert_eq!(AppRoute::Login.resolve(false), AppRoute::Login);
    }
}
