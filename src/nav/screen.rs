//! 画面定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖 DOM 或 web_sys。
//! 每个画面变体携带自身必需的上下文，从类型上杜绝
//! "可空侧状态 + 渲染守卫"的旧模式；回到主页时搜索词、
//! 所选分类随旧画面变体一并丢弃。

use crate::model::{Category, EditingFeedback, FeedbackTarget};

/// 后端返回过的管理员角色拼写。契约尚未统一，两种都接受。
pub const ADMIN_ROLES: [&str; 2] = ["ADMIN", "ROLE_ADMIN"];

/// 应用画面枚举
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Screen {
    /// 登录画面（初始画面）
    #[default]
    Login,
    Signup,
    RegionSelect,
    Home,
    /// 分类规则画面，携带所选分类
    Category(Category),
    /// 搜索结果画面，携带查询词
    Search(String),
    /// 反馈登记画面，携带反馈对象
    Feedback(FeedbackTarget),
    MyFeedback,
    /// 反馈修改画面，携带修改回路中的反馈
    FeedbackEdit(EditingFeedback),
    QaList,
    QaDetail(i64),
    QaWrite,
    /// 管理员仪表盘（仅限管理员角色）
    Admin,
}

impl Screen {
    /// 该画面是否需要登录
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::Login | Self::Signup)
    }

    /// 该画面是否仅限管理员
    pub fn requires_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// 角色是否属于管理员拼写集合
    pub fn is_admin_role(role: &str) -> bool {
        ADMIN_ROLES.contains(&role)
    }

    /// 登录成功后的落点：管理员进仪表盘，普通用户先选地区
    pub fn after_login(role: &str) -> Self {
        if Self::is_admin_role(role) {
            Self::Admin
        } else {
            Self::RegionSelect
        }
    }

    /// **核心守卫逻辑：验证导航目标**
    ///
    /// 未登录访问受保护画面退回登录页；
    /// 非管理员访问仪表盘退回主页。
    pub fn resolve(self, is_authenticated: bool, is_admin: bool) -> Screen {
        if self.requires_auth() && !is_authenticated {
            return Screen::Login;
        }
        if self.requires_admin() && !is_admin {
            return Screen::Home;
        }
        self
    }
}
