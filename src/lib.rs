//! RecycleMap 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `nav::screen`: 画面定义（领域模型，携带各自上下文的标签联合）
//! - `nav::navigator`: 导航服务（核心引擎）
//! - `session`: 会话状态管理（持久化键收口处）
//! - `api` / `protocol`: 后端 HTTP 契约
//! - `components`: UI 组件层，每个画面独立取数

pub mod api;
pub mod model;
pub mod protocol;
pub mod session;

pub(crate) mod nav {
    pub mod navigator;
    pub mod screen;

    #[cfg(test)]
    mod tests;
}

mod components {
    pub mod admin_dashboard;
    pub mod category_rules;
    pub mod feedback_edit_form;
    pub mod feedback_form;
    pub mod home;
    pub mod item_card;
    pub mod login;
    pub mod logo;
    pub mod my_feedback;
    pub mod qa_detail;
    pub mod qa_list;
    pub mod qa_write;
    pub mod region_select;
    pub mod search_results;
    pub mod signup;
}

use leptos::prelude::*;

use crate::components::admin_dashboard::AdminDashboardPage;
use crate::components::category_rules::CategoryRulesPage;
use crate::components::feedback_edit_form::FeedbackEditPage;
use crate::components::feedback_form::FeedbackFormPage;
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::components::my_feedback::MyFeedbackPage;
use crate::components::qa_detail::QaDetailPage;
use crate::components::qa_list::QaListPage;
use crate::components::qa_write::QaWritePage;
use crate::components::region_select::RegionSelectPage;
use crate::components::search_results::SearchResultsPage;
use crate::components::signup::SignupPage;
use crate::model::provide_selected_region;
use crate::nav::navigator::provide_nav;
use crate::nav::screen::Screen;
use crate::session::{SessionContext, init_session};

/// 画面匹配函数
///
/// 根据当前画面返回对应的视图组件；每个变体携带的上下文
/// 直接作为 Props 传入，不存在缺失上下文的渲染路径。
fn screen_matcher(screen: Screen) -> AnyView {
    match screen {
        Screen::Login => view! { <LoginPage /> }.into_any(),
        Screen::Signup => view! { <SignupPage /> }.into_any(),
        Screen::RegionSelect => view! { <RegionSelectPage /> }.into_any(),
        Screen::Home => view! { <HomePage /> }.into_any(),
        Screen::Category(category) => view! { <CategoryRulesPage category=category /> }.into_any(),
        Screen::Search(query) => view! { <SearchResultsPage query=query /> }.into_any(),
        Screen::Feedback(target) => view! { <FeedbackFormPage target=target /> }.into_any(),
        Screen::MyFeedback => view! { <MyFeedbackPage /> }.into_any(),
        Screen::FeedbackEdit(editing) => view! { <FeedbackEditPage editing=editing /> }.into_any(),
        Screen::QaList => view! { <QaListPage /> }.into_any(),
        Screen::QaDetail(post_id) => view! { <QaDetailPage post_id=post_id /> }.into_any(),
        Screen::QaWrite => view! { <QaWritePage /> }.into_any(),
        Screen::Admin => view! { <AdminDashboardPage /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 会话上下文，并从持久化存储恢复
    let session = SessionContext::new();
    provide_context(session);
    init_session(&session);

    // 2. 会话级选中地区
    provide_selected_region();

    // 3. 注入会话信号，构建导航服务（解耦）
    let nav = provide_nav(session.is_authenticated_signal(), session.is_admin_signal());

    // 4. 一次只渲染一个画面
    let current = nav.current();
    move || screen_matcher(current.get())
}
