//! 导航服务模块 - 核心引擎
//!
//! 所有画面切换集中在此，实现"请求 -> 验证(Guard) -> 处理 -> 加载"的
//! 导航流程。通过注入的会话信号实现与认证系统的解耦；
//! 画面切换完全由用户回调在 UI 线程上触发，不存在并发迁移。

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use super::screen::Screen;

/// 导航服务
///
/// 封装当前画面信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct Navigator {
    /// 当前画面（只读信号）
    current: ReadSignal<Screen>,
    set_current: WriteSignal<Screen>,
    /// 注入的会话信号，实现解耦
    is_authenticated: Signal<bool>,
    is_admin: Signal<bool>,
}

impl Navigator {
    fn new(is_authenticated: Signal<bool>, is_admin: Signal<bool>) -> Self {
        let (current, set_current) = signal(Screen::default());
        Self {
            current,
            set_current,
            is_authenticated,
            is_admin,
        }
    }

    /// 当前画面信号
    pub fn current(&self) -> ReadSignal<Screen> {
        self.current
    }

    /// **核心方法：带守卫的画面切换**
    pub fn navigate(&self, target: Screen) {
        let resolved = target.clone().resolve(
            self.is_authenticated.get_untracked(),
            self.is_admin.get_untracked(),
        );
        if resolved != target {
            web_sys::console::log_1(&JsValue::from_str("[nav] access denied, redirecting"));
        }
        self.set_current.set(resolved);
    }

    /// 回到主页。搜索词与所选分类随旧画面变体一并丢弃。
    pub fn go_home(&self) {
        self.navigate(Screen::Home);
    }

    /// 会话注销时自动退回登录画面
    fn setup_session_redirect(&self) {
        let current = self.current;
        let set_current = self.set_current;
        let is_authenticated = self.is_authenticated;

        Effect::new(move |_| {
            let is_auth = is_authenticated.get();
            let screen = current.get_untracked();
            if !is_auth && screen.requires_auth() {
                web_sys::console::log_1(&JsValue::from_str(
                    "[nav] session ended, redirecting to login",
                ));
                set_current.set(Screen::Login);
            }
        });
    }
}

/// 提供导航服务到 Context 并初始化
pub fn provide_nav(is_authenticated: Signal<bool>, is_admin: Signal<bool>) -> Navigator {
    let nav = Navigator::new(is_authenticated, is_admin);
    nav.setup_session_redirect();
    provide_context(nav);
    nav
}

/// 从 Context 获取导航服务
pub fn use_nav() -> Navigator {
    use_context::<Navigator>().expect("Navigator not found in context. Ensure App provides it.")
}
