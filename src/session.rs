//! 会话模块
//!
//! 管理登录身份与持久化存储，与画面解耦。
//! 对浏览器存储的所有读写都收口在这里：画面一律经由 SessionContext，
//! 这样注销（以及将来的令牌刷新）只需在一处实现。

use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::api::{API_BASE_URL, ApiResult, RecycleApi};
use crate::nav::screen::Screen;
use crate::protocol::{LoginRequest, LoginResponse};

// 持久化键（与后端约定保持原名）
const KEY_ACCESS_TOKEN: &str = "accessToken";
const KEY_REFRESH_TOKEN: &str = "refreshToken";
const KEY_NICKNAME: &str = "nickname";
const KEY_USER_EMAIL: &str = "userEmail";
const KEY_USER_ROLE: &str = "userRole";

/// 登录身份
#[derive(Clone, Debug, PartialEq)]
pub struct SessionIdentity {
    pub email: String,
    pub nickname: String,
    pub role: String,
}

/// 会话状态
#[derive(Clone)]
pub struct SessionState {
    /// API 客户端，登录后携带令牌
    pub api: RecycleApi,
    pub identity: Option<SessionIdentity>,
    /// 启动恢复是否仍在进行
    pub is_loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            api: RecycleApi::new(API_BASE_URL, None),
            identity: None,
            is_loading: true,
        }
    }
}

/// 会话上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub state: ReadSignal<SessionState>,
    pub set_state: WriteSignal<SessionState>,
}

impl SessionContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(SessionState::default());
        Self { state, set_state }
    }

    /// 认证状态信号（供导航服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.identity.is_some()))
    }

    /// 管理员信号（供导航服务注入）
    pub fn is_admin_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || {
            state.with(|s| {
                s.identity
                    .as_ref()
                    .is_some_and(|identity| Screen::is_admin_role(&identity.role))
            })
        })
    }

    /// 当前查看者邮箱。仅用于作者一致性等 UI 判断，不是安全边界。
    pub fn email(&self) -> Option<String> {
        self.state
            .with_untracked(|s| s.identity.as_ref().map(|identity| identity.email.clone()))
    }

    pub fn nickname(&self) -> Option<String> {
        self.state
            .with_untracked(|s| s.identity.as_ref().map(|identity| identity.nickname.clone()))
    }

    /// 当前 API 客户端副本
    pub fn api(&self) -> RecycleApi {
        self.state.with_untracked(|s| s.api.clone())
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取会话上下文
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

/// 启动时从持久化存储恢复会话
///
/// 令牌过期只能通过之后的请求失败被动发现；刷新协议未与后端确认，
/// refreshToken 仅按契约存取，不做使用。
pub fn init_session(ctx: &SessionContext) {
    let token: Option<String> = LocalStorage::get(KEY_ACCESS_TOKEN).ok();
    let email: Option<String> = LocalStorage::get(KEY_USER_EMAIL).ok();

    let identity = match (&token, email) {
        (Some(_), Some(email)) => {
            web_sys::console::log_1(&JsValue::from_str("[session] restored identity from storage"));
            Some(SessionIdentity {
                email,
                nickname: LocalStorage::get(KEY_NICKNAME).unwrap_or_default(),
                role: LocalStorage::get(KEY_USER_ROLE).unwrap_or_default(),
            })
        }
        _ => None,
    };

    ctx.set_state.update(|state| {
        state.api = RecycleApi::new(API_BASE_URL, token.clone());
        state.identity = identity;
        state.is_loading = false;
    });
}

/// 登录并持久化会话
///
/// 成功时返回后端角色，供登录画面决定落点。
pub async fn login(ctx: &SessionContext, email: String, password: String) -> ApiResult<String> {
    let api = ctx.api();
    let response: LoginResponse = api
        .login(&LoginRequest {
            email: email.clone(),
            password,
        })
        .await?;

    // 写入持久化存储；写入失败（隐私模式等）不阻断登录
    persist(KEY_ACCESS_TOKEN, &response.access_token);
    persist(KEY_REFRESH_TOKEN, &response.refresh_token);
    persist(KEY_NICKNAME, &response.nickname);
    persist(KEY_USER_EMAIL, &email);
    persist(KEY_USER_ROLE, &response.role);

    let role = response.role.clone();
    ctx.set_state.update(move |state| {
        state.api = RecycleApi::new(API_BASE_URL, Some(response.access_token.clone()));
        state.identity = Some(SessionIdentity {
            email,
            nickname: response.nickname.clone(),
            role: response.role.clone(),
        });
        state.is_loading = false;
    });
    Ok(role)
}

/// 注销：清空身份与全部持久化键。
/// 退回登录画面由导航服务的会话监听自动处理。
pub fn logout(ctx: &SessionContext) {
    LocalStorage::delete(KEY_ACCESS_TOKEN);
    LocalStorage::delete(KEY_REFRESH_TOKEN);
    LocalStorage::delete(KEY_NICKNAME);
    LocalStorage::delete(KEY_USER_EMAIL);
    LocalStorage::delete(KEY_USER_ROLE);

    ctx.set_state.update(|state| {
        state.api = RecycleApi::new(API_BASE_URL, None);
        state.identity = None;
    });
}

fn persist(key: &str, value: &str) {
    if LocalStorage::set(key, value).is_err() {
        web_sys::console::error_1(&JsValue::from_str("[session] storage write failed"));
    }
}
