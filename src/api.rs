//! 后端 HTTP 调用封装
//!
//! 每个后端操作一个方法；持有令牌时自动附加 Bearer 认证头。
//! 本模块只负责发请求和失败分类，不持久化、不触碰会话状态。

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::protocol::{
    AdminFeedbackResponse, BoardReplyRequest, BoardReplyResponse, BoardResponse,
    BoardUpdateRequest, BoardWriteRequest, DisposalSchedule, FeedbackReplyRequest,
    FeedbackReplyResponse, FeedbackRequest, FeedbackResponse, LoginRequest, LoginResponse,
    RegionSaveRequest, SignupRequest, TrashDetail,
};

/// 后端基地址
pub const API_BASE_URL: &str = "http://localhost:8080";

/// 请求失败分类
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 网络不可达
    Network(String),
    /// 4xx 校验失败，携带后端原文消息
    Validation(String),
    /// 401/403 认证或授权失败
    Unauthorized(u16),
    /// 5xx 服务端错误
    Server(u16),
    /// 响应解析失败
    Parse(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(_) => {
                write!(f, "서버와 연결할 수 없습니다. 네트워크 상태를 확인하세요.")
            }
            ApiError::Validation(message) => write!(f, "{}", message),
            ApiError::Unauthorized(_) => write!(f, "로그인이 필요하거나 권한이 없습니다."),
            ApiError::Server(status) => write!(f, "서버 오류가 발생했습니다. ({})", status),
            ApiError::Parse(_) => write!(f, "응답을 해석할 수 없습니다."),
        }
    }
}

impl std::error::Error for ApiError {}

pub type ApiResult<T> = Result<T, ApiError>;

/// 后端校验失败时的结构化响应体
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    message: String,
}

/// 按状态码与响应体对失败分类。纯函数，便于宿主侧测试。
pub fn classify_failure(status: u16, body: &str) -> ApiError {
    match status {
        401 | 403 => ApiError::Unauthorized(status),
        400..=499 => {
            // 结构化 {"message": ...} 优先，否则整个响应体就是消息
            let message = serde_json::from_str::<ErrorBody>(body)
                .map(|b| b.message)
                .unwrap_or_else(|_| body.trim().to_string());
            if message.is_empty() {
                ApiError::Validation(format!("요청이 거부되었습니다. ({})", status))
            } else {
                ApiError::Validation(message)
            }
        }
        _ => ApiError::Server(status),
    }
}

/// 回收指南后端客户端
#[derive(Clone, Debug, PartialEq)]
pub struct RecycleApi {
    base_url: String,
    token: Option<String>,
}

impl RecycleApi {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, token }
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// 持有令牌时附加 Bearer 认证头
    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn expect_ok(sent: Result<Response, gloo_net::Error>) -> ApiResult<Response> {
        let response = sent.map_err(|e| ApiError::Network(e.to_string()))?;
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(classify_failure(status, &body))
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    fn with_json<B: Serialize>(builder: RequestBuilder, body: &B) -> ApiResult<gloo_net::http::Request> {
        builder.json(body).map_err(|e| ApiError::Parse(e.to_string()))
    }

    // ===== 认证 =====

    pub async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
        let request = Self::with_json(Request::post(&self.url("/api/auth/login")), request)?;
        let response = Self::expect_ok(request.send().await).await?;
        Self::read_json(response).await
    }

    pub async fn signup(&self, request: &SignupRequest) -> ApiResult<()> {
        let request = Self::with_json(Request::post(&self.url("/api/auth/signup")), request)?;
        Self::expect_ok(request.send().await).await?;
        Ok(())
    }

    // ===== 地区 =====

    /// 把所选地区保存为用户档案地区
    pub async fn save_region(&self, request: &RegionSaveRequest) -> ApiResult<()> {
        let request =
            Self::with_json(self.authorize(Request::post(&self.url("/api/user/region"))), request)?;
        Self::expect_ok(request.send().await).await?;
        Ok(())
    }

    // ===== 品目 / 排放日程 =====

    /// 地区（可选分类）范围内的品目列表
    pub async fn trash_details(
        &self,
        region_id: i64,
        category: Option<&str>,
    ) -> ApiResult<Vec<TrashDetail>> {
        let region_id = region_id.to_string();
        let mut params = vec![("regionId", region_id.as_str())];
        if let Some(category) = category {
            params.push(("category", category));
        }
        let builder = self.authorize(
            Request::get(&self.url("/api/trash-detail/all-trash")).query(params),
        );
        let response = Self::expect_ok(builder.send().await).await?;
        Self::read_json(response).await
    }

    /// 排放日程事实。仅在条目展开时调用，列表阶段绝不预取。
    pub async fn disposal_schedule(
        &self,
        region_id: i64,
        category: &str,
    ) -> ApiResult<DisposalSchedule> {
        let region_id = region_id.to_string();
        let builder = self.authorize(
            Request::get(&self.url("/api/schedules/disposalOne"))
                .query([("regionId", region_id.as_str()), ("category", category)]),
        );
        let response = Self::expect_ok(builder.send().await).await?;
        Self::read_json(response).await
    }

    // ===== 反馈 =====

    pub async fn save_feedback(&self, request: &FeedbackRequest) -> ApiResult<()> {
        let request =
            Self::with_json(self.authorize(Request::post(&self.url("/api/feedbacks/save"))), request)?;
        Self::expect_ok(request.send().await).await?;
        Ok(())
    }

    /// 只返回调用者本人提交的反馈
    pub async fn my_feedbacks(&self) -> ApiResult<Vec<FeedbackResponse>> {
        let builder = self.authorize(Request::get(&self.url("/api/feedbacks/my")));
        let response = Self::expect_ok(builder.send().await).await?;
        Self::read_json(response).await
    }

    pub async fn update_feedback(&self, id: i64, request: &FeedbackRequest) -> ApiResult<()> {
        let url = self.url(&format!("/api/feedbacks/{}", id));
        let request = Self::with_json(self.authorize(Request::put(&url)), request)?;
        Self::expect_ok(request.send().await).await?;
        Ok(())
    }

    pub async fn delete_feedback(&self, id: i64) -> ApiResult<()> {
        let url = self.url(&format!("/api/feedbacks/{}", id));
        let builder = self.authorize(Request::delete(&url));
        Self::expect_ok(builder.send().await).await?;
        Ok(())
    }

    pub async fn admin_feedbacks(&self) -> ApiResult<Vec<AdminFeedbackResponse>> {
        let builder = self.authorize(Request::get(&self.url("/api/feedbacks/admin")));
        let response = Self::expect_ok(builder.send().await).await?;
        Self::read_json(response).await
    }

    pub async fn feedback_replies(&self, feedback_id: i64) -> ApiResult<Vec<FeedbackReplyResponse>> {
        let feedback_id = feedback_id.to_string();
        let builder = self.authorize(
            Request::get(&self.url("/api/feedback-reply"))
                .query([("feedbackId", feedback_id.as_str())]),
        );
        let response = Self::expect_ok(builder.send().await).await?;
        Self::read_json(response).await
    }

    pub async fn save_feedback_reply(
        &self,
        feedback_id: i64,
        request: &FeedbackReplyRequest,
    ) -> ApiResult<()> {
        let url = self.url(&format!("/api/feedback-reply/{}", feedback_id));
        let request = Self::with_json(self.authorize(Request::post(&url)), request)?;
        Self::expect_ok(request.send().await).await?;
        Ok(())
    }

    pub async fn update_feedback_reply(
        &self,
        reply_id: i64,
        request: &FeedbackReplyRequest,
    ) -> ApiResult<()> {
        let url = self.url(&format!("/api/feedback-reply/{}", reply_id));
        let request = Self::with_json(self.authorize(Request::put(&url)), request)?;
        Self::expect_ok(request.send().await).await?;
        Ok(())
    }

    pub async fn delete_feedback_reply(&self, reply_id: i64) -> ApiResult<()> {
        let url = self.url(&format!("/api/feedback-reply/{}", reply_id));
        let builder = self.authorize(Request::delete(&url));
        Self::expect_ok(builder.send().await).await?;
        Ok(())
    }

    // ===== Q&A 板块 =====

    /// 按标题检索；空检索词返回全部列表
    pub async fn search_boards(&self, title: &str) -> ApiResult<Vec<BoardResponse>> {
        let builder = self.authorize(
            Request::get(&self.url("/api/board/search-name")).query([("title", title)]),
        );
        let response = Self::expect_ok(builder.send().await).await?;
        Self::read_json(response).await
    }

    pub async fn board(&self, id: i64) -> ApiResult<BoardResponse> {
        let url = self.url(&format!("/api/board/{}", id));
        let builder = self.authorize(Request::get(&url));
        let response = Self::expect_ok(builder.send().await).await?;
        Self::read_json(response).await
    }

    pub async fn write_board(&self, request: &BoardWriteRequest) -> ApiResult<()> {
        let request =
            Self::with_json(self.authorize(Request::post(&self.url("/api/board/write"))), request)?;
        Self::expect_ok(request.send().await).await?;
        Ok(())
    }

    pub async fn update_board(
        &self,
        id: i64,
        email: &str,
        request: &BoardUpdateRequest,
    ) -> ApiResult<()> {
        let url = self.url(&format!("/api/board/{}", id));
        let builder = self.authorize(Request::put(&url).query([("email", email)]));
        let request = Self::with_json(builder, request)?;
        Self::expect_ok(request.send().await).await?;
        Ok(())
    }

    /// 普通用户带 email 查询参数删除，管理员仅凭令牌删除
    pub async fn delete_board(&self, id: i64, email: Option<&str>) -> ApiResult<()> {
        let url = self.url(&format!("/api/board/{}", id));
        let mut builder = Request::delete(&url);
        if let Some(email) = email {
            builder = builder.query([("email", email)]);
        }
        let builder = self.authorize(builder);
        Self::expect_ok(builder.send().await).await?;
        Ok(())
    }

    pub async fn board_replies(&self, board_id: i64) -> ApiResult<Vec<BoardReplyResponse>> {
        let board_id = board_id.to_string();
        let builder = self.authorize(
            Request::get(&self.url("/api/boardReply")).query([("boardId", board_id.as_str())]),
        );
        let response = Self::expect_ok(builder.send().await).await?;
        Self::read_json(response).await
    }

    pub async fn save_board_reply(
        &self,
        board_id: i64,
        request: &BoardReplyRequest,
    ) -> ApiResult<()> {
        let url = self.url(&format!("/api/boardReply/{}", board_id));
        let request = Self::with_json(self.authorize(Request::post(&url)), request)?;
        Self::expect_ok(request.send().await).await?;
        Ok(())
    }

    pub async fn delete_board_reply(&self, reply_id: i64) -> ApiResult<()> {
        let url = self.url(&format!("/api/boardReply/{}", reply_id));
        let builder = self.authorize(Request::delete(&url));
        Self::expect_ok(builder.send().await).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_failures_are_classified() {
        assert_eq!(classify_failure(401, ""), ApiError::Unauthorized(401));
        assert_eq!(classify_failure(403, "Forbidden"), ApiError::Unauthorized(403));
    }

    #[test]
    fn structured_validation_message_passes_through_verbatim() {
        let error = classify_failure(400, r#"{"message":"내용은 최소 10자 이상 입력해주세요."}"#);
        assert_eq!(
            error,
            ApiError::Validation("내용은 최소 10자 이상 입력해주세요.".into())
        );
    }

    #[test]
    fn plain_text_validation_body_is_the_message() {
        let error = classify_failure(400, "이미 가입된 이메일입니다.");
        assert_eq!(error, ApiError::Validation("이미 가입된 이메일입니다.".into()));
    }

    #[test]
    fn blank_validation_body_gets_a_fallback() {
        assert_eq!(
            classify_failure(404, ""),
            ApiError::Validation("요청이 거부되었습니다. (404)".into())
        );
    }

    #[test]
    fn server_errors_keep_their_status() {
        assert_eq!(classify_failure(500, "boom"), ApiError::Server(500));
        assert_eq!(classify_failure(502, ""), ApiError::Server(502));
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let api = RecycleApi::new("http://localhost:8080/", None);
        assert_eq!(api.url("/api/board/1"), "http://localhost:8080/api/board/1");
    }
}
