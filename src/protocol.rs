//! Wire contracts for the recycling backend.
//!
//! Request/response DTOs for every endpoint the client consumes, plus the
//! client-side mirrors of the backend validation constraints. The mirrors
//! exist purely as UX affordances; the backend stays authoritative and its
//! rejection messages are surfaced verbatim.

use serde::{Deserialize, Serialize};

// =========================================================
// Auth
// =========================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub nickname: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub nickname: String,
    pub email: String,
    pub password: String,
}

/// Signup input checks, mirroring the backend constraints.
pub fn validate_signup(
    nickname: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(), String> {
    if nickname.is_empty() || email.is_empty() || password.is_empty() || confirm.is_empty() {
        return Err("모든 필드를 입력해주세요".into());
    }
    if !is_plausible_email(email) {
        return Err("올바른 이메일 형식이 아닙니다".into());
    }
    if password.chars().count() < 6 {
        return Err("비밀번호는 최소 6자 이상이어야 합니다".into());
    }
    if password != confirm {
        return Err("비밀번호가 일치하지 않습니다".into());
    }
    Ok(())
}

fn is_plausible_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((user, domain)) => {
            !user.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}

// =========================================================
// Region
// =========================================================

#[derive(Debug, Clone, Serialize)]
pub struct RegionSaveRequest {
    pub city: String,
    pub district: String,
}

// =========================================================
// Trash details & disposal schedules
// =========================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrashDetail {
    pub id: i64,
    pub item_name: String,
    #[serde(default)]
    pub category: Option<String>,
    /// Disposal method. The backend has been seen spelling this both ways.
    #[serde(default, alias = "disposal_method")]
    pub method: Option<String>,
    #[serde(default)]
    pub caution: Option<String>,
}

/// Schedule fact for (region, category). The backend shape is only partially
/// pinned down, so every field stays optional and the card renders whatever
/// is present.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisposalSchedule {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub disposal_day: Option<String>,
    #[serde(default)]
    pub disposal_time: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
}

impl DisposalSchedule {
    /// Human-readable one-liner for the item card.
    pub fn summary(&self) -> Option<String> {
        let parts: Vec<&str> = [
            self.disposal_day.as_deref(),
            self.disposal_time.as_deref(),
            self.method.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect();
        if parts.is_empty() { None } else { Some(parts.join(" ")) }
    }
}

// =========================================================
// Feedback
// =========================================================

pub const FEEDBACK_CONTENT_MIN: usize = 10;

/// Client-only feedback categories, mapped onto the backend enum constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Classification,
    Schedule,
    Content,
    Missing,
    Other,
}

impl FeedbackKind {
    pub const ALL: [FeedbackKind; 5] = [
        FeedbackKind::Classification,
        FeedbackKind::Schedule,
        FeedbackKind::Content,
        FeedbackKind::Missing,
        FeedbackKind::Other,
    ];

    /// Backend `FeedbackType` enum constant.
    pub fn backend_value(self) -> &'static str {
        match self {
            Self::Classification => "CLASSIFICATION_ERROR",
            Self::Schedule => "SCHEDULE_ERROR",
            Self::Content => "CONTENT_ERROR",
            Self::Missing => "MISSING_INFO",
            Self::Other => "OTHER",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Classification => "분류 오류",
            Self::Schedule => "배출 일정 오류",
            Self::Content => "내용 오류",
            Self::Missing => "정보 누락",
            Self::Other => "기타",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Classification => "품목의 카테고리가 잘못됨",
            Self::Schedule => "요일/시간 정보가 틀림",
            Self::Content => "배출 방법이나 주의사항이 틀림",
            Self::Missing => "중요한 정보가 빠져있음",
            Self::Other => "그 외 문제",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    pub content: String,
    pub trash_detail_id: i64,
    /// NOTE: the backend DTO really spells it this way.
    #[serde(rename = "feedBackType")]
    pub feed_back_type: String,
}

impl FeedbackRequest {
    pub fn new(content: String, trash_detail_id: i64, kind: FeedbackKind) -> Self {
        Self {
            content,
            trash_detail_id,
            feed_back_type: kind.backend_value().to_string(),
        }
    }
}

/// Feedback body length check (mirror of the backend's @Size(min = 10)),
/// applied before any network call is made.
pub fn validate_feedback_content(content: &str) -> Result<(), String> {
    if content.trim().chars().count() < FEEDBACK_CONTENT_MIN {
        return Err("내용은 최소 10자 이상 입력해주세요.".into());
    }
    Ok(())
}

/// Embed the human-readable item/region context into the free-text content;
/// the backend feedback model carries no denormalized display fields.
pub fn compose_feedback_content(item_name: &str, region_label: &str, body: &str) -> String {
    format!("[품목: {} / 지역: {}] {}", item_name, region_label, body.trim())
}

/// Split a composed content back into its context tag (brackets included)
/// and the pure body. Content without a leading tag passes through whole.
pub fn split_feedback_content(full: &str) -> (Option<&str>, &str) {
    if full.starts_with('[') {
        if let Some(end) = full.find(']') {
            return (Some(&full[..=end]), full[end + 1..].trim_start());
        }
    }
    (None, full)
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResponse {
    pub id: i64,
    pub content: String,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    /// Must round-trip into updates (@NotNull on the backend DTO).
    pub trash_detail_id: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminFeedbackResponse {
    pub id: i64,
    pub content: String,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, alias = "status")]
    pub feedback_status: Option<String>,
}

impl AdminFeedbackResponse {
    pub fn is_answered(&self) -> bool {
        self.feedback_status.as_deref() == Some("ANSWERED")
    }
}

pub const ADMIN_FEEDBACK_REPLY_MIN: usize = 10;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackReplyRequest {
    pub content: String,
    pub author_name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackReplyResponse {
    pub id: i64,
    pub content: String,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

// =========================================================
// Q&A board
// =========================================================

pub const BOARD_TITLE_MAX: usize = 100;
pub const BOARD_CONTENT_MIN: usize = 10;
pub const BOARD_CONTENT_MAX: usize = 1000;
pub const ADMIN_BOARD_REPLY_MIN: usize = 5;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardWriteRequest {
    pub email: String,
    pub title: String,
    pub content: String,
}

impl BoardWriteRequest {
    pub fn validate(&self) -> Result<(), String> {
        let title_len = self.title.chars().count();
        if title_len < 1 || title_len > BOARD_TITLE_MAX {
            return Err("제목은 1자 이상 100자 이하로 입력해주세요.".into());
        }
        let content_len = self.content.chars().count();
        if content_len < BOARD_CONTENT_MIN || content_len > BOARD_CONTENT_MAX {
            return Err("내용은 최소 10자 이상 1000자 이하로 작성해주세요.".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BoardUpdateRequest {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardResponse {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author_name: Option<String>,
    /// The author's email has been observed under two spellings.
    #[serde(default, alias = "email")]
    pub author_email: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl BoardResponse {
    pub fn is_answered(&self) -> bool {
        self.status.as_deref() == Some("ANSWERED")
    }

    /// Viewer-equals-author check. Controls UI visibility only; the backend
    /// enforces authorization on its own.
    pub fn is_authored_by(&self, viewer_email: &str) -> bool {
        !viewer_email.is_empty() && self.author_email.as_deref() == Some(viewer_email)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardReplyRequest {
    pub reply_content: String,
    pub author_name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardReplyResponse {
    pub id: i64,
    /// Posted as `replyContent`, served back as `content`.
    #[serde(default, alias = "replyContent")]
    pub content: String,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Date part of an ISO timestamp.
pub fn short_date(timestamp: &str) -> &str {
    timestamp.get(..10).unwrap_or(timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_content_min_is_mirrored() {
        assert!(validate_feedback_content(&"가".repeat(9)).is_err());
        assert!(validate_feedback_content(&"가".repeat(10)).is_ok());
        // Surrounding whitespace does not count toward the length
        assert!(validate_feedback_content(&format!("   {}   ", "가".repeat(9))).is_err());
    }

    #[test]
    fn board_write_title_bounds() {
        let req = |title: String, content: String| BoardWriteRequest {
            email: "user@example.com".into(),
            title,
            content,
        };
        let body = "가".repeat(10);
        assert!(req(String::new(), body.clone()).validate().is_err());
        assert!(req("가".repeat(100), body.clone()).validate().is_ok());
        assert!(req("가".repeat(101), body.clone()).validate().is_err());
    }

    #[test]
    fn board_write_content_bounds() {
        let req = |content: String| BoardWriteRequest {
            email: "user@example.com".into(),
            title: "페트병 질문".into(),
            content,
        };
        assert!(req("가".repeat(9)).validate().is_err());
        assert!(req("가".repeat(10)).validate().is_ok());
        assert!(req("가".repeat(1000)).validate().is_ok());
        assert!(req("가".repeat(1001)).validate().is_err());
    }

    #[test]
    fn signup_rules() {
        let ok = validate_signup("홍길동", "hong@example.com", "secret1", "secret1");
        assert!(ok.is_ok());
        assert!(validate_signup("", "hong@example.com", "secret1", "secret1").is_err());
        assert!(validate_signup("홍길동", "not-an-email", "secret1", "secret1").is_err());
        assert!(validate_signup("홍길동", "hong@example.com", "short", "short").is_err());
        assert!(validate_signup("홍길동", "hong@example.com", "secret1", "secret2").is_err());
    }

    #[test]
    fn feedback_content_composition_round_trips() {
        let composed =
            compose_feedback_content("페트병", "수원시 팔달구", "라벨 제거 안내가 잘못되었습니다");
        let (tag, body) = split_feedback_content(&composed);
        assert_eq!(tag, Some("[품목: 페트병 / 지역: 수원시 팔달구]"));
        assert_eq!(body, "라벨 제거 안내가 잘못되었습니다");
    }

    #[test]
    fn split_without_tag_passes_through() {
        let (tag, body) = split_feedback_content("태그 없는 본문");
        assert_eq!(tag, None);
        assert_eq!(body, "태그 없는 본문");
    }

    #[test]
    fn feedback_type_reaches_wire_with_backend_spelling() {
        let req = FeedbackRequest::new("뚜껑 분리 안내가 틀렸습니다".into(), 42, FeedbackKind::Content);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["feedBackType"], "CONTENT_ERROR");
        assert_eq!(json["trashDetailId"], 42);
    }

    #[test]
    fn board_author_email_accepts_both_spellings() {
        let a: BoardResponse =
            serde_json::from_str(r#"{"id":1,"title":"t","authorEmail":"hong@example.com"}"#).unwrap();
        let b: BoardResponse =
            serde_json::from_str(r#"{"id":1,"title":"t","email":"hong@example.com"}"#).unwrap();
        assert!(a.is_authored_by("hong@example.com"));
        assert!(b.is_authored_by("hong@example.com"));
        assert!(!a.is_authored_by("other@example.com"));
        assert!(!a.is_authored_by(""));
    }

    #[test]
    fn trash_detail_accepts_both_method_spellings() {
        let a: TrashDetail =
            serde_json::from_str(r#"{"id":7,"itemName":"페트병","method":"헹군 뒤 배출"}"#).unwrap();
        let b: TrashDetail =
            serde_json::from_str(r#"{"id":7,"itemName":"페트병","disposal_method":"헹군 뒤 배출"}"#)
                .unwrap();
        assert_eq!(a.method.as_deref(), Some("헹군 뒤 배출"));
        assert_eq!(a.method, b.method);
    }

    #[test]
    fn board_reply_accepts_both_content_spellings() {
        let served: BoardReplyResponse =
            serde_json::from_str(r#"{"id":3,"content":"답변입니다"}"#).unwrap();
        let echoed: BoardReplyResponse =
            serde_json::from_str(r#"{"id":3,"replyContent":"답변입니다"}"#).unwrap();
        assert_eq!(served.content, echoed.content);
    }

    #[test]
    fn schedule_summary_skips_absent_fields() {
        let schedule: DisposalSchedule = serde_json::from_str(
            r#"{"category":"플라스틱","disposalDay":"화요일/목요일","disposalTime":"저녁 8시 이후"}"#,
        )
        .unwrap();
        assert_eq!(schedule.summary().as_deref(), Some("화요일/목요일 저녁 8시 이후"));
        assert_eq!(DisposalSchedule::default().summary(), None);
    }

    #[test]
    fn short_date_takes_iso_date_part() {
        assert_eq!(short_date("2026-01-15T09:30:00"), "2026-01-15");
        assert_eq!(short_date("어제"), "어제");
    }
}
