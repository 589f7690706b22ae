use leptos::prelude::*;
use leptos::task::spawn_local;
use std::time::Duration;
use wasm_bindgen::JsValue;

use crate::nav::navigator::use_nav;
use crate::protocol::{
    ADMIN_BOARD_REPLY_MIN, ADMIN_FEEDBACK_REPLY_MIN, AdminFeedbackResponse, BoardReplyRequest,
    BoardReplyResponse, BoardResponse, FeedbackReplyRequest, FeedbackReplyResponse, short_date,
};
use crate::session::use_session;

/// 管理员答复的作者署名
const ADMIN_AUTHOR: &str = "관리자";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AdminTab {
    Boards,
    Feedbacks,
}

/// 管理员仪表盘。侧边标签在帖子管理与反馈处理两条独立的
/// 列表+详情流程之间切换。切换时丢弃已打开的详情并重新拉取
/// 活跃标签的列表；已被取代的请求返回时按 epoch 比较丢弃
/// （没有取消管线时的最小形态）。
#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let session = use_session();
    let nav = use_nav();

    let (active_tab, set_active_tab) = signal(AdminTab::Boards);
    let (boards, set_boards) = signal(Vec::<BoardResponse>::new());
    let (feedbacks, set_feedbacks) = signal(Vec::<AdminFeedbackResponse>::new());
    let (is_loading, set_is_loading) = signal(false);
    // 每次列表请求加 1；响应到达时值不同则丢弃
    let (epoch, set_epoch) = signal(0u64);

    let (selected_board, set_selected_board) = signal(Option::<BoardResponse>::None);
    let (board_replies, set_board_replies) = signal(Vec::<BoardReplyResponse>::new());
    let (selected_feedback, set_selected_feedback) = signal(Option::<AdminFeedbackResponse>::None);
    let (feedback_replies, set_feedback_replies) = signal(Vec::<FeedbackReplyResponse>::new());

    let (reply_content, set_reply_content) = signal(String::new());
    let (feedback_reply, set_feedback_reply) = signal(String::new());
    let (editing_reply_id, set_editing_reply_id) = signal(Option::<i64>::None);
    let (edit_content, set_edit_content) = signal(String::new());
    let (notification, set_notification) = signal(Option::<(String, bool)>::None); // 消息内容, 是否出错

    let load_list = move || {
        let tab = active_tab.get_untracked();
        let this_epoch = epoch.get_untracked() + 1;
        set_epoch.set(this_epoch);
        set_is_loading.set(true);
        let api = session.api();
        spawn_local(async move {
            match tab {
                AdminTab::Boards => {
                    let result = api.search_boards("").await;
                    if epoch.get_untracked() != this_epoch {
                        return; // 标签已经切换
                    }
                    match result {
                        Ok(list) => set_boards.set(list),
                        Err(e) => set_notification
                            .set(Some((format!("게시글 목록을 불러오지 못했습니다: {}", e), true))),
                    }
                }
                AdminTab::Feedbacks => {
                    let result = api.admin_feedbacks().await;
                    if epoch.get_untracked() != this_epoch {
                        return;
                    }
                    match result {
                        Ok(list) => set_feedbacks.set(list),
                        Err(e) => set_notification
                            .set(Some((format!("피드백 목록을 불러오지 못했습니다: {}", e), true))),
                    }
                }
            }
            set_is_loading.set(false);
        });
    };

    // 标签切换（及首次进入）：丢弃详情并重新查询活跃标签的列表
    Effect::new(move |_| {
        let _ = active_tab.get();
        set_selected_board.set(None);
        set_selected_feedback.set(None);
        set_editing_reply_id.set(None);
        load_list();
    });

    // 3秒后清除通知
    Effect::new(move |_| {
        if notification.get().is_some() {
            set_timeout(move || set_notification.set(None), Duration::from_secs(3));
        }
    });

    let open_board = move |id: i64| {
        let api = session.api();
        spawn_local(async move {
            match api.board(id).await {
                Ok(found) => {
                    set_selected_board.set(Some(found));
                    match api.board_replies(id).await {
                        Ok(list) => set_board_replies.set(list),
                        Err(e) => {
                            web_sys::console::error_1(&JsValue::from_str(&format!(
                                "[admin] board reply fetch failed: {}",
                                e
                            )));
                            set_board_replies.set(Vec::new());
                        }
                    }
                }
                Err(e) => set_notification
                    .set(Some((format!("상세 정보를 가져오지 못했습니다: {}", e), true))),
            }
        });
    };

    let load_feedback_replies = move |id: i64| {
        let api = session.api();
        spawn_local(async move {
            match api.feedback_replies(id).await {
                Ok(list) => set_feedback_replies.set(list),
                Err(e) => {
                    web_sys::console::error_1(&JsValue::from_str(&format!(
                        "[admin] feedback reply fetch failed: {}",
                        e
                    )));
                    set_feedback_replies.set(Vec::new());
                }
            }
        });
    };

    let open_feedback = move |feedback: AdminFeedbackResponse| {
        let id = feedback.id;
        set_selected_feedback.set(Some(feedback));
        load_feedback_replies(id);
    };

    let submit_board_reply = move |_| {
        let content = reply_content.get_untracked().trim().to_string();
        if content.chars().count() < ADMIN_BOARD_REPLY_MIN {
            set_notification.set(Some(("답변은 5자 이상 입력해야 합니다.".to_string(), true)));
            return;
        }
        let Some(board_id) = selected_board.with_untracked(|b| b.as_ref().map(|b| b.id)) else {
            return;
        };
        let api = session.api();
        spawn_local(async move {
            let request = BoardReplyRequest {
                reply_content: content,
                author_name: ADMIN_AUTHOR.to_string(),
            };
            match api.save_board_reply(board_id, &request).await {
                Ok(()) => {
                    set_reply_content.set(String::new());
                    set_notification.set(Some(("답변이 등록되었습니다.".to_string(), false)));
                    open_board(board_id);
                    load_list(); // 刷新列表上的答复状态徽标
                }
                Err(e) => set_notification.set(Some((format!("답변 등록 실패: {}", e), true))),
            }
        });
    };

    let delete_board = move |id: i64| {
        let confirmed = web_sys::window().is_some_and(|w| {
            w.confirm_with_message("정말로 게시글을 삭제하시겠습니까?").unwrap_or(false)
        });
        if !confirmed {
            return;
        }
        let api = session.api();
        spawn_local(async move {
            // 管理员仅凭令牌删除
            match api.delete_board(id, None).await {
                Ok(()) => {
                    set_boards.update(|list| list.retain(|b| b.id != id));
                    set_selected_board.set(None);
                    set_notification.set(Some(("게시글이 삭제되었습니다.".to_string(), false)));
                }
                Err(e) => set_notification.set(Some((format!("게시글 삭제 실패: {}", e), true))),
            }
        });
    };

    let submit_feedback_reply = move |_| {
        let content = feedback_reply.get_untracked().trim().to_string();
        if content.chars().count() < ADMIN_FEEDBACK_REPLY_MIN {
            set_notification.set(Some(("피드백 답변은 10자 이상 입력해주세요.".to_string(), true)));
            return;
        }
        let Some(feedback_id) = selected_feedback.with_untracked(|f| f.as_ref().map(|f| f.id))
        else {
            return;
        };
        let api = session.api();
        spawn_local(async move {
            let request = FeedbackReplyRequest {
                content,
                author_name: ADMIN_AUTHOR.to_string(),
            };
            match api.save_feedback_reply(feedback_id, &request).await {
                Ok(()) => {
                    set_feedback_reply.set(String::new());
                    set_notification.set(Some(("조치가 저장되었습니다.".to_string(), false)));
                    load_feedback_replies(feedback_id);
                    load_list();
                }
                Err(e) => set_notification.set(Some((format!("조치 저장 실패: {}", e), true))),
            }
        });
    };

    let update_feedback_reply = move |reply_id: i64| {
        let Some(feedback_id) = selected_feedback.with_untracked(|f| f.as_ref().map(|f| f.id))
        else {
            return;
        };
        let api = session.api();
        let request = FeedbackReplyRequest {
            content: edit_content.get_untracked().trim().to_string(),
            author_name: ADMIN_AUTHOR.to_string(),
        };
        spawn_local(async move {
            match api.update_feedback_reply(reply_id, &request).await {
                Ok(()) => {
                    set_editing_reply_id.set(None);
                    load_feedback_replies(feedback_id);
                }
                Err(e) => set_notification.set(Some((format!("수정 실패: {}", e), true))),
            }
        });
    };

    let delete_feedback_reply = move |reply_id: i64| {
        let confirmed = web_sys::window()
            .is_some_and(|w| w.confirm_with_message("이 답변을 삭제하시겠습니까?").unwrap_or(false));
        if !confirmed {
            return;
        }
        let Some(feedback_id) = selected_feedback.with_untracked(|f| f.as_ref().map(|f| f.id))
        else {
            return;
        };
        let api = session.api();
        spawn_local(async move {
            match api.delete_feedback_reply(reply_id).await {
                Ok(()) => {
                    load_feedback_replies(feedback_id);
                    load_list();
                }
                Err(e) => set_notification.set(Some((format!("삭제 실패: {}", e), true))),
            }
        });
    };

    let board_detail = move |board: BoardResponse| {
        let board_id = board.id;
        let title = board.title.clone();
        let content = board.content.clone();
        view! {
            <div class="max-w-3xl mx-auto">
                <button
                    on:click=move |_| set_selected_board.set(None)
                    class="flex items-center gap-2 text-slate-500 hover:text-slate-800 mb-6 font-bold"
                >
                    "← 목록으로 돌아가기"
                </button>
                <div class="bg-white rounded-3xl shadow-sm border border-slate-100 p-8 mb-6">
                    <div class="flex justify-between items-start mb-6">
                        <div>
                            <span class="text-green-600 text-sm font-black uppercase tracking-widest mb-2 block">
                                "Q&A Detail"
                            </span>
                            <h3 class="text-2xl font-black text-slate-900">{title}</h3>
                        </div>
                        <button
                            on:click=move |_| delete_board(board_id)
                            class="p-3 text-red-400 hover:bg-red-50 rounded-xl font-bold"
                        >
                            "삭제"
                        </button>
                    </div>
                    <div class="p-6 bg-slate-50 rounded-2xl mb-2 text-slate-700 leading-relaxed font-medium whitespace-pre-wrap">
                        {content}
                    </div>
                </div>

                <div class="mb-6 space-y-4">
                    <h4 class="font-black text-slate-900 px-2">"등록된 답변"</h4>
                    <Show when=move || board_replies.get().is_empty()>
                        <p class="px-2 text-sm text-slate-400">"아직 답변이 없습니다."</p>
                    </Show>
                    <For
                        each=move || board_replies.get()
                        key=|reply| reply.id
                        children=move |reply: BoardReplyResponse| {
                            let author = reply.author_name.clone().unwrap_or_else(|| ADMIN_AUTHOR.to_string());
                            let date = reply.created_at.clone().map(|d| short_date(&d).to_string());
                            view! {
                                <div class="bg-blue-50 border border-blue-100 rounded-2xl p-6 shadow-sm">
                                    <div class="flex justify-between items-center mb-3">
                                        <span class="font-bold text-blue-700 text-sm">"RE: " {author}</span>
                                        {date.map(|date| {
                                            view! {
                                                <span class="text-[11px] text-blue-400 font-bold">{date}</span>
                                            }
                                        })}
                                    </div>
                                    <p class="text-slate-700 bg-white/50 p-4 rounded-xl">{reply.content.clone()}</p>
                                </div>
                            }
                        }
                    />
                </div>

                <div class="bg-white rounded-3xl shadow-sm border border-slate-100 p-8">
                    <textarea
                        placeholder="답변을 입력하세요. (5자 이상)"
                        prop:value=reply_content
                        on:input=move |ev| set_reply_content.set(event_target_value(&ev))
                        class="w-full h-32 p-4 bg-slate-50 border-none rounded-2xl mb-2 resize-none"
                    ></textarea>
                    <button
                        on:click=submit_board_reply
                        class="w-full py-4 bg-slate-900 text-white rounded-2xl font-bold flex items-center justify-center gap-2"
                    >
                        "답변 등록하기"
                    </button>
                </div>
            </div>
        }
    };

    let feedback_detail = move |feedback: AdminFeedbackResponse| {
        let author = feedback.author_name.clone().unwrap_or_else(|| "작성자 미상".to_string());
        let date = feedback.created_at.clone().map(|d| short_date(&d).to_string());
        let content = feedback.content.clone();
        view! {
            <div class="max-w-3xl mx-auto">
                <button
                    on:click=move |_| set_selected_feedback.set(None)
                    class="flex items-center gap-2 text-slate-500 hover:text-slate-800 mb-6 font-bold"
                >
                    "← 목록으로 돌아가기"
                </button>
                <div class="bg-white rounded-3xl shadow-sm border border-slate-100 p-8 mb-6">
                    <span class="text-blue-600 text-sm font-black uppercase tracking-widest mb-2 block">
                        "User Feedback"
                    </span>
                    <div class="flex justify-between items-center mb-4">
                        <h3 class="text-xl font-bold text-slate-900">"작성자: " {author}</h3>
                        {date.map(|date| {
                            view! { <span class="text-sm text-slate-400 font-bold">{date}</span> }
                        })}
                    </div>
                    <div class="p-6 bg-blue-50 rounded-2xl text-slate-700 font-medium leading-relaxed whitespace-pre-wrap">
                        {content}
                    </div>
                </div>

                <Show when=move || !feedback_replies.get().is_empty()>
                    <div class="mb-6 space-y-4">
                        <h4 class="font-black text-slate-900 px-2">"처리된 조치 내역"</h4>
                        <For
                            each=move || feedback_replies.get()
                            key=|reply| reply.id
                            children=move |reply: FeedbackReplyResponse| {
                                let reply_id = reply.id;
                                let author = reply.author_name.clone().unwrap_or_else(|| ADMIN_AUTHOR.to_string());
                                let content = reply.content.clone();
                                let content_for_edit = reply.content.clone();
                                view! {
                                    <div class="bg-green-50 border border-green-100 rounded-2xl p-6">
                                        <div class="flex justify-between mb-3">
                                            <span class="font-bold text-green-700">{author}</span>
                                            <div class="flex gap-2">
                                                <button
                                                    on:click=move |_| {
                                                        set_editing_reply_id.set(Some(reply_id));
                                                        set_edit_content.set(content_for_edit.clone());
                                                    }
                                                    class="text-slate-400 hover:text-blue-500 text-sm font-bold"
                                                >
                                                    "수정"
                                                </button>
                                                <button
                                                    on:click=move |_| delete_feedback_reply(reply_id)
                                                    class="text-slate-400 hover:text-red-500 text-sm font-bold"
                                                >
                                                    "삭제"
                                                </button>
                                            </div>
                                        </div>
                                        {move || {
                                            if editing_reply_id.get() == Some(reply_id) {
                                                view! {
                                                    <div class="flex flex-col gap-2">
                                                        <textarea
                                                            prop:value=edit_content
                                                            on:input=move |ev| set_edit_content.set(event_target_value(&ev))
                                                            class="w-full p-3 border-2 border-green-200 rounded-xl resize-none"
                                                        ></textarea>
                                                        <div class="flex justify-end gap-2">
                                                            <button
                                                                on:click=move |_| update_feedback_reply(reply_id)
                                                                class="px-3 py-1 bg-green-600 text-white rounded-lg text-sm"
                                                            >
                                                                "저장"
                                                            </button>
                                                            <button
                                                                on:click=move |_| set_editing_reply_id.set(None)
                                                                class="px-3 py-1 bg-slate-200 rounded-lg text-sm"
                                                            >
                                                                "취소"
                                                            </button>
                                                        </div>
                                                    </div>
                                                }
                                                .into_any()
                                            } else {
                                                let content = content.clone();
                                                view! {
                                                    <p class="text-slate-700 whitespace-pre-wrap">{content}</p>
                                                }
                                                .into_any()
                                            }
                                        }}
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>

                <div class="bg-white rounded-3xl shadow-sm border border-slate-100 p-8">
                    <h4 class="font-black text-slate-900 mb-4">"신규 조치 등록"</h4>
                    <textarea
                        placeholder="사용자 피드백에 대한 조치 내용을 입력하세요. (10자 이상)"
                        prop:value=feedback_reply
                        on:input=move |ev| set_feedback_reply.set(event_target_value(&ev))
                        class="w-full h-32 p-4 bg-slate-50 border-none rounded-2xl mb-4 resize-none font-medium"
                    ></textarea>
                    <button
                        on:click=submit_feedback_reply
                        class="w-full py-4 bg-slate-900 text-white rounded-2xl font-bold hover:bg-slate-800 transition-all shadow-lg"
                    >
                        "조치 기록 저장"
                    </button>
                </div>
            </div>
        }
    };

    let list_view = move || {
        view! {
            <div>
                <header class="mb-8">
                    <h2 class="text-3xl font-black text-slate-900">
                        {move || match active_tab.get() {
                            AdminTab::Boards => "게시판 관리",
                            AdminTab::Feedbacks => "피드백 관리",
                        }}
                    </h2>
                    <p class="text-slate-500 font-medium">"RecycleMap 관리자 대시보드"</p>
                </header>

                <Show when=move || is_loading.get()>
                    <div class="flex justify-center items-center py-20">
                        <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-green-500"></div>
                    </div>
                </Show>

                <Show when=move || !is_loading.get()>
                    <div class="bg-white rounded-[2rem] shadow-sm border border-slate-100 overflow-hidden">
                        <table class="w-full text-left">
                            <thead class="bg-slate-50 border-b">
                                <tr>
                                    <th class="px-6 py-4 text-xs font-black text-slate-400 uppercase">"ID"</th>
                                    <th class="px-6 py-4 text-xs font-black text-slate-400 uppercase">
                                        {move || match active_tab.get() {
                                            AdminTab::Boards => "제목",
                                            AdminTab::Feedbacks => "피드백 내용",
                                        }}
                                    </th>
                                    <th class="px-6 py-4 text-xs font-black text-slate-400 uppercase text-center">
                                        {move || match active_tab.get() {
                                            AdminTab::Boards => "상태",
                                            AdminTab::Feedbacks => "작성자",
                                        }}
                                    </th>
                                    <th class="px-6 py-4 text-xs font-black text-slate-400 uppercase text-center">
                                        "날짜"
                                    </th>
                                </tr>
                            </thead>
                            {move || match active_tab.get() {
                                AdminTab::Boards => {
                                    view! {
                                        <tbody>
                                            <Show when=move || boards.get().is_empty()>
                                                <tr>
                                                    <td colspan="4" class="text-center py-8 text-slate-400">
                                                        "등록된 게시글이 없습니다."
                                                    </td>
                                                </tr>
                                            </Show>
                                            <For
                                                each=move || boards.get()
                                                key=|board| board.id
                                                children=move |board: BoardResponse| {
                                                    let id = board.id;
                                                    let title = board.title.clone();
                                                    let answered = board.is_answered();
                                                    let date = board
                                                        .created_at
                                                        .clone()
                                                        .map(|d| short_date(&d).to_string())
                                                        .unwrap_or_default();
                                                    view! {
                                                        <tr
                                                            on:click=move |_| open_board(id)
                                                            class="hover:bg-slate-50 cursor-pointer"
                                                        >
                                                            <td class="px-6 py-4 text-sm font-bold text-slate-400">
                                                                "#" {id}
                                                            </td>
                                                            <td class="px-6 py-4 text-sm font-bold text-slate-900">
                                                                {title}
                                                            </td>
                                                            <td class="px-6 py-4 text-center">
                                                                <span class=move || {
                                                                    if answered {
                                                                        "px-3 py-1 rounded-full text-[11px] font-black bg-green-100 text-green-600"
                                                                    } else {
                                                                        "px-3 py-1 rounded-full text-[11px] font-black bg-amber-100 text-amber-600"
                                                                    }
                                                                }>
                                                                    {if answered { "답변완료" } else { "대기중" }}
                                                                </span>
                                                            </td>
                                                            <td class="px-6 py-4 text-center text-xs text-slate-400 font-bold">
                                                                {date}
                                                            </td>
                                                        </tr>
                                                    }
                                                }
                                            />
                                        </tbody>
                                    }
                                        .into_any()
                                }
                                AdminTab::Feedbacks => {
                                    view! {
                                        <tbody>
                                            <Show when=move || feedbacks.get().is_empty()>
                                                <tr>
                                                    <td colspan="4" class="text-center py-8 text-slate-400">
                                                        "접수된 피드백이 없습니다."
                                                    </td>
                                                </tr>
                                            </Show>
                                            <For
                                                each=move || feedbacks.get()
                                                key=|feedback| feedback.id
                                                children=move |feedback: AdminFeedbackResponse| {
                                                    let id = feedback.id;
                                                    let answered = feedback.is_answered();
                                                    let author = feedback
                                                        .author_name
                                                        .clone()
                                                        .unwrap_or_else(|| "작성자 미상".to_string());
                                                    let content = feedback.content.clone();
                                                    let date = feedback
                                                        .created_at
                                                        .clone()
                                                        .map(|d| short_date(&d).to_string())
                                                        .unwrap_or_default();
                                                    view! {
                                                        <tr
                                                            on:click=move |_| open_feedback(feedback.clone())
                                                            class="hover:bg-slate-50 cursor-pointer"
                                                        >
                                                            <td class="px-6 py-4 text-sm font-bold text-slate-400">
                                                                "#" {id}
                                                            </td>
                                                            <td class="px-6 py-4 text-sm font-medium text-slate-900">
                                                                <div class="max-w-md truncate">{content}</div>
                                                            </td>
                                                            <td class="px-6 py-4 text-center text-sm text-slate-600">
                                                                {author}
                                                                <Show when=move || answered>
                                                                    <span class="ml-2 px-2 py-0.5 rounded-full text-[10px] font-black bg-blue-100 text-blue-600">
                                                                        "조치완료"
                                                                    </span>
                                                                </Show>
                                                            </td>
                                                            <td class="px-6 py-4 text-center text-xs text-slate-400 font-bold">
                                                                {date}
                                                            </td>
                                                        </tr>
                                                    }
                                                }
                                            />
                                        </tbody>
                                    }
                                        .into_any()
                                }
                            }}
                        </table>
                    </div>
                </Show>
            </div>
        }
    };

    view! {
        <div class="min-h-screen bg-gray-50 flex">
            // 通知提示框
            <Show when=move || notification.get().is_some()>
                <div class="fixed top-6 right-6 z-50">
                    <div class=move || {
                        let (_, is_err) = notification.get().unwrap_or_default();
                        if is_err {
                            "px-6 py-4 rounded-2xl shadow-lg bg-red-600 text-white font-bold text-sm"
                        } else {
                            "px-6 py-4 rounded-2xl shadow-lg bg-green-600 text-white font-bold text-sm"
                        }
                    }>
                        {move || notification.get().map(|(message, _)| message).unwrap_or_default()}
                    </div>
                </div>
            </Show>

            // 侧边栏
            <aside class="w-64 bg-slate-900 text-slate-300 flex flex-col fixed h-full">
                <div class="p-6 border-b border-slate-800 flex items-center gap-3">
                    <div class="w-8 h-8 bg-green-500 rounded-lg flex items-center justify-center text-white font-black">
                        "A"
                    </div>
                    <span class="font-bold text-white text-lg tracking-tight">"Admin Center"</span>
                </div>
                <nav class="flex-1 p-4 space-y-2">
                    <button
                        on:click=move |_| set_active_tab.set(AdminTab::Boards)
                        class=move || {
                            if active_tab.get() == AdminTab::Boards {
                                "w-full flex items-center gap-3 px-4 py-3 rounded-xl transition-all bg-green-600 text-white"
                            } else {
                                "w-full flex items-center gap-3 px-4 py-3 rounded-xl transition-all hover:bg-slate-800"
                            }
                        }
                    >
                        <span class="font-medium">"게시판 관리"</span>
                    </button>
                    <button
                        on:click=move |_| set_active_tab.set(AdminTab::Feedbacks)
                        class=move || {
                            if active_tab.get() == AdminTab::Feedbacks {
                                "w-full flex items-center gap-3 px-4 py-3 rounded-xl transition-all bg-green-600 text-white"
                            } else {
                                "w-full flex items-center gap-3 px-4 py-3 rounded-xl transition-all hover:bg-slate-800"
                            }
                        }
                    >
                        <span class="font-medium">"사용자 피드백"</span>
                    </button>
                </nav>
                <div class="p-4 border-t border-slate-800">
                    <button
                        on:click=move |_| nav.go_home()
                        class="w-full flex items-center gap-3 px-4 py-3 text-slate-400 hover:text-white transition-colors"
                    >
                        "← 사용자 페이지로"
                    </button>
                </div>
            </aside>

            <main class="flex-1 ml-64 p-8 overflow-y-auto">
                {move || {
                    if let Some(board) = selected_board.get() {
                        board_detail(board).into_any()
                    } else if let Some(feedback) = selected_feedback.get() {
                        feedback_detail(feedback).into_any()
                    } else {
                        list_view().into_any()
                    }
                }}
            </main>
        </div>
    }
}
