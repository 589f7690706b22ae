use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;

use crate::nav::navigator::use_nav;
use crate::nav::screen::Screen;
use crate::protocol::{
    BoardReplyRequest, BoardReplyResponse, BoardResponse, BoardUpdateRequest, short_date,
};
use crate::session::use_session;

/// 帖子详情 + 答复列表。修改/删除按钮只按查看者邮箱与
/// 作者邮箱是否一致控制展示；这只是 UI 便利，
/// 权限由后端独立验证。
#[component]
pub fn QaDetailPage(post_id: i64) -> impl IntoView {
    let session = use_session();
    let nav = use_nav();

    let (post, set_post) = signal(Option::<BoardResponse>::None);
    let (replies, set_replies) = signal(Vec::<BoardReplyResponse>::new());
    let (is_loading, set_is_loading) = signal(true);

    let (is_editing, set_is_editing) = signal(false);
    let (edit_title, set_edit_title) = signal(String::new());
    let (edit_content, set_edit_content) = signal(String::new());
    let (new_reply, set_new_reply) = signal(String::new());
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    // 依次拉取帖子正文与答复列表
    let load = move || {
        set_is_loading.set(true);
        let api = session.api();
        spawn_local(async move {
            match api.board(post_id).await {
                Ok(found) => {
                    set_edit_title.set(found.title.clone());
                    set_edit_content.set(found.content.clone());
                    set_post.set(Some(found));
                    match api.board_replies(post_id).await {
                        Ok(list) => set_replies.set(list),
                        Err(e) => {
                            web_sys::console::error_1(&JsValue::from_str(&format!(
                                "[qa-detail] reply fetch failed: {}",
                                e
                            )));
                        }
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(&JsValue::from_str(&format!(
                        "[qa-detail] fetch failed: {}",
                        e
                    )));
                    set_post.set(None);
                }
            }
            set_is_loading.set(false);
        });
    };

    Effect::new(move |_| load());

    let viewer_email = session.email().unwrap_or_default();
    let is_author = Memo::new(move |_| {
        post.with(|p| p.as_ref().is_some_and(|p| p.is_authored_by(&viewer_email)))
    });

    let handle_update = move |_| {
        let Some(email) = session.email() else {
            return;
        };
        set_error_msg.set(None);
        let api = session.api();
        let request = BoardUpdateRequest {
            title: edit_title.get_untracked().trim().to_string(),
            content: edit_content.get_untracked().trim().to_string(),
        };
        spawn_local(async move {
            match api.update_board(post_id, &email, &request).await {
                Ok(()) => {
                    set_is_editing.set(false);
                    load();
                }
                Err(e) => set_error_msg.set(Some(e.to_string())),
            }
        });
    };

    let handle_delete = move |_| {
        let confirmed = web_sys::window()
            .is_some_and(|w| w.confirm_with_message("정말로 삭제하시겠습니까?").unwrap_or(false));
        if !confirmed {
            return;
        }
        let Some(email) = session.email() else {
            return;
        };
        let api = session.api();
        spawn_local(async move {
            match api.delete_board(post_id, Some(&email)).await {
                Ok(()) => nav.navigate(Screen::QaList),
                Err(_) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message("삭제에 실패했습니다.");
                    }
                }
            }
        });
    };

    let handle_reply_submit = move |_| {
        let reply = new_reply.get_untracked().trim().to_string();
        if reply.is_empty() {
            return;
        }
        // 没有昵称时用邮箱前缀作为作者名
        let author_name = session.nickname().unwrap_or_else(|| {
            session
                .email()
                .and_then(|email| email.split('@').next().map(str::to_string))
                .unwrap_or_default()
        });
        let api = session.api();
        spawn_local(async move {
            let request = BoardReplyRequest {
                reply_content: reply,
                author_name,
            };
            match api.save_board_reply(post_id, &request).await {
                Ok(()) => {
                    set_new_reply.set(String::new());
                    load();
                }
                Err(_) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message("답변 등록에 실패했습니다.");
                    }
                }
            }
        });
    };

    let handle_delete_reply = move |reply_id: i64| {
        let confirmed = web_sys::window()
            .is_some_and(|w| w.confirm_with_message("답변을 삭제하시겠습니까?").unwrap_or(false));
        if !confirmed {
            return;
        }
        let api = session.api();
        spawn_local(async move {
            match api.delete_board_reply(reply_id).await {
                Ok(()) => load(),
                Err(_) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message("삭제 권한이 없습니다.");
                    }
                }
            }
        });
    };

    view! {
        <div class="min-h-screen bg-gray-50 pb-20">
            <div class="bg-white sticky top-0 z-10 border-b border-gray-100">
                <div class="max-w-3xl mx-auto px-4 py-4 flex items-center justify-between">
                    <button
                        on:click=move |_| nav.navigate(Screen::QaList)
                        class="flex items-center gap-2 font-bold text-gray-600"
                    >
                        "← 뒤로가기"
                    </button>
                    <Show when=move || !is_editing.get() && is_author.get()>
                        <div class="flex gap-2">
                            <button
                                on:click=move |_| set_is_editing.set(true)
                                class="text-blue-600 text-sm font-bold"
                            >
                                "수정"
                            </button>
                            <button on:click=handle_delete class="text-red-600 text-sm font-bold">
                                "삭제"
                            </button>
                        </div>
                    </Show>
                </div>
            </div>

            <main class="max-w-3xl mx-auto px-4 py-8">
                <Show when=move || is_loading.get()>
                    <div class="flex justify-center items-center py-20">
                        <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-green-500"></div>
                    </div>
                </Show>

                <Show when=move || !is_loading.get() && post.get().is_none()>
                    <div class="bg-white rounded-2xl p-8 text-center border border-gray-100">
                        <p class="text-gray-500">"게시글을 불러오지 못했습니다."</p>
                    </div>
                </Show>

                {move || {
                    (!is_loading.get())
                        .then(|| post.get())
                        .flatten()
                        .map(|p| {
                            let author = p.author_name.clone().unwrap_or_else(|| "작성자 미상".to_string());
                            let date = p.created_at.clone().map(|d| short_date(&d).to_string());
                            view! {
                                <div class="bg-white rounded-[2rem] p-8 shadow-sm border border-gray-100 mb-8">
                                    {move || {
                                        if is_editing.get() {
                                            view! {
                                                <div class="space-y-4">
                                                    <input
                                                        class="w-full text-xl font-bold border-b border-gray-200 p-2 focus:outline-none focus:border-green-500"
                                                        prop:value=edit_title
                                                        on:input=move |ev| set_edit_title.set(event_target_value(&ev))
                                                    />
                                                    <textarea
                                                        class="w-full min-h-[200px] p-2 resize-none focus:outline-none"
                                                        prop:value=edit_content
                                                        on:input=move |ev| set_edit_content.set(event_target_value(&ev))
                                                    ></textarea>
                                                    <Show when=move || error_msg.get().is_some()>
                                                        <p class="text-sm text-red-600 font-bold">
                                                            {move || error_msg.get().unwrap_or_default()}
                                                        </p>
                                                    </Show>
                                                    <div class="flex justify-end gap-2">
                                                        <button
                                                            on:click=move |_| set_is_editing.set(false)
                                                            class="px-4 py-2 bg-gray-100 rounded-xl font-bold"
                                                        >
                                                            "취소"
                                                        </button>
                                                        <button
                                                            on:click=handle_update
                                                            class="px-4 py-2 bg-green-600 text-white rounded-xl font-bold"
                                                        >
                                                            "저장"
                                                        </button>
                                                    </div>
                                                </div>
                                            }
                                            .into_any()
                                        } else {
                                            let author = author.clone();
                                            let date = date.clone();
                                            let title = p.title.clone();
                                            let content = p.content.clone();
                                            view! {
                                                <h2 class="text-2xl font-black mb-4">{title}</h2>
                                                <p class="text-gray-700 leading-relaxed whitespace-pre-wrap mb-8">
                                                    {content}
                                                </p>
                                                <div class="flex items-center gap-2 text-sm text-gray-400">
                                                    <span>{author}</span>
                                                    {date.map(|date| view! { <span class="ml-2">{date}</span> })}
                                                </div>
                                            }
                                            .into_any()
                                        }
                                    }}
                                </div>

                                // 答复区
                                <div class="space-y-6">
                                    <div class="flex items-center gap-2 px-2">
                                        <h3 class="font-bold text-gray-800">
                                            "답변 " {move || replies.get().len()} "개"
                                        </h3>
                                    </div>

                                    <Show when=move || replies.get().is_empty()>
                                        <div class="py-10 text-center text-gray-400 text-sm">
                                            "아직 등록된 답변이 없습니다. 첫 답변을 남겨보세요!"
                                        </div>
                                    </Show>

                                    <div class="space-y-4">
                                        <For
                                            each=move || replies.get()
                                            key=|reply| reply.id
                                            children=move |reply: BoardReplyResponse| {
                                                let reply_id = reply.id;
                                                let author = reply
                                                    .author_name
                                                    .clone()
                                                    .unwrap_or_else(|| "익명".to_string());
                                                let date = reply
                                                    .created_at
                                                    .clone()
                                                    .map(|d| short_date(&d).to_string());
                                                view! {
                                                    <div class="bg-white border border-gray-100 rounded-2xl p-6 shadow-sm">
                                                        <div class="flex justify-between items-start mb-2">
                                                            <span class="font-bold text-sm text-gray-700">{author}</span>
                                                            <button
                                                                on:click=move |_| handle_delete_reply(reply_id)
                                                                class="text-gray-300 hover:text-red-500"
                                                            >
                                                                "삭제"
                                                            </button>
                                                        </div>
                                                        <p class="text-gray-600 text-sm leading-relaxed">
                                                            {reply.content.clone()}
                                                        </p>
                                                        {date.map(|date| {
                                                            view! {
                                                                <span class="text-[10px] text-gray-300 block mt-2">{date}</span>
                                                            }
                                                        })}
                                                    </div>
                                                }
                                            }
                                        />
                                    </div>

                                    // 答复输入框
                                    <div class="mt-8 bg-white border-2 border-green-50 rounded-2xl p-4 shadow-sm">
                                        <textarea
                                            placeholder="도움이 되는 답변을 남겨주세요."
                                            prop:value=new_reply
                                            on:input=move |ev| set_new_reply.set(event_target_value(&ev))
                                            class="w-full h-24 p-2 resize-none focus:outline-none text-sm"
                                        ></textarea>
                                        <div class="flex justify-end mt-2">
                                            <button
                                                on:click=handle_reply_submit
                                                disabled=move || new_reply.get().trim().is_empty()
                                                class="flex items-center gap-2 px-6 py-2 bg-slate-900 text-white rounded-xl font-bold text-sm disabled:bg-gray-200 transition-colors"
                                            >
                                                "답변 등록"
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            }
                            .into_any()
                        })
                }}
            </main>
        </div>
    }
}
