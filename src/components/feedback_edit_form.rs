use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::model::EditingFeedback;
use crate::nav::navigator::use_nav;
use crate::nav::screen::Screen;
use crate::protocol::{
    FeedbackKind, FeedbackRequest, split_feedback_content, validate_feedback_content,
};
use crate::session::use_session;

/// 反馈修改画面。`[품목: … / 지역: …]` 上下文前缀在这里被剥离，
/// 只有纯文本内容可编辑；更新时外键 trashDetailId 原样回传。
#[component]
pub fn FeedbackEditPage(editing: EditingFeedback) -> impl IntoView {
    let session = use_session();
    let nav = use_nav();

    let (info_tag, initial_body) = {
        let (tag, body) = split_feedback_content(&editing.content);
        (tag.map(str::to_string), body.to_string())
    };

    let (body, set_body) = signal(initial_body);
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let feedback_id = editing.id;
    let trash_detail_id = editing.trash_detail_id;
    let info_tag = StoredValue::new(info_tag);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);

        let pure = body.get_untracked().trim().to_string();
        if let Err(message) = validate_feedback_content(&pure) {
            set_error_msg.set(Some(message));
            return;
        }

        set_is_submitting.set(true);
        let api = session.api();
        // 修改流程固定以 CONTENT_ERROR 重新提交
        let request = FeedbackRequest::new(pure, trash_detail_id, FeedbackKind::Content);

        spawn_local(async move {
            match api.update_feedback(feedback_id, &request).await {
                Ok(()) => nav.navigate(Screen::MyFeedback),
                Err(e) => set_error_msg.set(Some(e.to_string())),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="min-h-screen bg-white">
            <div class="bg-white border-b sticky top-0 z-10">
                <div class="max-w-2xl mx-auto px-4 h-16 flex items-center justify-between">
                    <button
                        on:click=move |_| nav.navigate(Screen::MyFeedback)
                        class="p-2 -ml-2 hover:bg-gray-100 rounded-full text-gray-600 transition-colors"
                    >
                        "←"
                    </button>
                    <span class="font-bold text-gray-900">"피드백 수정"</span>
                    <div class="w-10"></div>
                </div>
            </div>

            <main class="max-w-2xl mx-auto px-4 py-8">
                // 品目/地区信息固定展示，不可编辑
                {info_tag.get_value().map(|tag| {
                    let label = tag.trim_matches(['[', ']']).to_string();
                    view! {
                        <div class="mb-6 p-4 bg-blue-50 border border-blue-100 rounded-2xl flex gap-3 items-start">
                            <span class="text-blue-500 mt-0.5">"ℹ"</span>
                            <div>
                                <p class="text-xs text-blue-600 font-bold uppercase tracking-wider mb-1">
                                    "수정 중인 대상"
                                </p>
                                <p class="text-sm text-blue-900 font-medium">{label}</p>
                            </div>
                        </div>
                    }
                })}

                <div class="flex items-center gap-3 mb-8">
                    <div class="w-12 h-12 bg-green-100 rounded-2xl flex items-center justify-center">
                        <span class="text-2xl">"💬"</span>
                    </div>
                    <div>
                        <h2 class="text-xl font-bold text-gray-900">"내용만 수정하기"</h2>
                        <p class="text-sm text-gray-500">"배출 규칙에 대한 의견을 자유롭게 수정해주세요."</p>
                    </div>
                </div>

                <form on:submit=on_submit class="space-y-6">
                    <textarea
                        placeholder="피드백 내용을 10자 이상 입력하세요..."
                        prop:value=body
                        on:input=move |ev| set_body.set(event_target_value(&ev))
                        class="w-full min-h-[250px] p-6 bg-gray-50 border-2 border-gray-100 rounded-3xl focus:outline-none focus:border-green-500 focus:bg-white transition-all text-gray-700 leading-relaxed shadow-inner"
                    ></textarea>

                    <Show when=move || error_msg.get().is_some()>
                        <div class="bg-red-50 border-2 border-red-200 rounded-xl p-4">
                            <p class="text-sm text-red-700 font-semibold">
                                {move || error_msg.get().unwrap_or_default()}
                            </p>
                        </div>
                    </Show>

                    <div class="flex items-center gap-2 text-sm text-amber-600 bg-amber-50 p-4 rounded-2xl border border-amber-100">
                        <span>"✓"</span>
                        <p>"지역 및 품목 정보는 고정되며, 텍스트 내용만 수정됩니다."</p>
                    </div>

                    <button
                        type="submit"
                        disabled=move || is_submitting.get() || body.get().trim().chars().count() < 10
                        class=move || {
                            if is_submitting.get() || body.get().trim().chars().count() < 10 {
                                "w-full py-5 rounded-2xl font-bold flex items-center justify-center gap-2 transition-all bg-gray-100 text-gray-400 cursor-not-allowed"
                            } else {
                                "w-full py-5 rounded-2xl font-bold flex items-center justify-center gap-2 transition-all bg-green-600 text-white hover:bg-green-700 shadow-lg shadow-green-100"
                            }
                        }
                    >
                        {move || if is_submitting.get() { "수정 중..." } else { "수정 완료하기" }}
                    </button>
                </form>
            </main>
        </div>
    }
}
