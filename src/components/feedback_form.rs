use leptos::prelude::*;
use leptos::task::spawn_local;
use std::time::Duration;

use crate::model::{FeedbackTarget, use_selected_region};
use crate::nav::navigator::use_nav;
use crate::protocol::{
    FeedbackKind, FeedbackRequest, compose_feedback_content, validate_feedback_content,
};
use crate::session::use_session;

/// 反馈登记画面。人类可读的品目/地区上下文会并入自由文本内容，
/// 后端反馈模型不携带冗余展示字段。
#[component]
pub fn FeedbackFormPage(target: FeedbackTarget) -> impl IntoView {
    let session = use_session();
    let nav = use_nav();
    let selected_region = use_selected_region().0;

    let (kind, set_kind) = signal(FeedbackKind::Classification);
    let (body, set_body) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (is_submitted, set_is_submitted) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let item_name = StoredValue::new(target.item_name);
    let trash_detail_id = target.trash_detail_id;

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);

        // 不足最小长度直接拒绝，不发起网络调用
        if let Err(message) = validate_feedback_content(&body.get_untracked()) {
            set_error_msg.set(Some(message));
            return;
        }

        let api = session.api();
        if !api.has_token() {
            set_error_msg.set(Some("로그인이 필요합니다. 다시 로그인해주세요.".to_string()));
            return;
        }

        set_is_submitting.set(true);
        let content = compose_feedback_content(
            &item_name.get_value(),
            &selected_region.get_untracked().label(),
            &body.get_untracked(),
        );
        let request = FeedbackRequest::new(content, trash_detail_id, kind.get_untracked());

        spawn_local(async move {
            match api.save_feedback(&request).await {
                Ok(()) => {
                    // 短暂展示确认画面后回到主页
                    set_is_submitted.set(true);
                    set_timeout(move || nav.go_home(), Duration::from_secs(2));
                }
                Err(e) => set_error_msg.set(Some(e.to_string())),
            }
            set_is_submitting.set(false);
        });
    };

    move || {
        if is_submitted.get() {
            view! {
                <div class="min-h-screen bg-gray-50 flex items-center justify-center px-4">
                    <div class="bg-white rounded-2xl shadow-lg p-8 max-w-md w-full text-center">
                        <div class="w-16 h-16 bg-green-100 rounded-full flex items-center justify-center mx-auto mb-4">
                            <span class="text-3xl">"✓"</span>
                        </div>
                        <h2 class="text-gray-900 font-bold mb-2">"피드백이 전송되었습니다"</h2>
                        <p class="text-gray-600">
                            "소중한 의견 감사합니다." <br /> "검토 후 반영하겠습니다."
                        </p>
                    </div>
                </div>
            }
            .into_any()
        } else {
            view! {
                <div class="min-h-screen bg-gray-50">
                    <div class="bg-white shadow-sm sticky top-0 z-10">
                        <div class="max-w-2xl mx-auto px-4 py-4">
                            <button
                                on:click=move |_| nav.go_home()
                                class="flex items-center gap-2 text-gray-600 hover:text-gray-900 mb-4"
                            >
                                "← 돌아가기"
                            </button>
                            <h1 class="text-gray-900 font-bold text-xl">"피드백 보내기"</h1>
                            <p class="text-gray-500">"잘못된 정보를 알려주세요"</p>
                        </div>
                    </div>

                    <div class="max-w-2xl mx-auto px-4 py-8">
                        <form on:submit=on_submit class="space-y-6">
                            // 品目/地区信息
                            <div class="bg-white rounded-xl p-6 border border-gray-100">
                                <div class="grid grid-cols-2 gap-4">
                                    <div>
                                        <p class="text-sm text-gray-500 mb-1">"품목"</p>
                                        <p class="text-gray-900 font-medium">{item_name.get_value()}</p>
                                    </div>
                                    <div>
                                        <p class="text-sm text-gray-500 mb-1">"지역"</p>
                                        <p class="text-gray-900 font-medium">
                                            {move || selected_region.get().label()}
                                        </p>
                                    </div>
                                </div>
                            </div>

                            // 问题类型
                            <div class="bg-white rounded-xl p-6 border border-gray-100">
                                <label class="block text-gray-900 font-bold mb-4">
                                    "문제 유형 " <span class="text-red-500">"*"</span>
                                </label>
                                <div class="space-y-3">
                                    <For
                                        each=move || FeedbackKind::ALL
                                        key=|entry| entry.backend_value()
                                        children=move |entry: FeedbackKind| {
                                            view! {
                                                <label class=move || {
                                                    if kind.get() == entry {
                                                        "flex items-start gap-3 p-4 rounded-lg border-2 cursor-pointer transition-all border-green-500 bg-green-50"
                                                    } else {
                                                        "flex items-start gap-3 p-4 rounded-lg border-2 cursor-pointer transition-all border-gray-200 hover:border-gray-300"
                                                    }
                                                }>
                                                    <input
                                                        type="radio"
                                                        name="feedbackType"
                                                        prop:checked=move || kind.get() == entry
                                                        on:change=move |_| set_kind.set(entry)
                                                        class="mt-1"
                                                    />
                                                    <div>
                                                        <p class="text-gray-900 font-medium">{entry.label()}</p>
                                                        <p class="text-sm text-gray-500">{entry.description()}</p>
                                                    </div>
                                                </label>
                                            }
                                        }
                                    />
                                </div>
                            </div>

                            // 详细说明
                            <div class="bg-white rounded-xl p-6 border border-gray-100">
                                <label for="description" class="block text-gray-900 font-bold mb-2">
                                    "상세 설명 " <span class="text-red-500">"*"</span>
                                </label>
                                <p class="text-sm text-gray-500 mb-4">
                                    "어떤 점이 잘못되었는지 자세히 알려주세요 (최소 10자)"
                                </p>
                                <textarea
                                    id="description"
                                    rows="6"
                                    placeholder="예: 수원시 영통구는 플라스틱을 월요일에 배출하는데, 화요일로 잘못 표시되어 있습니다."
                                    prop:value=body
                                    on:input=move |ev| set_body.set(event_target_value(&ev))
                                    class="w-full px-4 py-3 border border-gray-200 rounded-lg focus:outline-none focus:ring-2 focus:ring-green-500 resize-none"
                                ></textarea>
                            </div>

                            <Show when=move || error_msg.get().is_some()>
                                <div class="bg-red-50 border-2 border-red-200 rounded-xl p-4">
                                    <p class="text-sm text-red-700 font-semibold">
                                        {move || error_msg.get().unwrap_or_default()}
                                    </p>
                                </div>
                            </Show>

                            <div class="bg-blue-50 border border-blue-100 rounded-xl p-4">
                                <p class="text-sm text-blue-900">
                                    "💡 제출하신 피드백은 관리자가 검토한 후 반영됩니다. 정확한 정보 제공을 위해 공식 출처를 확인해주시면 더욱 도움이 됩니다."
                                </p>
                            </div>

                            <button
                                type="submit"
                                disabled=move || is_submitting.get()
                                class="w-full flex items-center justify-center gap-2 px-6 py-4 bg-green-500 hover:bg-green-600 disabled:bg-gray-300 disabled:cursor-not-allowed text-white font-bold rounded-xl transition-colors"
                            >
                                {move || if is_submitting.get() { "전송 중..." } else { "피드백 전송" }}
                            </button>
                        </form>
                    </div>
                </div>
            }
            .into_any()
        }
    }
}
