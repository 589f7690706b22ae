use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::nav::navigator::use_nav;
use crate::nav::screen::Screen;
use crate::protocol::{BOARD_CONTENT_MAX, BoardWriteRequest};
use crate::session::use_session;

/// 提问画面。标题/内容校验不通过时只展示行内消息，
/// 不发起网络调用。
#[component]
pub fn QaWritePage() -> impl IntoView {
    let session = use_session();
    let nav = use_nav();

    let (title, set_title) = signal(String::new());
    let (content, set_content) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |_| {
        set_error_msg.set(None);

        let Some(email) = session.email() else {
            set_error_msg.set(Some("로그인 세션이 만료되었습니다. 다시 로그인해주세요.".to_string()));
            return;
        };

        let request = BoardWriteRequest {
            email,
            title: title.get_untracked().trim().to_string(),
            content: content.get_untracked().trim().to_string(),
        };
        if let Err(message) = request.validate() {
            set_error_msg.set(Some(message));
            return;
        }

        set_is_submitting.set(true);
        let api = session.api();
        spawn_local(async move {
            match api.write_board(&request).await {
                Ok(()) => nav.navigate(Screen::QaList),
                Err(e) => set_error_msg.set(Some(e.to_string())),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="min-h-screen bg-white">
            <div class="sticky top-0 bg-white/80 backdrop-blur-md z-10 border-b border-gray-100">
                <div class="max-w-3xl mx-auto px-4 py-4 flex items-center justify-between">
                    <div class="flex items-center gap-3">
                        <button
                            on:click=move |_| nav.navigate(Screen::QaList)
                            class="p-2 hover:bg-gray-100 rounded-full transition-colors text-gray-700"
                        >
                            "←"
                        </button>
                        <h2 class="text-xl font-bold text-gray-900">"질문하기"</h2>
                    </div>
                    <button
                        on:click=on_submit
                        disabled=move || is_submitting.get()
                        class="flex items-center gap-2 px-6 py-2.5 bg-green-600 text-white rounded-xl font-bold text-sm hover:bg-green-700 disabled:bg-gray-200 disabled:text-gray-400 transition-all shadow-md active:scale-95"
                    >
                        {move || if is_submitting.get() { "등록 중..." } else { "등록하기" }}
                    </button>
                </div>
            </div>

            <main class="max-w-3xl mx-auto px-4 py-8">
                <div class="mb-8 p-6 bg-green-50 rounded-2xl border border-green-100">
                    <p class="font-bold text-green-700 mb-2">"✓ 작성 팁"</p>
                    <p class="text-sm text-green-600 font-medium leading-relaxed">
                        "수원시의 분리배출에 대해 궁금한 점을 자유롭게 물어보세요." <br />
                        "구체적인 품목과 상태를 적어주시면 더 정확한 답변을 받으실 수 있습니다."
                    </p>
                </div>

                <Show when=move || error_msg.get().is_some()>
                    <div class="mb-6 p-4 bg-red-50 text-red-600 rounded-xl text-sm font-bold">
                        {move || error_msg.get().unwrap_or_default()}
                    </div>
                </Show>

                <div class="space-y-6">
                    <div>
                        <label class="block text-sm font-black text-gray-700 mb-2 ml-1">"제목"</label>
                        <input
                            type="text"
                            placeholder="질문의 핵심 내용을 요약해주세요"
                            prop:value=title
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                            class="w-full px-5 py-4 bg-gray-50 border-none rounded-2xl focus:ring-2 focus:ring-green-500 transition-all font-bold text-lg text-gray-900 placeholder:text-gray-300"
                        />
                    </div>

                    <div>
                        <label class="block text-sm font-black text-gray-700 mb-2 ml-1">"내용"</label>
                        <textarea
                            rows="12"
                            placeholder="궁금하신 내용을 자세히 작성해주세요 (최소 10자 이상)"
                            prop:value=content
                            on:input=move |ev| set_content.set(event_target_value(&ev))
                            class="w-full px-5 py-4 bg-gray-50 border-none rounded-2xl focus:ring-2 focus:ring-green-500 transition-all font-medium text-gray-800 placeholder:text-gray-300 resize-none leading-relaxed"
                        ></textarea>
                        <div class="flex justify-end mt-2">
                            <span class=move || {
                                if content.get().chars().count() < 10 {
                                    "text-xs font-bold text-gray-300"
                                } else {
                                    "text-xs font-bold text-green-500"
                                }
                            }>
                                {move || content.get().chars().count()} " / " {BOARD_CONTENT_MAX} "자"
                            </span>
                        </div>
                    </div>
                </div>
            </main>
        </div>
    }
}
