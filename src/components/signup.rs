use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::logo::Logo;
use crate::nav::navigator::use_nav;
use crate::nav::screen::Screen;
use crate::protocol::{SignupRequest, validate_signup};
use crate::session::use_session;

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = use_session();
    let nav = use_nav();

    let (nickname, set_nickname) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);

        // 校验不通过则不发起网络调用
        if let Err(message) = validate_signup(
            &nickname.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
        ) {
            set_error_msg.set(Some(message));
            return;
        }

        set_is_submitting.set(true);
        let api = session.api();
        spawn_local(async move {
            let request = SignupRequest {
                nickname: nickname.get_untracked(),
                email: email.get_untracked(),
                password: password.get_untracked(),
            };
            match api.signup(&request).await {
                Ok(()) => nav.navigate(Screen::Login),
                Err(e) => set_error_msg.set(Some(e.to_string())),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="min-h-screen bg-gradient-to-br from-green-50 via-emerald-50 to-teal-50 relative overflow-hidden">
            <div class="relative min-h-screen flex items-center justify-center p-4 md:p-8">
                <div class="w-full max-w-md">
                    <div class="text-center mb-8">
                        <div class="inline-flex items-center gap-3 bg-white/80 backdrop-blur-sm px-6 py-3 rounded-2xl shadow-lg">
                            <Logo class="w-12 h-12" />
                            <div class="text-left">
                                <h1 class="text-xl text-green-800 font-bold">"RecycleMap"</h1>
                                <p class="text-xs text-green-600">"분리수거 가이드"</p>
                            </div>
                        </div>
                    </div>

                    <div class="bg-white/90 backdrop-blur-xl rounded-3xl shadow-2xl p-8 md:p-10 border border-white/20">
                        <div class="text-center mb-8">
                            <h2 class="text-2xl text-gray-900 font-bold mb-2">"시작하기"</h2>
                            <p class="text-gray-600">"RecycleMap 계정을 만들어보세요"</p>
                        </div>

                        <form class="space-y-4" on:submit=on_submit>
                            <div>
                                <label for="name" class="block text-sm text-gray-700 mb-2 ml-1">"이름"</label>
                                <input
                                    id="name"
                                    type="text"
                                    placeholder="홍길동"
                                    prop:value=nickname
                                    on:input=move |ev| set_nickname.set(event_target_value(&ev))
                                    class="w-full px-4 py-4 bg-white border-2 border-gray-200 rounded-xl focus:outline-none focus:border-green-500 text-gray-900 transition-colors"
                                />
                            </div>

                            <div>
                                <label for="email" class="block text-sm text-gray-700 mb-2 ml-1">"이메일"</label>
                                <input
                                    id="email"
                                    type="email"
                                    placeholder="example@email.com"
                                    prop:value=email
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                    class="w-full px-4 py-4 bg-white border-2 border-gray-200 rounded-xl focus:outline-none focus:border-green-500 text-gray-900 transition-colors"
                                />
                            </div>

                            <div>
                                <label for="password" class="block text-sm text-gray-700 mb-2 ml-1">"비밀번호"</label>
                                <input
                                    id="password"
                                    type="password"
                                    placeholder="최소 6자 이상"
                                    prop:value=password
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                    class="w-full px-4 py-4 bg-white border-2 border-gray-200 rounded-xl focus:outline-none focus:border-green-500 text-gray-900 transition-colors"
                                />
                            </div>

                            <div>
                                <label for="confirm" class="block text-sm text-gray-700 mb-2 ml-1">"비밀번호 확인"</label>
                                <input
                                    id="confirm"
                                    type="password"
                                    placeholder="비밀번호 재입력"
                                    prop:value=confirm
                                    on:input=move |ev| set_confirm.set(event_target_value(&ev))
                                    class="w-full px-4 py-4 bg-white border-2 border-gray-200 rounded-xl focus:outline-none focus:border-green-500 text-gray-900 transition-colors"
                                />
                            </div>

                            <Show when=move || error_msg.get().is_some()>
                                <div class="bg-red-50 border-2 border-red-200 rounded-xl p-4">
                                    <p class="text-sm text-red-700">
                                        {move || error_msg.get().unwrap_or_default()}
                                    </p>
                                </div>
                            </Show>

                            <div class="bg-green-50 border-2 border-green-100 rounded-xl p-4">
                                <p class="text-xs text-green-700 leading-relaxed">
                                    "회원가입 시 이용약관 및 개인정보처리방침에 동의하는 것으로 간주됩니다."
                                </p>
                            </div>

                            <button
                                type="submit"
                                disabled=move || is_submitting.get()
                                class="w-full py-4 bg-gradient-to-r from-green-500 to-emerald-600 hover:from-green-600 hover:to-emerald-700 text-white font-bold rounded-xl transition-all shadow-lg disabled:opacity-50"
                            >
                                {move || if is_submitting.get() { "가입 중..." } else { "계정 만들기" }}
                            </button>
                        </form>

                        <div class="relative my-8">
                            <div class="absolute inset-0 flex items-center">
                                <div class="w-full border-t border-gray-200"></div>
                            </div>
                            <div class="relative flex justify-center text-sm">
                                <span class="px-4 bg-white text-gray-500">"이미 계정이 있으신가요?"</span>
                            </div>
                        </div>

                        <button
                            on:click=move |_| nav.navigate(Screen::Login)
                            class="w-full py-4 bg-white hover:bg-gray-50 text-green-700 font-bold border-2 border-green-200 hover:border-green-300 rounded-xl transition-all shadow-sm"
                        >
                            "로그인"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
