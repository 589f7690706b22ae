use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::logo::Logo;
use crate::nav::navigator::use_nav;
use crate::nav::screen::Screen;
use crate::session::{login, use_session};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let nav = use_nav();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if email.get_untracked().is_empty() || password.get_untracked().is_empty() {
            set_error_msg.set(Some("이메일과 비밀번호를 입력해주세요.".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            match login(&session, email.get_untracked(), password.get_untracked()).await {
                // 角色决定落点：管理员进仪表盘，普通用户先选地区
                Ok(role) => nav.navigate(Screen::after_login(&role)),
                Err(e) => set_error_msg.set(Some(e.to_string())),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="min-h-screen bg-gradient-to-br from-green-50 via-emerald-50 to-teal-50 relative overflow-hidden">
            <div class="relative min-h-screen grid md:grid-cols-2 gap-8 p-4 md:p-8">
                // 左侧：品牌介绍
                <div class="hidden md:flex flex-col justify-center px-8 lg:px-16">
                    <div class="space-y-6">
                        <div class="inline-flex items-center gap-3 bg-white/60 backdrop-blur-sm px-6 py-3 rounded-2xl shadow-lg">
                            <Logo class="w-12 h-12" />
                            <div>
                                <h1 class="text-2xl text-green-800 font-bold">"RecycleMap"</h1>
                                <p class="text-sm text-green-600">"분리수거 가이드"</p>
                            </div>
                        </div>
                        <h2 class="text-4xl text-green-900 leading-tight font-bold">
                            "지구를 위한" <br /> <span class="text-green-600">"작은 실천"</span>
                        </h2>
                        <p class="text-lg text-green-700 leading-relaxed">
                            "우리 지역의 분리수거 규칙을 쉽고 정확하게." <br />
                            "올바른 분리수거로 환경을 지켜요 🌱"
                        </p>
                    </div>
                </div>

                // 右侧：登录表单
                <div class="flex items-center justify-center">
                    <div class="w-full max-w-md">
                        <div class="bg-white/90 backdrop-blur-xl rounded-3xl shadow-2xl p-8 md:p-10 border border-white/20">
                            <div class="text-center mb-8">
                                <h2 class="text-2xl font-bold text-gray-900 mb-2">"환영합니다!"</h2>
                                <p class="text-gray-600">"RecycleMap에 로그인하세요"</p>
                            </div>

                            <form class="space-y-5" on:submit=on_submit>
                                <div>
                                    <label for="email" class="block text-sm font-medium text-gray-700 mb-2 ml-1">
                                        "이메일"
                                    </label>
                                    <input
                                        id="email"
                                        type="email"
                                        required
                                        placeholder="example@email.com"
                                        prop:value=email
                                        on:input=move |ev| set_email.set(event_target_value(&ev))
                                        class="w-full px-4 py-4 bg-white border-2 border-gray-200 rounded-xl focus:outline-none focus:border-green-500 text-gray-900 transition-colors"
                                    />
                                </div>

                                <div>
                                    <label for="password" class="block text-sm font-medium text-gray-700 mb-2 ml-1">
                                        "비밀번호"
                                    </label>
                                    <input
                                        id="password"
                                        type="password"
                                        required
                                        placeholder="비밀번호를 입력하세요"
                                        prop:value=password
                                        on:input=move |ev| set_password.set(event_target_value(&ev))
                                        class="w-full px-4 py-4 bg-white border-2 border-gray-200 rounded-xl focus:outline-none focus:border-green-500 text-gray-900 transition-colors"
                                    />
                                </div>

                                <Show when=move || error_msg.get().is_some()>
                                    <div class="bg-red-50 border-2 border-red-200 rounded-xl p-4">
                                        <p class="text-sm text-red-700 font-semibold">
                                            {move || error_msg.get().unwrap_or_default()}
                                        </p>
                                    </div>
                                </Show>

                                <button
                                    type="submit"
                                    disabled=move || is_submitting.get()
                                    class="w-full py-4 bg-gradient-to-r from-green-500 to-emerald-600 hover:from-green-600 hover:to-emerald-700 text-white font-bold rounded-xl transition-all shadow-lg disabled:opacity-50"
                                >
                                    {move || if is_submitting.get() { "로그인 중..." } else { "로그인" }}
                                </button>
                            </form>

                            <div class="relative my-8">
                                <div class="absolute inset-0 flex items-center">
                                    <div class="w-full border-t border-gray-200"></div>
                                </div>
                                <div class="relative flex justify-center text-sm">
                                    <span class="px-4 bg-white text-gray-500 font-medium">"또는"</span>
                                </div>
                            </div>

                            <button
                                on:click=move |_| nav.navigate(Screen::Signup)
                                class="w-full py-4 bg-white hover:bg-gray-50 text-green-700 font-bold border-2 border-green-200 hover:border-green-300 rounded-xl transition-all shadow-sm"
                            >
                                "계정 만들기"
                            </button>
                        </div>
                        <p class="text-center text-gray-500 text-sm mt-8">
                            "© 2026 RecycleMap. 수원시 분리수거 가이드"
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
