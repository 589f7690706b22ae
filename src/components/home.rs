use leptos::prelude::*;

use crate::components::logo::Logo;
use crate::model::{CATEGORIES, Category, POPULAR_ITEMS, use_selected_region};
use crate::nav::navigator::use_nav;
use crate::nav::screen::Screen;
use crate::session::{logout, use_session};

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let nav = use_nav();
    let selected_region = use_selected_region().0;

    let (search_input, set_search_input) = signal(String::new());
    let is_admin = session.is_admin_signal();

    let on_search = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let query = search_input.get_untracked().trim().to_string();
        if !query.is_empty() {
            nav.navigate(Screen::Search(query));
        }
    };

    let on_logout = move |_| {
        // 退回登录画面由导航服务的会话监听自动处理
        logout(&session);
    };

    view! {
        <div class="min-h-screen bg-gradient-to-br from-green-50 via-white to-emerald-50 pb-10">
            <header class="bg-white/80 backdrop-blur-md sticky top-0 z-20 border-b border-green-100">
                <div class="max-w-4xl mx-auto px-4 py-4 flex items-center justify-between">
                    <div class="flex items-center gap-3">
                        <Logo class="w-10 h-10" />
                        <div>
                            <h1 class="text-lg font-bold text-green-900 leading-tight">"RecycleMap"</h1>
                            <p class="text-[10px] text-green-600 font-medium tracking-wider uppercase">
                                "Recycling Guide"
                            </p>
                        </div>
                    </div>

                    <div class="flex items-center gap-2">
                        <button
                            on:click=move |_| nav.navigate(Screen::MyFeedback)
                            class="flex items-center gap-2 px-4 py-2 bg-green-50 text-green-700 rounded-full hover:bg-green-600 hover:text-white transition-all shadow-sm border border-green-100 font-bold text-sm"
                        >
                            "내 활동"
                        </button>
                        <button
                            on:click=on_logout
                            class="px-4 py-2 text-gray-400 hover:text-gray-700 transition-colors text-sm font-bold"
                        >
                            "로그아웃"
                        </button>
                    </div>
                </div>
            </header>

            <main class="max-w-4xl mx-auto px-4 py-8">
                // 地区与问候语
                <section class="mb-10">
                    <div class="mb-6">
                        <h2 class="text-2xl font-bold text-gray-900 mb-1">"안녕하세요! 🌱"</h2>
                        <p class="text-gray-600">"오늘 배출하실 쓰레기의 분리수거 방법을 찾아보세요."</p>
                    </div>

                    <div class="bg-white rounded-2xl p-4 border border-emerald-100 shadow-sm flex flex-col sm:flex-row sm:items-center justify-between gap-4">
                        <div class="flex items-center gap-2">
                            <span class="font-bold text-gray-700 text-sm">"현재 설정된 지역"</span>
                            <span class="px-3 py-1 bg-emerald-50 border border-emerald-100 rounded-xl font-bold text-gray-700 text-sm">
                                {move || selected_region.get().label()}
                            </span>
                        </div>
                        <button
                            on:click=move |_| nav.navigate(Screen::RegionSelect)
                            class="px-4 py-2 bg-emerald-50/50 border border-emerald-100 rounded-xl font-bold text-gray-700 hover:bg-emerald-100 transition-colors text-sm"
                        >
                            "지역 변경"
                        </button>
                    </div>
                </section>

                // 搜索
                <section class="mb-12">
                    <form on:submit=on_search class="relative">
                        <input
                            type="text"
                            placeholder="어떤 품목을 버리시나요? (예: 페트병, 배달 용기)"
                            prop:value=search_input
                            on:input=move |ev| set_search_input.set(event_target_value(&ev))
                            class="w-full pl-6 pr-32 py-5 bg-white border-2 border-gray-100 rounded-2xl shadow-sm focus:outline-none focus:border-green-500 transition-all text-lg font-medium"
                        />
                        <button
                            type="submit"
                            class="absolute right-3 top-1/2 -translate-y-1/2 px-6 py-2.5 bg-green-600 text-white rounded-xl font-bold hover:bg-green-700 transition-colors shadow-lg shadow-green-200"
                        >
                            "검색"
                        </button>
                    </form>

                    <div class="mt-5 flex flex-wrap gap-2">
                        <For
                            each=move || POPULAR_ITEMS
                            key=|item| *item
                            children=move |item: &'static str| {
                                view! {
                                    <button
                                        on:click=move |_| nav.navigate(Screen::Search(item.to_string()))
                                        class="px-4 py-1.5 bg-white border border-gray-200 rounded-xl text-sm font-medium text-gray-500 hover:border-green-500 hover:text-green-600 transition-all"
                                    >
                                        "# " {item}
                                    </button>
                                }
                            }
                        />
                    </div>
                </section>

                // 分类网格
                <section class="mb-16">
                    <div class="flex items-center gap-2 mb-6 ml-1">
                        <div class="w-1.5 h-5 bg-green-500 rounded-full"></div>
                        <h3 class="font-bold text-gray-800 text-xl">"카테고리별 안내"</h3>
                    </div>

                    <div class="grid grid-cols-2 md:grid-cols-3 gap-4">
                        <For
                            each=move || CATEGORIES.to_vec()
                            key=|category| category.id
                            children=move |category: Category| {
                                let target = category.clone();
                                view! {
                                    <button
                                        on:click=move |_| nav.navigate(Screen::Category(target.clone()))
                                        class="group bg-white p-6 rounded-[2rem] shadow-sm hover:shadow-md hover:-translate-y-1 transition-all duration-300 border border-gray-50 hover:border-green-200 text-left"
                                    >
                                        <div class=format!(
                                            "w-14 h-14 rounded-2xl {} flex items-center justify-center text-3xl mb-4 shadow-inner",
                                            category.color,
                                        )>
                                            {category.icon}
                                        </div>
                                        <h4 class="text-gray-900 font-bold mb-1">{category.name}</h4>
                                        <p class="text-xs text-gray-500 leading-relaxed">{category.description}</p>
                                    </button>
                                }
                            }
                        />
                    </div>
                </section>

                // Q&A / 我的活动 / 管理员入口
                <section class="grid grid-cols-1 md:grid-cols-2 gap-4 mt-10">
                    <button
                        on:click=move |_| nav.navigate(Screen::QaList)
                        class="flex items-center justify-between p-5 bg-gradient-to-br from-green-50 to-emerald-50 border-2 border-green-200 rounded-2xl shadow-sm hover:shadow-lg hover:border-green-400 transition-all text-left"
                    >
                        <div>
                            <h4 class="font-bold text-gray-900 text-lg">"Q&A 게시판"</h4>
                            <p class="text-xs text-gray-600">"분리수거 질문을 남겨보세요"</p>
                        </div>
                        <span class="text-green-500 text-xl">"→"</span>
                    </button>

                    <button
                        on:click=move |_| nav.navigate(Screen::MyFeedback)
                        class="flex items-center justify-between p-5 bg-white border-2 border-gray-100 rounded-2xl shadow-sm hover:shadow-lg hover:border-green-300 transition-all text-left"
                    >
                        <div>
                            <h4 class="font-bold text-gray-900 text-lg">"내 활동 확인"</h4>
                            <p class="text-xs text-gray-600">"남긴 피드백을 확인하세요"</p>
                        </div>
                        <span class="text-gray-300 text-xl">"→"</span>
                    </button>

                    <Show when=move || is_admin.get()>
                        <button
                            on:click=move |_| nav.navigate(Screen::Admin)
                            class="flex items-center justify-between p-5 bg-slate-900 border-2 border-slate-800 rounded-2xl shadow-sm hover:shadow-lg transition-all text-left md:col-span-2"
                        >
                            <div>
                                <h4 class="font-bold text-white text-lg">"관리자 대시보드"</h4>
                                <p class="text-xs text-slate-400">"게시판 및 피드백 관리"</p>
                            </div>
                            <span class="text-green-400 text-xl">"→"</span>
                        </button>
                    </Show>
                </section>

                <footer class="mt-16 text-center">
                    <p class="text-gray-400 text-xs">"© 2026 RecycleMap Project. 수원시 공공데이터 활용"</p>
                </footer>
            </main>
        </div>
    }
}
