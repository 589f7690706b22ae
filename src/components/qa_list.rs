use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;

use crate::nav::navigator::use_nav;
use crate::nav::screen::Screen;
use crate::protocol::BoardResponse;
use crate::session::use_session;

/// Q&A 板块列表。标题检索与全量列表共用同一端点
/// （空检索词 = 全部列表）。
#[component]
pub fn QaListPage() -> impl IntoView {
    let session = use_session();
    let nav = use_nav();

    let (posts, set_posts) = signal(Vec::<BoardResponse>::new());
    let (keyword, set_keyword) = signal(String::new());
    let (is_loading, set_is_loading) = signal(true);
    let (searched, set_searched) = signal(false);

    let fetch_posts = move |title: String| {
        set_is_loading.set(true);
        let api = session.api();
        spawn_local(async move {
            match api.search_boards(&title).await {
                Ok(list) => set_posts.set(list),
                Err(e) => {
                    web_sys::console::error_1(&JsValue::from_str(&format!(
                        "[qa-list] fetch failed: {}",
                        e
                    )));
                    set_posts.set(Vec::new());
                }
            }
            set_is_loading.set(false);
        });
    };

    Effect::new(move |_| fetch_posts(String::new()));

    let on_search = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_searched.set(true);
        fetch_posts(keyword.get_untracked().trim().to_string());
    };

    view! {
        <div class="min-h-screen bg-white">
            <div class="sticky top-0 bg-white/80 backdrop-blur-md z-10 border-b border-gray-100">
                <div class="max-w-4xl mx-auto px-4 py-4 flex items-center justify-between">
                    <div class="flex items-center gap-3">
                        <button
                            on:click=move |_| nav.go_home()
                            class="p-2 hover:bg-gray-100 rounded-full transition-colors text-gray-700"
                        >
                            "←"
                        </button>
                        <h2 class="text-xl font-bold text-gray-900">"Q&A 게시판"</h2>
                    </div>
                    <button
                        on:click=move |_| nav.navigate(Screen::QaWrite)
                        class="flex items-center gap-2 px-4 py-2 bg-green-600 text-white rounded-xl font-bold text-sm hover:bg-green-700 transition-all shadow-md active:scale-95"
                    >
                        "+ 질문하기"
                    </button>
                </div>
            </div>

            <main class="max-w-4xl mx-auto px-4 py-6">
                <form on:submit=on_search class="relative mb-8">
                    <input
                        type="text"
                        placeholder="제목으로 검색해 보세요"
                        prop:value=keyword
                        on:input=move |ev| set_keyword.set(event_target_value(&ev))
                        class="w-full pl-6 pr-4 py-4 bg-gray-50 border-none rounded-2xl focus:ring-2 focus:ring-green-500 transition-all font-medium"
                    />
                </form>

                <Show when=move || is_loading.get()>
                    <div class="py-20 text-center text-gray-400 font-bold">"데이터를 불러오는 중..."</div>
                </Show>

                <Show when=move || !is_loading.get() && posts.get().is_empty()>
                    <div class="py-20 text-center text-gray-400">
                        {move || {
                            let needle = keyword.get();
                            if searched.get() && !needle.trim().is_empty() {
                                format!("'{}'에 대한 검색 결과가 없습니다.", needle.trim())
                            } else {
                                "등록된 게시글이 없습니다.".to_string()
                            }
                        }}
                    </div>
                </Show>

                <div class="space-y-3">
                    <For
                        each=move || posts.get()
                        key=|post| post.id
                        children=move |post: BoardResponse| {
                            let post_id = post.id;
                            let author = post.author_name.clone().unwrap_or_else(|| "작성자 미상".to_string());
                            let answered = post.is_answered();
                            let title = post.title.clone();
                            view! {
                                <button
                                    on:click=move |_| nav.navigate(Screen::QaDetail(post_id))
                                    class="w-full flex items-center justify-between p-5 bg-white border border-gray-100 rounded-2xl hover:border-green-200 hover:shadow-md transition-all group text-left"
                                >
                                    <div class="flex-1">
                                        <div class="flex items-center gap-2 mb-2">
                                            <span class="text-[10px] font-black text-green-600 uppercase tracking-widest bg-green-50 px-2 py-0.5 rounded">
                                                "Question"
                                            </span>
                                            <span class="text-xs text-gray-400 font-medium">{author}</span>
                                            <Show when=move || answered>
                                                <span class="text-[10px] font-black text-blue-600 bg-blue-50 px-2 py-0.5 rounded">
                                                    "답변완료"
                                                </span>
                                            </Show>
                                        </div>
                                        <h3 class="font-bold text-gray-900 text-lg group-hover:text-green-700 transition-colors line-clamp-1">
                                            {title}
                                        </h3>
                                    </div>
                                    <span class="text-gray-300 group-hover:text-green-500 group-hover:translate-x-1 transition-all">
                                        "→"
                                    </span>
                                </button>
                            }
                        }
                    />
                </div>
            </main>
        </div>
    }
}
