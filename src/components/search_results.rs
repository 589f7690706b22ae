use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;

use crate::components::item_card::ItemCard;
use crate::model::{Category, FeedbackTarget, use_selected_region};
use crate::nav::navigator::use_nav;
use crate::nav::screen::Screen;
use crate::protocol::TrashDetail;
use crate::session::use_session;

/// 自由文本检索画面。后端没有品目检索端点，
/// 拉取当前地区的全部品目后在客户端按名称过滤。
#[component]
pub fn SearchResultsPage(query: String) -> impl IntoView {
    let session = use_session();
    let nav = use_nav();
    let selected_region = use_selected_region().0;

    let (results, set_results) = signal(Vec::<TrashDetail>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (load_failed, set_load_failed) = signal(false);

    let query = StoredValue::new(query);

    Effect::new(move |_| {
        let api = session.api();
        let region_id = selected_region.get_untracked().db_id;
        let needle = query.get_value();
        spawn_local(async move {
            match api.trash_details(region_id, None).await {
                Ok(list) => {
                    let matched: Vec<TrashDetail> = list
                        .into_iter()
                        .filter(|item| item.item_name.contains(&needle))
                        .collect();
                    set_results.set(matched);
                }
                Err(e) => {
                    web_sys::console::error_1(&JsValue::from_str(&format!(
                        "[search] fetch failed: {}",
                        e
                    )));
                    set_load_failed.set(true);
                }
            }
            set_is_loading.set(false);
        });
    });

    let on_feedback = Callback::new(move |(id, name): (i64, String)| {
        nav.navigate(Screen::Feedback(FeedbackTarget {
            trash_detail_id: id,
            item_name: name,
        }));
    });

    view! {
        <div class="min-h-screen bg-gray-50">
            <div class="bg-white shadow-sm sticky top-0 z-10">
                <div class="max-w-4xl mx-auto px-4 py-4">
                    <button
                        on:click=move |_| nav.go_home()
                        class="flex items-center gap-2 text-gray-600 hover:text-gray-900 mb-4"
                    >
                        "← 돌아가기"
                    </button>

                    <div class="flex items-center gap-3">
                        <div class="bg-green-100 p-3 rounded-xl">
                            <span class="text-xl">"🔍"</span>
                        </div>
                        <div>
                            <h1 class="text-xl font-bold text-gray-900">"검색 결과"</h1>
                            <p class="text-gray-500 text-sm">
                                "\"" {query.get_value()} "\"에 대한 결과 "
                                {move || results.get().len()} "건"
                            </p>
                        </div>
                    </div>
                </div>
            </div>

            <div class="max-w-4xl mx-auto px-4 py-8">
                <div class="bg-gray-100 rounded-xl px-4 py-3 mb-6">
                    <p class="text-sm text-gray-600">
                        "현재 지역: "
                        <span class="text-gray-900 font-medium">
                            {move || selected_region.get().label()}
                        </span>
                    </p>
                </div>

                <Show when=move || is_loading.get()>
                    <div class="flex justify-center items-center py-20">
                        <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-green-500"></div>
                    </div>
                </Show>

                <Show when=move || !is_loading.get() && load_failed.get()>
                    <div class="bg-white rounded-xl p-8 text-center border border-gray-100">
                        <p class="text-gray-500">"검색 결과를 불러오지 못했습니다. 잠시 후 다시 시도해주세요."</p>
                    </div>
                </Show>

                // 无结果是正常状态，不是错误
                <Show when=move || !is_loading.get() && !load_failed.get() && results.get().is_empty()>
                    <div class="bg-white rounded-xl p-12 text-center border border-gray-100 shadow-sm">
                        <h3 class="text-gray-900 font-bold mb-2">"검색 결과가 없습니다"</h3>
                        <p class="text-gray-500 mb-6 text-sm">
                            "\"" {query.get_value()} "\"에 대한 정보를 찾을 수 없습니다"
                        </p>
                        <button
                            on:click=move |_| nav.go_home()
                            class="px-6 py-2 bg-green-500 text-white rounded-lg hover:bg-green-600 transition-colors font-medium"
                        >
                            "홈으로 돌아가기"
                        </button>
                    </div>

                    <div class="mt-6 bg-blue-50 border border-blue-100 rounded-xl p-4">
                        <p class="text-sm text-blue-900 mb-2 font-bold">"💡 검색 팁"</p>
                        <ul class="text-sm text-blue-800 space-y-1 opacity-90">
                            <li>"• 정확한 품목명으로 검색해보세요 (예: 페트병, 스티로폼)"</li>
                            <li>"• 비슷한 단어로 검색해보세요 (예: 플라스틱컵 → 테이크아웃컵)"</li>
                            <li>"• 카테고리 메뉴에서 직접 찾아보세요"</li>
                        </ul>
                    </div>
                </Show>

                <div class="space-y-4">
                    <For
                        each=move || results.get()
                        key=|item| item.id
                        children=move |item: TrashDetail| {
                            // 日程查询用品目所属分类的客户端键
                            let category_key = item
                                .category
                                .as_deref()
                                .and_then(Category::find_by_name)
                                .map(|c| c.id)
                                .unwrap_or("general");
                            view! {
                                <ItemCard item=item category_key=category_key on_feedback=on_feedback />
                            }
                        }
                    />
                </div>
            </div>
        </div>
    }
}
