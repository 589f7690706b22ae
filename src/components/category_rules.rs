use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;

use crate::components::item_card::ItemCard;
use crate::model::{Category, FeedbackTarget, use_selected_region};
use crate::nav::navigator::use_nav;
use crate::nav::screen::Screen;
use crate::protocol::TrashDetail;
use crate::session::use_session;

#[component]
pub fn CategoryRulesPage(category: Category) -> impl IntoView {
    let session = use_session();
    let nav = use_nav();
    let selected_region = use_selected_region().0;

    let (items, set_items) = signal(Vec::<TrashDetail>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (load_failed, set_load_failed) = signal(false);

    let category_id = category.id;
    let category_name = category.name;

    // 挂载时拉取一次品目列表；依赖（地区、分类）在本画面生命周期内不变
    Effect::new(move |_| {
        let api = session.api();
        let region_id = selected_region.get_untracked().db_id;
        spawn_local(async move {
            match api.trash_details(region_id, Some(category_id)).await {
                Ok(list) => set_items.set(list),
                Err(e) => {
                    web_sys::console::error_1(&JsValue::from_str(&format!(
                        "[category-rules] fetch failed: {}",
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

                    <div class="flex items-center gap-4">
                        <div class=format!(
                            "inline-flex items-center justify-center w-16 h-16 rounded-2xl {}",
                            category.color,
                        )>
                            <span class="text-3xl">{category.icon}</span>
                        </div>
                        <div>
                            <h1 class="text-gray-900 font-bold text-xl">{category_name}</h1>
                            <p class="text-gray-500">{move || selected_region.get().label()}</p>
                        </div>
                    </div>
                </div>
            </div>

            <div class="max-w-4xl mx-auto px-4 py-8">
                <div class="bg-blue-50 border border-blue-100 rounded-xl p-4 mb-6">
                    <p class="text-blue-900 mb-2 font-bold">{category_name} " 배출 시 주의사항"</p>
                    <ul class="text-sm text-blue-800 space-y-1">
                        <li>"• 이물질을 완전히 제거하고 배출해주세요"</li>
                        <li>"• 다른 재질과 섞이지 않도록 분리해주세요"</li>
                        <li>"• 배출 시간과 장소를 확인해주세요"</li>
                    </ul>
                </div>

                <h2 class="text-gray-900 font-bold mb-4">
                    "주요 품목 (" {move || items.get().len()} "개)"
                </h2>

                <Show when=move || is_loading.get()>
                    <div class="flex justify-center items-center py-20">
                        <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-green-500"></div>
                    </div>
                </Show>

                <Show when=move || !is_loading.get() && load_failed.get()>
                    <div class="bg-white rounded-xl p-8 text-center border border-gray-100">
                        <p class="text-gray-500">"품목 정보를 불러오지 못했습니다. 잠시 후 다시 시도해주세요."</p>
                    </div>
                </Show>

                <Show when=move || !is_loading.get() && !load_failed.get() && items.get().is_empty()>
                    <div class="bg-white rounded-xl p-8 text-center">
                        <p class="text-gray-500">"등록된 품목이 없습니다"</p>
                    </div>
                </Show>

                <div class="space-y-4">
                    <For
                        each=move || items.get()
                        key=|item| item.id
                        children=move |item: TrashDetail| {
                            view! {
                                <ItemCard item=item category_key=category_id on_feedback=on_feedback />
                            }
                        }
                    />
                </div>
            </div>
        </div>
    }
}
