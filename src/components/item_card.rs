use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;

use crate::model::use_selected_region;
use crate::protocol::{DisposalSchedule, TrashDetail};
use crate::session::use_session;

/// 品目卡片。折叠态陈列在列表中，展开时才拉取一次
/// (地区, 分类) 范围的排放日程。
#[component]
pub fn ItemCard(
    item: TrashDetail,
    /// 日程查询所用的分类键
    #[prop(into)] category_key: String,
    #[prop(into)] on_feedback: Callback<(i64, String)>,
) -> impl IntoView {
    let session = use_session();
    let selected_region = use_selected_region().0;

    let (expanded, set_expanded) = signal(false);
    let (schedule, set_schedule) = signal(Option::<DisposalSchedule>::None);
    let (schedule_requested, set_schedule_requested) = signal(false);

    let item_id = item.id;
    let category_label = item.category.clone().unwrap_or_else(|| "기타".to_string());
    let item = StoredValue::new(item);

    // 列表加载阶段绝不预取日程；首次展开时拉取一次
    let toggle = move |_| {
        let now_expanded = !expanded.get_untracked();
        set_expanded.set(now_expanded);
        if !now_expanded || schedule_requested.get_untracked() {
            return;
        }
        set_schedule_requested.set(true);

        let api = session.api();
        let region_id = selected_region.get_untracked().db_id;
        let category = category_key.clone();
        spawn_local(async move {
            match api.disposal_schedule(region_id, &category).await {
                Ok(fact) => set_schedule.set(Some(fact)),
                // 没有日程的地区/分类是正常空白状态
                Err(e) => {
                    web_sys::console::log_1(&JsValue::from_str(&format!(
                        "[item-card] schedule fetch failed: {}",
                        e
                    )));
                }
            }
        });
    };

    view! {
        <div class="bg-white rounded-xl shadow-sm border border-gray-100 overflow-hidden">
            <button
                on:click=toggle
                class="w-full px-6 py-4 flex items-center justify-between hover:bg-gray-50 transition-colors"
            >
                <div class="flex items-center gap-4">
                    <div class="px-3 py-1 bg-green-50 rounded-lg">
                        <span class="text-sm text-gray-700">{category_label}</span>
                    </div>
                    <h3 class="text-gray-900 font-bold">
                        {move || item.with_value(|i| i.item_name.clone())}
                    </h3>
                </div>
                <span class="text-gray-400">{move || if expanded.get() { "▲" } else { "▼" }}</span>
            </button>

            {move || {
                expanded.get().then(|| {
                    let method = item.with_value(|i| i.method.clone());
                    let caution = item.with_value(|i| i.caution.clone());
                    view! {
                        <div class="px-6 pb-6 border-t border-gray-100">
                            // 排放日程（延迟查询结果）
                            {move || {
                                schedule.get().and_then(|fact| fact.summary()).map(|line| {
                                    view! {
                                        <div class="mt-4 bg-green-50 border border-green-100 rounded-lg p-4">
                                            <p class="text-green-900 mb-1 font-bold">"배출 일정"</p>
                                            <p class="text-sm text-green-800">{line}</p>
                                        </div>
                                    }
                                })
                            }}

                            {method.map(|method| {
                                view! {
                                    <div class="mt-4">
                                        <h4 class="text-gray-900 font-bold mb-2">"배출 방법"</h4>
                                        <p class="text-gray-700 leading-relaxed whitespace-pre-wrap">{method}</p>
                                    </div>
                                }
                            })}

                            {caution.map(|caution| {
                                view! {
                                    <div class="mt-6 bg-amber-50 border border-amber-100 rounded-lg p-4">
                                        <h4 class="text-amber-900 font-bold mb-2">"주의사항"</h4>
                                        <p class="text-sm text-amber-800 whitespace-pre-wrap">{caution}</p>
                                    </div>
                                }
                            })}

                            <div class="mt-6 pt-4 border-t border-gray-100">
                                <button
                                    on:click=move |_| {
                                        on_feedback.run((item_id, item.with_value(|i| i.item_name.clone())));
                                    }
                                    class="w-full flex items-center justify-center gap-2 px-4 py-3 bg-gray-100 hover:bg-gray-200 text-gray-700 rounded-lg transition-colors"
                                >
                                    "잘못된 정보 신고하기"
                                </button>
                            </div>
                        </div>
                    }
                })
            }}
        </div>
    }
}
