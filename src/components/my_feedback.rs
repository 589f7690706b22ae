use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;

use crate::model::EditingFeedback;
use crate::nav::navigator::use_nav;
use crate::nav::screen::Screen;
use crate::protocol::{FeedbackResponse, short_date};
use crate::session::use_session;

/// 本人提交的反馈一览。删除成功后在本地乐观移除该条目；
/// 修改则把 {id, content, trashDetailId} 整体交给导航服务。
#[component]
pub fn MyFeedbackPage() -> impl IntoView {
    let session = use_session();
    let nav = use_nav();

    let (feedbacks, set_feedbacks) = signal(Vec::<FeedbackResponse>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (load_failed, set_load_failed) = signal(false);

    Effect::new(move |_| {
        let api = session.api();
        spawn_local(async move {
            match api.my_feedbacks().await {
                Ok(list) => set_feedbacks.set(list),
                Err(e) => {
                    web_sys::console::error_1(&JsValue::from_str(&format!(
                        "[my-feedback] fetch failed: {}",
                        e
                    )));
                    set_load_failed.set(true);
                }
            }
            set_is_loading.set(false);
        });
    });

    let handle_delete = move |id: i64| {
        let confirmed = web_sys::window()
            .is_some_and(|w| w.confirm_with_message("정말 이 피드백을 삭제하시겠습니까?").unwrap_or(false));
        if !confirmed {
            return;
        }
        let api = session.api();
        spawn_local(async move {
            match api.delete_feedback(id).await {
                Ok(()) => set_feedbacks.update(|list| list.retain(|f| f.id != id)),
                Err(_) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message("삭제에 실패했습니다.");
                    }
                }
            }
        });
    };

    let handle_edit = move |feedback: &FeedbackResponse| {
        nav.navigate(Screen::FeedbackEdit(EditingFeedback {
            id: feedback.id,
            content: feedback.content.clone(),
            trash_detail_id: feedback.trash_detail_id,
        }));
    };

    view! {
        <div class="min-h-screen bg-gray-50">
            <div class="bg-white border-b sticky top-0 z-10">
                <div class="max-w-2xl mx-auto px-4 h-16 flex items-center gap-4">
                    <button
                        on:click=move |_| nav.go_home()
                        class="p-2 hover:bg-gray-100 rounded-full transition-colors text-gray-600"
                    >
                        "←"
                    </button>
                    <h1 class="text-lg font-bold text-gray-900">"내가 작성한 피드백"</h1>
                </div>
            </div>

            <div class="max-w-2xl mx-auto px-4 py-8">
                <Show when=move || is_loading.get()>
                    <div class="flex justify-center items-center py-20">
                        <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-green-500"></div>
                    </div>
                </Show>

                <Show when=move || !is_loading.get() && load_failed.get()>
                    <div class="text-center py-20 bg-white rounded-3xl border-2 border-dashed border-gray-200">
                        <p class="text-gray-500 font-medium">"피드백을 불러오지 못했습니다. 잠시 후 다시 시도해주세요."</p>
                    </div>
                </Show>

                <Show when=move || !is_loading.get() && !load_failed.get() && feedbacks.get().is_empty()>
                    <div class="text-center py-20 bg-white rounded-3xl border-2 border-dashed border-gray-200">
                        <p class="text-gray-500 font-medium">"아직 작성한 피드백이 없어요."</p>
                    </div>
                </Show>

                <div class="space-y-4">
                    <For
                        each=move || feedbacks.get()
                        key=|feedback| feedback.id
                        children=move |feedback: FeedbackResponse| {
                            let id = feedback.id;
                            let category = feedback.category_name.clone().unwrap_or_else(|| "피드백".to_string());
                            let date = feedback.created_at.clone().map(|d| short_date(&d).to_string());
                            let edit_source = feedback.clone();
                            view! {
                                <div class="bg-white rounded-2xl p-6 shadow-sm border border-gray-100 hover:border-green-200 transition-all group">
                                    <div class="flex justify-between items-start mb-4">
                                        <div class="inline-flex items-center px-3 py-1 rounded-full text-xs font-bold bg-green-50 text-green-700 border border-green-100">
                                            {category}
                                        </div>
                                        <div class="flex gap-1 opacity-60 group-hover:opacity-100 transition-opacity">
                                            <button
                                                on:click=move |_| handle_edit(&edit_source)
                                                class="p-2 text-gray-400 hover:text-blue-600 hover:bg-blue-50 rounded-lg transition-colors"
                                            >
                                                "수정"
                                            </button>
                                            <button
                                                on:click=move |_| handle_delete(id)
                                                class="p-2 text-gray-400 hover:text-red-600 hover:bg-red-50 rounded-lg transition-colors"
                                            >
                                                "삭제"
                                            </button>
                                        </div>
                                    </div>

                                    <p class="text-gray-700 leading-relaxed mb-4 whitespace-pre-wrap">
                                        {feedback.content.clone()}
                                    </p>

                                    {date.map(|date| {
                                        view! {
                                            <div class="flex items-center border-t border-gray-50 pt-4 mt-2">
                                                <span class="text-xs text-gray-400 font-medium">{date}</span>
                                            </div>
                                        }
                                    })}
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </div>
    }
}
