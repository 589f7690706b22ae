use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::model::{CITIES, Region, use_selected_region};
use crate::nav::navigator::use_nav;
use crate::nav::screen::Screen;
use crate::protocol::RegionSaveRequest;
use crate::session::use_session;

#[component]
pub fn RegionSelectPage() -> impl IntoView {
    let session = use_session();
    let nav = use_nav();
    let selected_region = use_selected_region().0;

    let (active_city, set_active_city) = signal::<&'static str>(CITIES[0]);
    let (selected_id, set_selected_id) = signal(Option::<&'static str>::None);
    let (is_saving, set_is_saving) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let nickname = session.nickname();

    let on_confirm = move |_| {
        let Some(id) = selected_id.get_untracked() else {
            return;
        };
        let Some(region) = Region::find(id) else {
            return;
        };

        set_is_saving.set(true);
        set_error_msg.set(None);

        let api = session.api();
        spawn_local(async move {
            let request = RegionSaveRequest {
                city: region.city.to_string(),
                district: region.district.to_string(),
            };
            match api.save_region(&request).await {
                Ok(()) => {
                    // 后端确认后才把完整地区对象（含后端主键）交给编排器
                    selected_region.set(region.clone());
                    nav.navigate(Screen::Home);
                }
                Err(e) => {
                    set_error_msg.set(Some(format!("지역 정보를 저장하는 중 오류가 발생했습니다. {}", e)));
                }
            }
            set_is_saving.set(false);
        });
    };

    view! {
        <div class="min-h-screen bg-gradient-to-br from-green-50 to-emerald-50 relative overflow-hidden p-6">
            <div class="max-w-3xl mx-auto">
                <div class="text-center mb-8">
                    <h2 class="text-3xl font-bold text-gray-900">"지역을 선택해주세요"</h2>
                    {nickname.map(|name| view! {
                        <p class="text-gray-500 mt-2">{name} "님, 반갑습니다!"</p>
                    })}
                </div>

                // 城市选择标签
                <div class="flex justify-center gap-4 mb-10">
                    <For
                        each=move || CITIES
                        key=|city| *city
                        children=move |city: &'static str| {
                            view! {
                                <button
                                    on:click=move |_| {
                                        set_active_city.set(city);
                                        set_selected_id.set(None);
                                    }
                                    class=move || {
                                        if active_city.get() == city {
                                            "px-8 py-3 rounded-full font-bold transition-all bg-green-600 text-white shadow-lg scale-105"
                                        } else {
                                            "px-8 py-3 rounded-full font-bold transition-all bg-white text-gray-500 hover:bg-green-50"
                                        }
                                    }
                                >
                                    {city}
                                </button>
                            }
                        }
                    />
                </div>

                <div class="space-y-3">
                    <p class="text-sm font-bold text-gray-400 mb-2 px-2 uppercase tracking-wider">
                        "Select District"
                    </p>
                    <For
                        each=move || { Region::in_city(active_city.get()).collect::<Vec<_>>() }
                        key=|region| region.id
                        children=move |region: &'static Region| {
                            view! {
                                <button
                                    on:click=move |_| set_selected_id.set(Some(region.id))
                                    class=move || {
                                        if selected_id.get() == Some(region.id) {
                                            "w-full p-5 rounded-2xl border-2 transition-all flex items-center justify-between bg-green-600 border-green-700 text-white shadow-md"
                                        } else {
                                            "w-full p-5 rounded-2xl border-2 transition-all flex items-center justify-between bg-white border-gray-100 hover:border-green-200"
                                        }
                                    }
                                >
                                    <span class="font-bold">{region.district}</span>
                                    <Show when=move || selected_id.get() == Some(region.id)>
                                        <span>"✓"</span>
                                    </Show>
                                </button>
                            }
                        }
                    />

                    <Show when=move || error_msg.get().is_some()>
                        <div class="bg-red-50 border-2 border-red-200 rounded-xl p-4">
                            <p class="text-sm text-red-700">{move || error_msg.get().unwrap_or_default()}</p>
                        </div>
                    </Show>

                    <button
                        on:click=on_confirm
                        disabled=move || selected_id.get().is_none() || is_saving.get()
                        class=move || {
                            if selected_id.get().is_some() && !is_saving.get() {
                                "w-full py-5 rounded-2xl font-bold transition-all flex items-center justify-center gap-2 mt-6 bg-gray-900 text-white shadow-xl hover:bg-black"
                            } else {
                                "w-full py-5 rounded-2xl font-bold transition-all flex items-center justify-center gap-2 mt-6 bg-gray-200 text-gray-400 cursor-not-allowed"
                            }
                        }
                    >
                        {move || if is_saving.get() { "저장 중..." } else { "선택 완료 →" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
