use leptos::prelude::*;

/// RecycleMap 标志（画有回收箭头的回收箱）
#[component]
pub fn Logo(#[prop(into, default = String::from("w-10 h-10"))] class: String) -> impl IntoView {
    view! {
        <svg viewBox="0 0 100 100" fill="none" xmlns="http://www.w3.org/2000/svg" class=class>
            <path
                d="M 25 35 L 30 90 C 30 93 32 95 35 95 L 65 95 C 68 95 70 93 70 90 L 75 35 Z"
                fill="#10B981"
            />
            <rect x="20" y="28" width="60" height="7" rx="2" fill="#10B981" />
            <path
                d="M 35 28 L 35 20 C 35 17 37 15 40 15 L 60 15 C 63 15 65 17 65 20 L 65 28"
                stroke="#10B981"
                stroke-width="4"
                fill="none"
                stroke-linecap="round"
            />
            <g transform="translate(50, 62)">
                <path d="M 0 -18 L 5.5 -10 L 2 -10 L 2 -3 L -2 -3 L -2 -10 L -5.5 -10 Z" fill="white" />
                <path
                    d="M 0 -18 L 5.5 -10 L 2 -10 L 2 -3 L -2 -3 L -2 -10 L -5.5 -10 Z"
                    fill="white"
                    transform="rotate(120)"
                />
                <path
                    d="M 0 -18 L 5.5 -10 L 2 -10 L 2 -3 L -2 -3 L -2 -10 L -5.5 -10 Z"
                    fill="white"
                    transform="rotate(240)"
                />
            </g>
        </svg>
    }
}
