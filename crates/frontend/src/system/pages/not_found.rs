use leptos::prelude::*;
use leptos_router::components::A;

/// Fallback for unmatched navigation paths.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"页面不存在"</p>
            <A href="/">"返回首页"</A>
        </div>
    }
}
