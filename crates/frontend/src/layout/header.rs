use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::system::auth::Session;

#[component]
pub fn Header(session: Session) -> impl IntoView {
    view! {
        <header class="topbar">
            <div class="topbar__title">"KTV 管理后台"</div>
            <div class="topbar__actions">
                <button
                    class="button button--secondary"
                    on:click=move |_| session.logout_with_revoke()
                >
                    {icon("logout")}
                    "退出登录"
                </button>
            </div>
        </header>
    }
}
