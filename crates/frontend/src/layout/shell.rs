use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use super::header::Header;
use super::sidebar::Sidebar;
use crate::system::auth::Session;

/// Authenticated page frame: header, sidebar and the page body.
///
/// Unauthenticated access remembers the requested location and bounces to
/// the login view; the login page navigates back afterwards.
#[component]
pub fn Shell(session: Session, children: ChildrenFn) -> impl IntoView {
    let location = use_location();

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=move || {
                session.remember_location(location.pathname.get());
                view! { <Redirect path="/login"/> }
            }
        >
            <div class="shell">
                <Header session=session/>
                <div class="shell__body">
                    <Sidebar/>
                    <main class="shell__content">{children()}</main>
                </div>
            </div>
        </Show>
    }
}
