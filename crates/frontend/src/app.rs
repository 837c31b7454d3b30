use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::shared::query_cache::QueryCache;
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth::Session;

#[component]
pub fn App() -> impl IntoView {
    // Session and cache are constructed once and passed into views as
    // explicit props; only UI chrome (toasts, modals) goes through context.
    let session = Session::restore();
    let cache = QueryCache::new();

    provide_context(ToastService::new());
    provide_context(ModalStackService::new());

    view! {
        <AppRoutes session=session cache=cache/>
        <ToastHost/>
        <ModalHost/>
    }
}
