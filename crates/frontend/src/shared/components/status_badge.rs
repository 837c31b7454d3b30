use leptos::prelude::*;

/// Colored status pill used by the ledgers and the reservation detail.
#[component]
pub fn StatusBadge(
    #[prop(into)] label: String,
    #[prop(into)] badge_class: String,
) -> impl IntoView {
    view! {
        <span class=format!("badge {}", badge_class)>{label}</span>
    }
}
