use contracts::shared::envelope::ListQuery;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::super::api;
use crate::shared::components::lookup_select::{LookupItem, LookupSelect};
use crate::shared::toast::use_toasts;

/// Bounded page size of the picker's one-shot fetch. A known scale limit:
/// stores beyond this are not offered.
pub const PICKER_FETCH_SIZE: usize = 100;

/// Store selector. Fetches the full store list once and filters client-side.
#[component]
pub fn StorePicker(
    #[prop(into)] value: Signal<Option<(String, String)>>,
    on_pick: Callback<Option<LookupItem>>,
    /// Offer "all stores" (clears the selection).
    #[prop(optional)] allow_clear: bool,
) -> impl IntoView {
    let toasts = use_toasts();
    let (items, set_items) = signal::<Vec<LookupItem>>(Vec::new());

    spawn_local(async move {
        match api::list(&ListQuery::page(1, PICKER_FETCH_SIZE)).await {
            Ok(paged) => {
                let options = paged
                    .list
                    .into_iter()
                    .map(|store| {
                        LookupItem::new(store.id.clone(), store.name.clone())
                            .with_haystack(&[&store.name, &store.id])
                    })
                    .collect();
                set_items.set(options);
            }
            Err(e) => toasts.error(format!("门店列表加载失败: {}", e)),
        }
    });

    view! {
        <LookupSelect
            items=items
            value=value
            on_pick=on_pick
            placeholder="搜索门店..."
            allow_clear=allow_clear
        />
    }
}
