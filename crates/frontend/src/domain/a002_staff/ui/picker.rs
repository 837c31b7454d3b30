use contracts::domain::a002_staff::Staff;
use contracts::shared::envelope::ListQuery;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::lookup_select::{LookupItem, LookupSelect};
use crate::shared::toast::use_toasts;

const PICKER_FETCH_SIZE: usize = 100;

fn to_item(staff: Staff) -> LookupItem {
    LookupItem::new(staff.id.clone(), staff.name.clone()).with_haystack(&[
        &staff.name,
        &staff.phone,
        &staff.id,
    ])
}

/// Team-leader selector: one-shot bounded fetch, client-side filtering by
/// name/phone/id.
#[component]
pub fn LeaderPicker(
    #[prop(into)] value: Signal<Option<(String, String)>>,
    on_pick: Callback<Option<LookupItem>>,
    #[prop(optional)] allow_clear: bool,
) -> impl IntoView {
    let toasts = use_toasts();
    let (items, set_items) = signal::<Vec<LookupItem>>(Vec::new());

    spawn_local(async move {
        match super::super::api::team_leaders::list(&ListQuery::page(1, PICKER_FETCH_SIZE)).await {
            Ok(paged) => set_items.set(paged.list.into_iter().map(to_item).collect()),
            Err(e) => toasts.error(format!("团队长列表加载失败: {}", e)),
        }
    });

    view! {
        <LookupSelect
            items=items
            value=value
            on_pick=on_pick
            placeholder="搜索团队长..."
            allow_clear=allow_clear
        />
    }
}

/// Salesperson selector.
#[component]
pub fn SalespersonPicker(
    #[prop(into)] value: Signal<Option<(String, String)>>,
    on_pick: Callback<Option<LookupItem>>,
    #[prop(optional)] allow_clear: bool,
) -> impl IntoView {
    let toasts = use_toasts();
    let (items, set_items) = signal::<Vec<LookupItem>>(Vec::new());

    spawn_local(async move {
        match super::super::api::salespersons::list(&ListQuery::page(1, PICKER_FETCH_SIZE)).await {
            Ok(paged) => set_items.set(paged.list.into_iter().map(to_item).collect()),
            Err(e) => toasts.error(format!("销售列表加载失败: {}", e)),
        }
    });

    view! {
        <LookupSelect
            items=items
            value=value
            on_pick=on_pick
            placeholder="搜索销售..."
            allow_clear=allow_clear
        />
    }
}
