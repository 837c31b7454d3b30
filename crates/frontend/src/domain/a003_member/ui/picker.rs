use contracts::domain::a003_member::Member;
use contracts::shared::envelope::ListQuery;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::lookup_select::{LookupItem, LookupSelect};
use crate::shared::toast::use_toasts;

const PICKER_FETCH_SIZE: usize = 100;

fn to_item(member: Member) -> LookupItem {
    let display = format!("{} ({})", member.name, member.phone);
    LookupItem::new(member.id.clone(), display).with_haystack(&[
        &member.name,
        &member.phone,
        &member.id_number,
        &member.member_id,
    ])
}

/// Member selector: matches name, phone, ID number and member number.
#[component]
pub fn MemberPicker(
    #[prop(into)] value: Signal<Option<(String, String)>>,
    on_pick: Callback<Option<LookupItem>>,
    #[prop(optional)] allow_clear: bool,
) -> impl IntoView {
    let toasts = use_toasts();
    let (items, set_items) = signal::<Vec<LookupItem>>(Vec::new());

    spawn_local(async move {
        match super::super::api::list(&ListQuery::page(1, PICKER_FETCH_SIZE)).await {
            Ok(paged) => set_items.set(paged.list.into_iter().map(to_item).collect()),
            Err(e) => toasts.error(format!("会员列表加载失败: {}", e)),
        }
    });

    view! {
        <LookupSelect
            items=items
            value=value
            on_pick=on_pick
            placeholder="搜索会员（姓名/电话/证件号）..."
            allow_clear=allow_clear
        />
    }
}
