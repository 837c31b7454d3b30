use contracts::domain::a001_store::{PricingScheme, Store, TierPrice, TimeSlotPrice};
use contracts::domain::a003_member::CardType;
use contracts::domain::a006_room::Room;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a006_room;
use crate::shared::toast::use_toasts;
use crate::system::auth::Session;

/// Store pricing settings plus a read-only view of the store's rooms.
///
/// The pricing form is picked off the scheme tag: time-slot stores edit a
/// slot table, membership-tier stores edit one price per card tier.
#[component]
pub fn StoreDetails(
    session: Session,
    store: Store,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let toasts = use_toasts();

    let store_id = store.id.clone();
    let store_name = store.name.clone();

    let (scheme, set_scheme) = signal(store.pricing.clone());
    let (saving, set_saving) = signal(false);
    let (rooms, set_rooms) = signal::<Vec<Room>>(Vec::new());

    {
        let store_id = store.id.clone();
        spawn_local(async move {
            // the list row may be stale; re-read the store before editing
            match super::super::api::detail(&store_id).await {
                Ok(Some(fresh)) => set_scheme.set(fresh.pricing),
                Ok(None) => toasts.error("门店不存在"),
                Err(e) => toasts.error(session.report(&e)),
            }
            match a006_room::api::list(&store_id).await {
                Ok(list) => set_rooms.set(list),
                Err(e) => toasts.error(session.report(&e)),
            }
        });
    }

    let switch_kind = move |kind: String| {
        set_scheme.set(match kind.as_str() {
            "membershipTier" => PricingScheme::MembershipTier {
                prices: CardType::TIERS
                    .iter()
                    .map(|tier| TierPrice {
                        card_type: *tier,
                        price: 0.0,
                    })
                    .collect(),
            },
            _ => PricingScheme::TimeSlot { slots: Vec::new() },
        });
    };

    let save = {
        let store_id = store_id.clone();
        move |_| {
            let store_id = store_id.clone();
            let pricing = scheme.get();
            set_saving.set(true);
            spawn_local(async move {
                let patch = serde_json::json!({ "pricing": pricing });
                match super::super::api::update(&store_id, &patch).await {
                    Ok(_) => {
                        toasts.success("价格设置已保存");
                        on_saved.run(());
                    }
                    Err(e) => toasts.error(session.report(&e)),
                }
                set_saving.set(false);
            });
        }
    };

    let is_tier = move || matches!(scheme.get(), PricingScheme::MembershipTier { .. });

    view! {
        <div class="details">
            <div class="details__header">
                <h2>{format!("门店设置 - {}", store_name)}</h2>
            </div>

            <div class="form-group">
                <label>"计价方式"</label>
                <select
                    prop:value=move || {
                        if is_tier() { "membershipTier" } else { "timeSlot" }
                    }
                    on:change=move |ev| switch_kind(event_target_value(&ev))
                >
                    <option value="timeSlot">"时段计价"</option>
                    <option value="membershipTier">"会员等级计价"</option>
                </select>
            </div>

            {move || match scheme.get() {
                PricingScheme::TimeSlot { slots } => {
                    view! { <TimeSlotEditor slots=slots set_scheme=set_scheme/> }.into_any()
                }
                PricingScheme::MembershipTier { prices } => {
                    view! { <TierEditor prices=prices set_scheme=set_scheme/> }.into_any()
                }
            }}

            <h3>"包房列表"</h3>
            <div class="table">
                <table class="table__data">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"房号"</th>
                            <th class="table__header-cell">"房型"</th>
                            <th class="table__header-cell">"标价"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rooms.get().into_iter().map(|room| view! {
                            <tr class="table__row">
                                <td class="table__cell">{room.room_no}</td>
                                <td class="table__cell">{room.room_type}</td>
                                <td class="table__cell">{format!("{:.2}", room.price)}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <div class="details__actions">
                <button class="button button--primary" disabled=move || saving.get() on:click=save>
                    "保存"
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    "取消"
                </button>
            </div>
        </div>
    }
}

#[component]
fn TimeSlotEditor(
    slots: Vec<TimeSlotPrice>,
    set_scheme: WriteSignal<PricingScheme>,
) -> impl IntoView {
    let (rows, set_rows) = signal(slots);

    let sync = move |rows_now: Vec<TimeSlotPrice>| {
        set_scheme.set(PricingScheme::TimeSlot { slots: rows_now });
    };

    let update_row = move |idx: usize, field: &'static str, value: String| {
        set_rows.update(|rows| {
            if let Some(slot) = rows.get_mut(idx) {
                match field {
                    "start" => slot.start_time = value,
                    "end" => slot.end_time = value,
                    _ => slot.price = value.parse().unwrap_or(slot.price),
                }
            }
        });
        sync(rows.get_untracked());
    };

    let add_row = move |_| {
        set_rows.update(|rows| {
            rows.push(TimeSlotPrice {
                start_time: "12:00".into(),
                end_time: "18:00".into(),
                price: 0.0,
            });
        });
        sync(rows.get_untracked());
    };

    let remove_row = move |idx: usize| {
        set_rows.update(|rows| {
            if idx < rows.len() {
                rows.remove(idx);
            }
        });
        sync(rows.get_untracked());
    };

    view! {
        <div class="pricing-editor">
            <table class="table__data">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">"开始"</th>
                        <th class="table__header-cell">"结束"</th>
                        <th class="table__header-cell">"价格"</th>
                        <th class="table__header-cell"></th>
                    </tr>
                </thead>
                <tbody>
                    {move || rows.get().into_iter().enumerate().map(|(idx, slot)| {
                        view! {
                            <tr class="table__row">
                                <td class="table__cell">
                                    <input
                                        type="time"
                                        prop:value=slot.start_time.clone()
                                        on:change=move |ev| update_row(idx, "start", event_target_value(&ev))
                                    />
                                </td>
                                <td class="table__cell">
                                    <input
                                        type="time"
                                        prop:value=slot.end_time.clone()
                                        on:change=move |ev| update_row(idx, "end", event_target_value(&ev))
                                    />
                                </td>
                                <td class="table__cell">
                                    <input
                                        type="number"
                                        prop:value=slot.price.to_string()
                                        on:change=move |ev| update_row(idx, "price", event_target_value(&ev))
                                    />
                                </td>
                                <td class="table__cell">
                                    <button class="button button--small" on:click=move |_| remove_row(idx)>
                                        "删除"
                                    </button>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
            <button class="button button--secondary" on:click=add_row>"添加时段"</button>
        </div>
    }
}

#[component]
fn TierEditor(
    prices: Vec<TierPrice>,
    set_scheme: WriteSignal<PricingScheme>,
) -> impl IntoView {
    let (rows, set_rows) = signal(prices);

    let update_price = move |tier: CardType, value: String| {
        set_rows.update(|rows| {
            if let Some(row) = rows.iter_mut().find(|r| r.card_type == tier) {
                row.price = value.parse().unwrap_or(row.price);
            } else if let Ok(price) = value.parse() {
                rows.push(TierPrice {
                    card_type: tier,
                    price,
                });
            }
        });
        set_scheme.set(PricingScheme::MembershipTier {
            prices: rows.get_untracked(),
        });
    };

    view! {
        <div class="pricing-editor">
            <table class="table__data">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">"会员等级"</th>
                        <th class="table__header-cell">"价格"</th>
                    </tr>
                </thead>
                <tbody>
                    {CardType::TIERS.iter().map(|tier| {
                        let tier = *tier;
                        let current = move || {
                            rows.get()
                                .iter()
                                .find(|r| r.card_type == tier)
                                .map(|r| r.price.to_string())
                                .unwrap_or_else(|| "0".to_string())
                        };
                        view! {
                            <tr class="table__row">
                                <td class="table__cell">{tier.label()}</td>
                                <td class="table__cell">
                                    <input
                                        type="number"
                                        prop:value=current
                                        on:change=move |ev| update_price(tier, event_target_value(&ev))
                                    />
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}
