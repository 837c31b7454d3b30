use contracts::domain::a003_member::{CardType, Member, RechargeApply};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_staff::ui::picker::SalespersonPicker;
use crate::shared::components::lookup_select::LookupItem;
use crate::shared::toast::use_toasts;
use crate::system::auth::Session;

/// Member top-up form.
///
/// Shows the tier the member will land on before submitting: the card type
/// follows the cumulative recharge total and never moves down.
#[component]
pub fn RechargeModal(
    session: Session,
    member: Member,
    on_done: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let toasts = use_toasts();

    let member_id = member.id.clone();
    let member_name = member.name.clone();
    let current_tier = member.card_type;
    let cumulative = member.cumulative_recharge;

    let (amount, set_amount) = signal(String::new());
    let (gift_amount, set_gift_amount) = signal(String::new());
    let (staff, set_staff) = signal::<Option<(String, String)>>(None);
    let (submitting, set_submitting) = signal(false);

    let parsed_amount = move || amount.get().trim().parse::<f64>().unwrap_or(0.0);
    let parsed_gift = move || gift_amount.get().trim().parse::<f64>().unwrap_or(0.0);

    let projected_tier = move || CardType::for_cumulative(cumulative + parsed_amount());

    let submit = {
        let member_id = member_id.clone();
        move |_| {
            let paid = parsed_amount();
            let gift = parsed_gift();
            if paid <= 0.0 && gift <= 0.0 {
                toasts.error("请输入充值金额");
                return;
            }
            let member_id = member_id.clone();
            let apply = RechargeApply {
                amount: paid,
                gift_amount: gift,
                staff_id: staff.get_untracked().map(|(id, _)| id),
            };
            set_submitting.set(true);
            spawn_local(async move {
                match super::super::api::recharge(&member_id, &apply).await {
                    Ok(updated) => {
                        toasts.success(format!(
                            "充值成功，当前余额 {:.2}，等级 {}",
                            updated.remaining_recharge,
                            updated.card_type.label()
                        ));
                        on_done.run(());
                    }
                    Err(e) => toasts.error(session.report(&e)),
                }
                set_submitting.set(false);
            });
        }
    };

    view! {
        <div class="details">
            <div class="details__header">
                <h2>{format!("会员充值 - {}", member_name)}</h2>
            </div>

            <div class="form-group">
                <label>"充值金额"</label>
                <input
                    type="number"
                    min="0"
                    prop:value=move || amount.get()
                    on:input=move |ev| set_amount.set(event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label>"赠送金额"</label>
                <input
                    type="number"
                    min="0"
                    prop:value=move || gift_amount.get()
                    on:input=move |ev| set_gift_amount.set(event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label>"经办人"</label>
                <SalespersonPicker
                    value=staff
                    on_pick=Callback::new(move |item: Option<LookupItem>| {
                        set_staff.set(item.map(|i| (i.id, i.display)));
                    })
                    allow_clear=true
                />
            </div>

            <div class="recharge-tier-preview">
                <span>{format!("当前等级：{}", current_tier.label())}</span>
                <span>
                    {move || {
                        let next = projected_tier();
                        if next > current_tier {
                            format!("充值后升级为：{}", next.label())
                        } else {
                            format!("充值后等级：{}", next.label())
                        }
                    }}
                </span>
            </div>

            <div class="details__actions">
                <button class="button button--primary" disabled=move || submitting.get() on:click=submit>
                    "确认充值"
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    "取消"
                </button>
            </div>
        </div>
    }
}
