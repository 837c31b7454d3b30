use contracts::domain::a007_reservation::Reservation;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_staff;
use crate::domain::a003_member;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::date_utils::format_date_cn;
use crate::shared::toast::use_toasts;
use crate::system::auth::Session;

/// Read-only reservation detail.
///
/// Loads the reservation, then resolves the member and staff display names
/// through secondary lookups keyed off the ids embedded in it; each lookup
/// is skipped when its key is absent. No edit or cancel action exists here.
#[component]
pub fn BookingDetailModal(
    session: Session,
    reservation_id: String,
    on_close: Callback<()>,
) -> impl IntoView {
    let toasts = use_toasts();

    let (reservation, set_reservation) = signal::<Option<Reservation>>(None);
    let (member_name, set_member_name) = signal::<Option<String>>(None);
    let (staff_name, set_staff_name) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);

    spawn_local(async move {
        match super::super::api::detail(&reservation_id).await {
            Ok(Some(found)) => {
                if let Some(member_id) = found.member_id.clone() {
                    match a003_member::api::detail(&member_id).await {
                        Ok(Some(member)) => set_member_name.set(Some(member.name)),
                        Ok(None) => {}
                        Err(e) => toasts.error(session.report(&e)),
                    }
                }
                if let Some(staff_id) = found.staff_id.clone() {
                    // the requesting staff is usually a salesperson; fall back
                    // to the leader collection for older records
                    let resolved = match a002_staff::api::salespersons::detail(&staff_id).await {
                        Ok(Some(staff)) => Some(staff.name),
                        Ok(None) => match a002_staff::api::team_leaders::detail(&staff_id).await {
                            Ok(Some(staff)) => Some(staff.name),
                            _ => None,
                        },
                        Err(e) => {
                            toasts.error(session.report(&e));
                            None
                        }
                    };
                    set_staff_name.set(resolved);
                }
                set_reservation.set(Some(found));
            }
            Ok(None) => toasts.error("预定单不存在"),
            Err(e) => toasts.error(session.report(&e)),
        }
        set_loading.set(false);
    });

    view! {
        <div class="details">
            <div class="details__header">
                <h2>"预定详情"</h2>
            </div>

            {move || {
                if loading.get() {
                    return view! { <div class="details__loading">"加载中..."</div> }.into_any();
                }
                match reservation.get() {
                    None => view! { <div class="details__loading">"未找到预定记录"</div> }.into_any(),
                    Some(r) => {
                        let status = r.status;
                        view! {
                            <dl class="detail-grid">
                                <dt>"预定单号"</dt>
                                <dd>{r.reserve_no.clone()}</dd>
                                <dt>"状态"</dt>
                                <dd>
                                    <StatusBadge label=status.label() badge_class=status.badge_class()/>
                                </dd>
                                <dt>"会员"</dt>
                                <dd>{move || member_name.get().unwrap_or_else(|| "-".into())}</dd>
                                <dt>"销售"</dt>
                                <dd>{move || staff_name.get().unwrap_or_else(|| "-".into())}</dd>
                                <dt>"预定日期"</dt>
                                <dd>{format_date_cn(r.reserve_date)}</dd>
                                <dt>"预计人数"</dt>
                                <dd>{r.guest_count.map(|n| n.to_string()).unwrap_or_else(|| "-".into())}</dd>
                                <dt>"备注"</dt>
                                <dd>{r.remark.clone().unwrap_or_else(|| "-".into())}</dd>
                            </dl>
                        }
                        .into_any()
                    }
                }
            }}

            <div class="details__actions">
                <button class="button button--secondary" on:click=move |_| on_close.run(())>
                    "关闭"
                </button>
            </div>
        </div>
    }
}
