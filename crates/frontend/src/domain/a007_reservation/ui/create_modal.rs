use chrono::NaiveDate;
use contracts::domain::a006_room::Room;
use contracts::domain::a007_reservation::DirectReserveDraft;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_staff::ui::picker::SalespersonPicker;
use crate::domain::a003_member::ui::picker::MemberPicker;
use crate::shared::components::lookup_select::LookupItem;
use crate::shared::date_utils::format_date_cn;
use crate::shared::toast::use_toasts;
use crate::system::auth::Session;

/// Direct-booking form, seeded from the clicked grid cell.
///
/// The member is mandatory; submission is rejected client-side before any
/// network call when none is selected. The created reservation is already
/// approved, so no review step follows.
#[component]
pub fn CreateBookingModal(
    session: Session,
    store_id: String,
    room: Room,
    date: NaiveDate,
    on_done: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let toasts = use_toasts();

    let room_id = room.id.clone();
    let room_summary = format!(
        "{} ({}) ￥{:.2}",
        room.room_no, room.room_type, room.price
    );

    let (member, set_member) = signal::<Option<(String, String)>>(None);
    let (staff, set_staff) = signal::<Option<(String, String)>>(None);
    let (guest_count, set_guest_count) = signal(String::new());
    let (remark, set_remark) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let submit = move |_| {
        let draft = DirectReserveDraft {
            member_id: member.get_untracked().map(|(id, _)| id),
            staff_id: staff.get_untracked().map(|(id, _)| id),
            guest_count: guest_count.get_untracked().trim().parse().ok(),
            remark: remark.get_untracked(),
        };
        let request = match draft.validate(&store_id, &room_id, date) {
            Ok(request) => request,
            Err(message) => {
                // validation failure: surfaced without touching the network
                toasts.error(message);
                return;
            }
        };
        set_submitting.set(true);
        spawn_local(async move {
            match super::super::api::direct_reserve(&request).await {
                Ok(reservation) => {
                    toasts.success(format!("预定成功，单号 {}", reservation.reserve_no));
                    on_done.run(());
                }
                // business failures carry the server message; nothing is applied
                Err(e) => toasts.error(session.report(&e)),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="details">
            <div class="details__header">
                <h2>"新建预定"</h2>
            </div>

            <div class="booking-summary">
                <div>{room_summary}</div>
                <div>{format_date_cn(date)}</div>
            </div>

            <div class="form-group">
                <label>"会员（必选）"</label>
                <MemberPicker
                    value=member
                    on_pick=Callback::new(move |item: Option<LookupItem>| {
                        set_member.set(item.map(|i| (i.id, i.display)));
                    })
                />
            </div>

            <div class="form-group">
                <label>"销售（可选）"</label>
                <SalespersonPicker
                    value=staff
                    on_pick=Callback::new(move |item: Option<LookupItem>| {
                        set_staff.set(item.map(|i| (i.id, i.display)));
                    })
                    allow_clear=true
                />
            </div>

            <div class="form-group">
                <label>"预计人数"</label>
                <input
                    type="number"
                    min="1"
                    prop:value=move || guest_count.get()
                    on:input=move |ev| set_guest_count.set(event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label>"备注"</label>
                <textarea
                    prop:value=move || remark.get()
                    on:input=move |ev| set_remark.set(event_target_value(&ev))
                ></textarea>
            </div>

            <div class="details__actions">
                <button class="button button--primary" disabled=move || submitting.get() on:click=submit>
                    "确认预定"
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    "取消"
                </button>
            </div>
        </div>
    }
}
