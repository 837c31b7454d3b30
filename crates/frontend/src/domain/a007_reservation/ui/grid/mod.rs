pub mod state;

use std::collections::HashMap;

use chrono::NaiveDate;
use contracts::domain::a001_store::Store;
use contracts::domain::a006_room::Room;
use contracts::domain::a007_reservation::{
    cell_action, CellAction, CellState, RoomSchedule, ScheduleCell,
};
use contracts::shared::envelope::ListQuery;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_store;
use crate::domain::a001_store::ui::picker::StorePicker;
use crate::domain::a007_reservation::api::{self, ScheduleQuery};
use crate::shared::components::lookup_select::LookupItem;
use crate::shared::date_utils::{format_grid_date, week_window, WINDOW_DAYS};
use crate::shared::icons::icon;
use crate::shared::modal_stack::use_modals;
use crate::shared::query_cache::QueryCache;
use crate::shared::toast::use_toasts;
use crate::system::auth::Session;

use super::create_modal::CreateBookingModal;
use super::detail_modal::BookingDetailModal;
use self::state::create_state;

const RESOURCE: &str = "schedule";

/// Room availability grid.
///
/// One row per room, one column per date of the 7-day window. With no store
/// selected the matrix is assembled from one schedule request per store,
/// fired concurrently; "loading" is an OR across the in-flight requests.
#[component]
pub fn ScheduleGrid(session: Session, cache: QueryCache) -> impl IntoView {
    let toasts = use_toasts();
    let modals = use_modals();

    let state = create_state();
    let (stores, set_stores) = signal::<Vec<Store>>(Vec::new());
    let (rows_by_store, set_rows_by_store) =
        signal::<HashMap<String, Vec<RoomSchedule>>>(HashMap::new());
    let (pending, set_pending) = signal(0usize);

    // Store list drives both the filter options and the fan-out targets.
    spawn_local(async move {
        match a001_store::api::list(&ListQuery::page(1, 100)).await {
            Ok(paged) => set_stores.set(paged.list),
            Err(e) => toasts.error(session.report(&e)),
        }
    });

    Effect::new(move |_| {
        let anchor = state.get().anchor;
        let selected = state.get().store;
        let targets: Vec<String> = match &selected {
            Some((id, _)) => vec![id.clone()],
            None => stores.get().iter().map(|s| s.id.clone()).collect(),
        };

        for store_id in targets {
            let query = ScheduleQuery {
                store_id: store_id.clone(),
                start_date: anchor,
                days: WINDOW_DAYS,
            };
            let key = QueryCache::key(RESOURCE, &query);
            if !cache.needs_fetch(&key) {
                continue;
            }
            cache.begin(&key);
            set_pending.update(|p| *p += 1);
            spawn_local(async move {
                match api::schedule(&query).await {
                    Ok(schedule_rows) => {
                        cache.complete(
                            &key,
                            serde_json::to_value(&schedule_rows).unwrap_or_default(),
                        );
                        set_rows_by_store.update(|m| {
                            m.insert(store_id, schedule_rows);
                        });
                    }
                    Err(e) => {
                        cache.fail(&key);
                        toasts.error(session.report(&e));
                    }
                }
                set_pending.update(|p| *p = p.saturating_sub(1));
            });
        }
    });

    // Flattened room list in store order, restricted to the current filter.
    let visible_rows = move || {
        let selected = state.get().store;
        let by_store = rows_by_store.get();
        let ordered_ids: Vec<String> = match &selected {
            Some((id, _)) => vec![id.clone()],
            None => stores.get().iter().map(|s| s.id.clone()).collect(),
        };
        ordered_ids
            .into_iter()
            .flat_map(|id| by_store.get(&id).cloned().unwrap_or_default())
            .collect::<Vec<RoomSchedule>>()
    };

    let dates = move || week_window(state.get().anchor);

    let open_create = move |room: Room, date: NaiveDate| {
        let store_id = room.store_id.clone();
        modals.push_with_frame(
            Some("max-width: min(560px, 95vw); width: min(560px, 95vw);".to_string()),
            None,
            move |handle| {
                let room = room.clone();
                let store_id = store_id.clone();
                let on_done = Callback::new({
                    let handle = handle.clone();
                    move |_| {
                        handle.close();
                        // every open grid view refetches and shows the new cell
                        cache.invalidate_prefix(RESOURCE);
                    }
                });
                let on_cancel = Callback::new({
                    let handle = handle.clone();
                    move |_| handle.close()
                });
                view! {
                    <CreateBookingModal
                        session=session
                        store_id=store_id
                        room=room
                        date=date
                        on_done=on_done
                        on_cancel=on_cancel
                    />
                }
                .into_any()
            },
        );
    };

    let open_detail = move |reservation_id: String| {
        modals.push_with_frame(
            Some("max-width: min(520px, 95vw); width: min(520px, 95vw);".to_string()),
            None,
            move |handle| {
                let reservation_id = reservation_id.clone();
                let on_close = Callback::new({
                    let handle = handle.clone();
                    move |_| handle.close()
                });
                view! {
                    <BookingDetailModal
                        session=session
                        reservation_id=reservation_id
                        on_close=on_close
                    />
                }
                .into_any()
            },
        );
    };

    let dispatch = move |room: Room, cell: ScheduleCell| match cell_action(&cell) {
        CellAction::OpenCreate => open_create(room, cell.date),
        CellAction::OpenDetail(id) => open_detail(id),
        // occupied state without a reservation reference: inconsistent data,
        // the cell stays inert
        CellAction::Inert => {}
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"房间预定"</h1>
                    <Show when=move || (pending.get() > 0)>
                        <span class="header__loading">"加载中..."</span>
                    </Show>
                </div>
                <div class="header__actions">
                    <StorePicker
                        value=Signal::derive(move || state.get().store)
                        on_pick=Callback::new(move |item: Option<LookupItem>| {
                            state.update(|s| s.store = item.map(|i| (i.id, i.display)));
                        })
                        allow_clear=true
                    />
                    <button
                        class="button button--secondary"
                        on:click=move |_| state.update(|s| s.shift_week(-1))
                    >
                        {icon("chevron-left")}
                        "上一周"
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=move |_| state.update(|s| s.reset_to_today())
                    >
                        "本周"
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=move |_| state.update(|s| s.shift_week(1))
                    >
                        "下一周"
                        {icon("chevron-right")}
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=move |_| cache.invalidate_prefix(RESOURCE)
                    >
                        {icon("refresh")}
                        "刷新"
                    </button>
                </div>
            </div>

            <div class="schedule-legend">
                <span class="schedule-cell--available">"可订"</span>
                <span class="schedule-cell--pending">"待审核"</span>
                <span class="schedule-cell--booked">"已预定"</span>
                <span class="schedule-cell--finished">"已完成"</span>
            </div>

            <div class="table schedule-grid">
                <table class="table__data">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"包房"</th>
                            {move || dates().into_iter().map(|d| view! {
                                <th class="table__header-cell">{format_grid_date(d)}</th>
                            }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible_rows().into_iter().map(|schedule| {
                            let room = schedule.room.clone();
                            let room_label = format!(
                                "{} {} ￥{:.0}",
                                room.room_no, room.room_type, room.price
                            );
                            let cells_by_date: HashMap<NaiveDate, ScheduleCell> = schedule
                                .cells
                                .iter()
                                .map(|c| (c.date, c.clone()))
                                .collect();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell schedule-grid__room">{room_label}</td>
                                    {dates().into_iter().map(|date| {
                                        // an absent cell means the room is bookable that day
                                        let cell = cells_by_date.get(&date).cloned().unwrap_or(ScheduleCell {
                                            date,
                                            state: CellState::Available,
                                            reservation_id: None,
                                        });
                                        let label = cell.state.label();
                                        let cell_class = cell.state.cell_class();
                                        let room_for_click = room.clone();
                                        view! {
                                            <td
                                                class=format!("table__cell schedule-cell {}", cell_class)
                                                on:click=move |_| dispatch(room_for_click.clone(), cell.clone())
                                            >
                                                {label}
                                            </td>
                                        }
                                    }).collect_view()}
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
                <Show when=move || visible_rows().is_empty() && pending.get() == 0>
                    <div class="schedule-grid__empty">"暂无包房数据"</div>
                </Show>
            </div>
        </div>
    }
}
