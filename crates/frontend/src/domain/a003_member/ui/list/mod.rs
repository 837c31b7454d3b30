pub mod state;

use std::collections::HashSet;

use contracts::domain::a003_member::{CreateMemberDto, Member};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_staff::ui::picker::SalespersonPicker;
use crate::shared::components::editable_cell::EditableCell;
use crate::shared::components::lookup_select::LookupItem;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cycle_sort, sort_indicator, sorted_view, ColumnSpec, SearchInput, SortState};
use crate::shared::modal_stack::use_modals;
use crate::shared::query_cache::QueryCache;
use crate::shared::toast::use_toasts;
use crate::system::auth::Session;

use super::recharge_modal::RechargeModal;
use self::state::create_state;

const RESOURCE: &str = "members";

// The card tier column is display-only: the tier is derived from the
// cumulative recharge total and is owned by the recharge flow.
const COLUMNS: &[ColumnSpec<Member>] = &[
    ColumnSpec::new("memberId", "会员号", |m| m.member_id.clone()),
    ColumnSpec::new("name", "姓名", |m| m.name.clone()),
    ColumnSpec::new("phone", "电话", |m| m.phone.clone()),
    ColumnSpec::new("cardType", "等级", |m| m.card_type.label().to_string()),
    ColumnSpec::new("remainingRecharge", "储值余额", |m| format!("{:.2}", m.remaining_recharge)),
    ColumnSpec::new("remainingGift", "赠送余额", |m| format!("{:.2}", m.remaining_gift)),
];

fn field_patch(field: &str, value: String) -> serde_json::Value {
    let mut body = serde_json::Map::new();
    body.insert(field.to_string(), serde_json::Value::String(value));
    serde_json::Value::Object(body)
}

#[component]
pub fn MemberList(session: Session, cache: QueryCache) -> impl IntoView {
    let toasts = use_toasts();
    let modals = use_modals();

    let state = create_state();
    let (rows, set_rows) = signal::<Vec<Member>>(Vec::new());
    let (total, set_total) = signal(0usize);
    let (sort, set_sort) = signal::<SortState>(None);
    let (delete_mode, set_delete_mode) = signal(false);
    let (selected, set_selected) = signal::<HashSet<String>>(HashSet::new());

    Effect::new(move |_| {
        let q = state.get().query();
        let key = QueryCache::key(RESOURCE, &q);
        if !cache.needs_fetch(&key) {
            return;
        }
        cache.begin(&key);
        spawn_local(async move {
            match super::super::api::list(&q).await {
                Ok(paged) => {
                    cache.complete(&key, serde_json::to_value(&paged.list).unwrap_or_default());
                    set_total.set(paged.total);
                    set_rows.set(paged.list);
                }
                Err(e) => {
                    cache.fail(&key);
                    toasts.error(session.report(&e));
                }
            }
        });
    });

    let displayed = move || sorted_view(&rows.get(), COLUMNS, &sort.get());

    let invalidate = move || cache.invalidate_prefix(RESOURCE);

    let handle_create = move |_| {
        spawn_local(async move {
            let mut dto = CreateMemberDto::placeholder();
            dto.sales_id = state.get_untracked().sales_id;
            match super::super::api::create(&dto).await {
                Ok(_) => {
                    toasts.success("已创建，可直接在表格中编辑");
                    invalidate();
                }
                Err(e) => toasts.error(session.report(&e)),
            }
        });
    };

    let patch_field = move |id: String, field: &'static str, value: String| {
        spawn_local(async move {
            match super::super::api::update(&id, &field_patch(field, value)).await {
                Ok(_) => invalidate(),
                Err(e) => toasts.error(session.report(&e)),
            }
        });
    };

    let assign_salesperson = move |id: String, sales: Option<String>| {
        spawn_local(async move {
            let mut body = serde_json::Map::new();
            body.insert(
                "salesId".to_string(),
                sales.map(serde_json::Value::String).unwrap_or(serde_json::Value::Null),
            );
            match super::super::api::update(&id, &serde_json::Value::Object(body)).await {
                Ok(_) => invalidate(),
                Err(e) => toasts.error(session.report(&e)),
            }
        });
    };

    let toggle_select = move |id: String, checked: bool| {
        set_selected.update(|s| {
            if checked {
                s.insert(id);
            } else {
                s.remove(&id);
            }
        });
    };

    let delete_selected = move |_| {
        let ids: Vec<String> = selected.get().into_iter().collect();
        if ids.is_empty() {
            return;
        }
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!("确认删除选中的 {} 个会员？", ids.len()))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            let mut failed = 0usize;
            for id in ids {
                if let Err(e) = super::super::api::remove(&id).await {
                    failed += 1;
                    toasts.error(format!("删除失败: {}", session.report(&e)));
                }
            }
            if failed > 0 {
                toasts.error(format!("本次共 {} 条记录删除失败", failed));
            }
            set_selected.set(HashSet::new());
            set_delete_mode.set(false);
            invalidate();
        });
    };

    let open_recharge = move |member: Member| {
        modals.push_with_frame(
            Some("max-width: min(520px, 95vw); width: min(520px, 95vw);".to_string()),
            None,
            move |handle| {
                let member = member.clone();
                let on_done = Callback::new({
                    let handle = handle.clone();
                    move |_| {
                        handle.close();
                        // the member row and both ledgers are now stale
                        cache.invalidate_prefix(RESOURCE);
                        cache.invalidate_prefix("recharges");
                    }
                });
                let on_cancel = Callback::new({
                    let handle = handle.clone();
                    move |_| handle.close()
                });
                view! {
                    <RechargeModal
                        session=session
                        member=member
                        on_done=on_done
                        on_cancel=on_cancel
                    />
                }
                .into_any()
            },
        );
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"会员"</h1>
                </div>
                <div class="header__actions">
                    <SearchInput
                        value=Signal::derive(move || state.get().keyword)
                        on_change=Callback::new(move |kw| {
                            state.update(|s| {
                                s.keyword = kw;
                                s.page = 1;
                            });
                        })
                        placeholder="搜索姓名/电话/证件号..."
                    />
                    <SalespersonPicker
                        value=Signal::derive(move || {
                            state.get().sales_id.map(|id| (id.clone(), id))
                        })
                        on_pick=Callback::new(move |item: Option<LookupItem>| {
                            state.update(|s| {
                                s.sales_id = item.map(|i| i.id);
                                s.page = 1;
                            });
                        })
                        allow_clear=true
                    />
                    <button class="button button--primary" on:click=handle_create>
                        {icon("plus")}
                        "新建会员"
                    </button>
                    <button class="button button--secondary" on:click=move |_| invalidate()>
                        {icon("refresh")}
                        "刷新"
                    </button>
                    <button
                        class="button button--secondary"
                        class:button--danger=move || delete_mode.get()
                        on:click=move |_| {
                            set_delete_mode.update(|m| *m = !*m);
                            set_selected.set(HashSet::new());
                        }
                    >
                        {icon("delete")}
                        {move || if delete_mode.get() { "退出删除" } else { "删除模式" }}
                    </button>
                    <Show when=move || delete_mode.get()>
                        <button
                            class="button button--danger"
                            disabled=move || selected.get().is_empty()
                            on:click=delete_selected
                        >
                            {move || format!("删除选中 ({})", selected.get().len())}
                        </button>
                    </Show>
                </div>
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <Show when=move || delete_mode.get()>
                                <th class="table__header-cell table__header-cell--checkbox"></th>
                            </Show>
                            {COLUMNS.iter().map(|col| {
                                let key = col.key;
                                view! {
                                    <th
                                        class="table__header-cell table__header-cell--sortable"
                                        on:click=move |_| set_sort.update(|s| *s = cycle_sort(s, key))
                                    >
                                        {col.label}
                                        {move || sort_indicator(&sort.get(), key)}
                                    </th>
                                }
                            }).collect_view()}
                            <th class="table__header-cell">"所属销售"</th>
                            <th class="table__header-cell">"操作"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || displayed().into_iter().map(|member| {
                            let id = member.id.clone();
                            let id_cb = id.clone();
                            let id_name = id.clone();
                            let id_phone = id.clone();
                            let id_sales = id.clone();
                            let name = member.name.clone();
                            let phone = member.phone.clone();
                            let sales_id = member.sales_id.clone();
                            let member_no = member.member_id.clone();
                            let tier_label = member.card_type.label();
                            let balance = member.remaining_recharge;
                            let gift = member.remaining_gift;
                            let member_for_recharge = member.clone();
                            view! {
                                <tr class="table__row">
                                    <Show when=move || delete_mode.get()>
                                        {
                                            let id_checked = id_cb.clone();
                                            let id_toggle = id_cb.clone();
                                            view! {
                                                <TableCheckbox
                                                    checked=Signal::derive(move || selected.get().contains(&id_checked))
                                                    on_change=Callback::new(move |checked| toggle_select(id_toggle.clone(), checked))
                                                />
                                            }
                                        }
                                    </Show>
                                    <td class="table__cell">{member_no}</td>
                                    <EditableCell
                                        value=Signal::derive(move || name.clone())
                                        on_commit=Callback::new(move |v| patch_field(id_name.clone(), "name", v))
                                    />
                                    <EditableCell
                                        value=Signal::derive(move || phone.clone())
                                        on_commit=Callback::new(move |v| patch_field(id_phone.clone(), "phone", v))
                                    />
                                    <td class="table__cell">{tier_label}</td>
                                    <td class="table__cell table__cell--number">{format!("{:.2}", balance)}</td>
                                    <td class="table__cell table__cell--number">{format!("{:.2}", gift)}</td>
                                    <td class="table__cell" on:click=|e| e.stop_propagation()>
                                        <SalespersonPicker
                                            value=Signal::derive({
                                                let sales_id = sales_id.clone();
                                                move || sales_id.clone().map(|id| (id.clone(), id))
                                            })
                                            on_pick=Callback::new(move |item: Option<LookupItem>| {
                                                assign_salesperson(id_sales.clone(), item.map(|i| i.id));
                                            })
                                            allow_clear=true
                                        />
                                    </td>
                                    <td class="table__cell">
                                        <button
                                            class="button button--small"
                                            on:click=move |_| open_recharge(member_for_recharge.clone())
                                        >
                                            "充值"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || state.get().page)
                total_count=total
                page_size=Signal::derive(move || state.get().page_size)
                on_page_change=Callback::new(move |p| state.update(|s| s.page = p))
            />
        </div>
    }
}
