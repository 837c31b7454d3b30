use std::collections::HashSet;

use contracts::domain::a002_staff::{CreateStaffDto, Staff};
use contracts::shared::envelope::{ListQuery, DEFAULT_PAGE_SIZE};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_store::ui::picker::StorePicker;
use crate::shared::components::editable_cell::EditableCell;
use crate::shared::components::lookup_select::LookupItem;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cycle_sort, sort_indicator, sorted_view, ColumnSpec, SearchInput, SortState};
use crate::shared::query_cache::QueryCache;
use crate::shared::toast::use_toasts;
use crate::system::auth::Session;

use super::picker::LeaderPicker;

const RESOURCE: &str = "salespersons";

const COLUMNS: &[ColumnSpec<Staff>] = &[
    ColumnSpec::new("name", "姓名", |s| s.name.clone()),
    ColumnSpec::new("phone", "电话", |s| s.phone.clone()),
    ColumnSpec::new("wechat", "微信", |s| s.wechat.clone()),
];

fn field_patch(field: &str, value: serde_json::Value) -> serde_json::Value {
    let mut body = serde_json::Map::new();
    body.insert(field.to_string(), value);
    serde_json::Value::Object(body)
}

#[component]
pub fn SalespersonList(session: Session, cache: QueryCache) -> impl IntoView {
    let toasts = use_toasts();

    let (page, set_page) = signal(1usize);
    let (keyword, set_keyword) = signal(String::new());
    let (store_filter, set_store_filter) = signal::<Option<(String, String)>>(None);
    let (rows, set_rows) = signal::<Vec<Staff>>(Vec::new());
    let (total, set_total) = signal(0usize);
    let (sort, set_sort) = signal::<SortState>(None);
    let (delete_mode, set_delete_mode) = signal(false);
    let (selected, set_selected) = signal::<HashSet<String>>(HashSet::new());

    let query = Memo::new(move |_| {
        let kw = keyword.get();
        ListQuery {
            keyword: if kw.trim().is_empty() { None } else { Some(kw) },
            store_id: store_filter.get().map(|(id, _)| id),
            ..ListQuery::page(page.get(), DEFAULT_PAGE_SIZE)
        }
    });

    Effect::new(move |_| {
        let q = query.get();
        let key = QueryCache::key(RESOURCE, &q);
        if !cache.needs_fetch(&key) {
            return;
        }
        cache.begin(&key);
        spawn_local(async move {
            match super::super::api::salespersons::list(&q).await {
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
            let mut dto = CreateStaffDto::placeholder_salesperson();
            dto.store_id = store_filter.get_untracked().map(|(id, _)| id);
            match super::super::api::salespersons::create(&dto).await {
                Ok(_) => {
                    toasts.success("已创建，可直接在表格中编辑");
                    invalidate();
                }
                Err(e) => toasts.error(session.report(&e)),
            }
        });
    };

    let patch = move |id: String, field: &'static str, value: serde_json::Value| {
        spawn_local(async move {
            match super::super::api::salespersons::update(&id, &field_patch(field, value)).await {
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
                w.confirm_with_message(&format!("确认删除选中的 {} 条记录？", ids.len()))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            let mut failed = 0usize;
            for id in ids {
                if let Err(e) = super::super::api::salespersons::remove(&id).await {
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

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"销售"</h1>
                </div>
                <div class="header__actions">
                    <SearchInput
                        value=keyword
                        on_change=Callback::new(move |kw| {
                            set_keyword.set(kw);
                            set_page.set(1);
                        })
                        placeholder="搜索姓名/电话..."
                    />
                    <StorePicker
                        value=store_filter
                        on_pick=Callback::new(move |item: Option<LookupItem>| {
                            set_store_filter.set(item.map(|i| (i.id, i.display)));
                            set_page.set(1);
                        })
                        allow_clear=true
                    />
                    <button class="button button--primary" on:click=handle_create>
                        {icon("plus")}
                        "新建"
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
                            <th class="table__header-cell">"所属门店"</th>
                            <th class="table__header-cell">"所属团队长"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || displayed().into_iter().map(|staff| {
                            let id = staff.id.clone();
                            let id_cb = id.clone();
                            let id_name = id.clone();
                            let id_phone = id.clone();
                            let id_wechat = id.clone();
                            let id_store = id.clone();
                            let id_leader = id.clone();
                            let name = staff.name.clone();
                            let phone = staff.phone.clone();
                            let wechat = staff.wechat.clone();
                            let store_id = staff.store_id.clone();
                            let leader_id = staff.leader_id.clone();
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
                                    <EditableCell
                                        value=Signal::derive(move || name.clone())
                                        on_commit=Callback::new(move |v| patch(id_name.clone(), "name", serde_json::Value::String(v)))
                                    />
                                    <EditableCell
                                        value=Signal::derive(move || phone.clone())
                                        on_commit=Callback::new(move |v| patch(id_phone.clone(), "phone", serde_json::Value::String(v)))
                                    />
                                    <EditableCell
                                        value=Signal::derive(move || wechat.clone())
                                        on_commit=Callback::new(move |v| patch(id_wechat.clone(), "wechat", serde_json::Value::String(v)))
                                    />
                                    <td class="table__cell" on:click=|e| e.stop_propagation()>
                                        <StorePicker
                                            value=Signal::derive({
                                                let store_id = store_id.clone();
                                                move || store_id.clone().map(|id| (id.clone(), id))
                                            })
                                            on_pick=Callback::new(move |item: Option<LookupItem>| {
                                                let value = item
                                                    .map(|i| serde_json::Value::String(i.id))
                                                    .unwrap_or(serde_json::Value::Null);
                                                patch(id_store.clone(), "storeId", value);
                                            })
                                            allow_clear=true
                                        />
                                    </td>
                                    <td class="table__cell" on:click=|e| e.stop_propagation()>
                                        <LeaderPicker
                                            value=Signal::derive({
                                                let leader_id = leader_id.clone();
                                                move || leader_id.clone().map(|id| (id.clone(), id))
                                            })
                                            on_pick=Callback::new(move |item: Option<LookupItem>| {
                                                let value = item
                                                    .map(|i| serde_json::Value::String(i.id))
                                                    .unwrap_or(serde_json::Value::Null);
                                                patch(id_leader.clone(), "leaderId", value);
                                            })
                                            allow_clear=true
                                        />
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=page
                total_count=total
                page_size=Signal::derive(|| DEFAULT_PAGE_SIZE)
                on_page_change=Callback::new(move |p| set_page.set(p))
            />
        </div>
    }
}
