use std::collections::HashSet;

use contracts::domain::a002_staff::{CreateStaffDto, Staff};
use contracts::shared::envelope::{ListQuery, DEFAULT_PAGE_SIZE};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::editable_cell::EditableCell;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cycle_sort, sort_indicator, sorted_view, ColumnSpec, SearchInput, SortState};
use crate::shared::query_cache::QueryCache;
use crate::shared::toast::use_toasts;
use crate::system::auth::Session;

const RESOURCE: &str = "team-leaders";

const COLUMNS: &[ColumnSpec<Staff>] = &[
    ColumnSpec::new("name", "姓名", |s| s.name.clone()),
    ColumnSpec::new("phone", "电话", |s| s.phone.clone()),
    ColumnSpec::new("wechat", "微信", |s| s.wechat.clone()),
];

fn field_patch(field: &str, value: String) -> serde_json::Value {
    let mut body = serde_json::Map::new();
    body.insert(field.to_string(), serde_json::Value::String(value));
    serde_json::Value::Object(body)
}

#[component]
pub fn LeaderList(session: Session, cache: QueryCache) -> impl IntoView {
    let toasts = use_toasts();

    let (page, set_page) = signal(1usize);
    let (keyword, set_keyword) = signal(String::new());
    let (rows, set_rows) = signal::<Vec<Staff>>(Vec::new());
    let (total, set_total) = signal(0usize);
    let (sort, set_sort) = signal::<SortState>(None);
    let (delete_mode, set_delete_mode) = signal(false);
    let (selected, set_selected) = signal::<HashSet<String>>(HashSet::new());

    // Server does the filtering and paging; the keyword goes out verbatim.
    let query = Memo::new(move |_| {
        let kw = keyword.get();
        ListQuery {
            keyword: if kw.trim().is_empty() { None } else { Some(kw) },
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
            match super::super::api::team_leaders::list(&q).await {
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

    // Client-side re-sort of the current page, independent of server paging.
    let displayed = move || sorted_view(&rows.get(), COLUMNS, &sort.get());

    let invalidate = move || cache.invalidate_prefix(RESOURCE);

    let handle_create = move |_| {
        spawn_local(async move {
            match super::super::api::team_leaders::create(&CreateStaffDto::placeholder_leader()).await
            {
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
            match super::super::api::team_leaders::update(&id, &field_patch(field, value)).await {
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

    // Per-id deletes are serialized: failures are isolated per item and the
    // batch never aborts early. Selection clears when the batch finishes.
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
                if let Err(e) = super::super::api::team_leaders::remove(&id).await {
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
                    <h1 class="header__title">"团队长"</h1>
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
                        </tr>
                    </thead>
                    <tbody>
                        {move || displayed().into_iter().map(|staff| {
                            let id = staff.id.clone();
                            let id_cb = id.clone();
                            let id_name = id.clone();
                            let id_phone = id.clone();
                            let id_wechat = id.clone();
                            let name = staff.name.clone();
                            let phone = staff.phone.clone();
                            let wechat = staff.wechat.clone();
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
                                        on_commit=Callback::new(move |v| patch_field(id_name.clone(), "name", v))
                                    />
                                    <EditableCell
                                        value=Signal::derive(move || phone.clone())
                                        on_commit=Callback::new(move |v| patch_field(id_phone.clone(), "phone", v))
                                    />
                                    <EditableCell
                                        value=Signal::derive(move || wechat.clone())
                                        on_commit=Callback::new(move |v| patch_field(id_wechat.clone(), "wechat", v))
                                    />
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
