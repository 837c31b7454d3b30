use contracts::domain::a001_store::{Store, StoreDto};
use contracts::shared::envelope::{ListQuery, DEFAULT_PAGE_SIZE};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::details::StoreDetails;
use crate::shared::components::editable_cell::EditableCell;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::modal_stack::use_modals;
use crate::shared::query_cache::QueryCache;
use crate::shared::toast::use_toasts;
use crate::system::auth::Session;

const RESOURCE: &str = "stores";

#[component]
pub fn StoreList(session: Session, cache: QueryCache) -> impl IntoView {
    let toasts = use_toasts();
    let modals = use_modals();

    let (page, set_page) = signal(1usize);
    let (rows, set_rows) = signal::<Vec<Store>>(Vec::new());
    let (total, set_total) = signal(0usize);

    let query = Memo::new(move |_| ListQuery::page(page.get(), DEFAULT_PAGE_SIZE));

    Effect::new(move |_| {
        let q = query.get();
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

    let invalidate = move || cache.invalidate_prefix(RESOURCE);

    let handle_create = move |_| {
        spawn_local(async move {
            let dto = StoreDto {
                name: "新门店".into(),
                pricing: None,
            };
            match super::super::api::create(&dto).await {
                Ok(_) => {
                    toasts.success("门店已创建");
                    invalidate();
                }
                Err(e) => toasts.error(session.report(&e)),
            }
        });
    };

    let rename = move |id: String, name: String| {
        spawn_local(async move {
            let patch = serde_json::json!({ "name": name });
            match super::super::api::update(&id, &patch).await {
                Ok(_) => invalidate(),
                Err(e) => toasts.error(session.report(&e)),
            }
        });
    };

    let delete_store = move |id: String, name: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!("确认删除门店「{}」？", name))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match super::super::api::remove(&id).await {
                Ok(()) => {
                    toasts.success("门店已删除");
                    invalidate();
                }
                Err(e) => toasts.error(session.report(&e)),
            }
        });
    };

    let open_details = move |store: Store| {
        modals.push_with_frame(
            Some("max-width: min(860px, 95vw); width: min(860px, 95vw);".to_string()),
            None,
            move |handle| {
                let store = store.clone();
                let on_saved = Callback::new({
                    let handle = handle.clone();
                    move |_| {
                        handle.close();
                        invalidate();
                    }
                });
                let on_cancel = Callback::new({
                    let handle = handle.clone();
                    move |_| handle.close()
                });
                view! {
                    <StoreDetails
                        session=session
                        store=store
                        on_saved=on_saved
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
                    <h1 class="header__title">"门店管理"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=handle_create>
                        {icon("plus")}
                        "新建门店"
                    </button>
                    <button class="button button--secondary" on:click=move |_| invalidate()>
                        {icon("refresh")}
                        "刷新"
                    </button>
                </div>
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"门店名称"</th>
                            <th class="table__header-cell">"计价方式"</th>
                            <th class="table__header-cell">"操作"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(|store| {
                            let id_for_edit = store.id.clone();
                            let id_for_delete = store.id.clone();
                            let name = store.name.clone();
                            let name_for_delete = store.name.clone();
                            let kind = store.pricing.kind_label();
                            let store_for_details = store.clone();
                            view! {
                                <tr class="table__row">
                                    <EditableCell
                                        value=Signal::derive(move || name.clone())
                                        on_commit=Callback::new(move |v| rename(id_for_edit.clone(), v))
                                    />
                                    <td class="table__cell">{kind}</td>
                                    <td class="table__cell">
                                        <button
                                            class="button button--small"
                                            on:click=move |_| open_details(store_for_details.clone())
                                        >
                                            "价格设置"
                                        </button>
                                        <button
                                            class="button button--small button--danger"
                                            on:click=move |_| delete_store(id_for_delete.clone(), name_for_delete.clone())
                                        >
                                            "删除"
                                        </button>
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
