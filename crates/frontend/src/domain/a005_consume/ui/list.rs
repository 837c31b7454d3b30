use contracts::domain::a005_consume::ConsumeRecord;
use contracts::shared::envelope::{ListQuery, DEFAULT_PAGE_SIZE};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a003_member::ui::picker::MemberPicker;
use crate::shared::components::lookup_select::LookupItem;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cycle_sort, sort_indicator, sorted_view, ColumnSpec, SortState};
use crate::shared::query_cache::QueryCache;
use crate::shared::toast::use_toasts;
use crate::system::auth::Session;

const RESOURCE: &str = "consumes";

const COLUMNS: &[ColumnSpec<ConsumeRecord>] = &[
    ColumnSpec::new("createdAt", "时间", |r| {
        r.created_at.clone().unwrap_or_default()
    }),
    ColumnSpec::new("memberId", "会员", |r| r.member_id.clone()),
    ColumnSpec::new("roomNo", "包房", |r| r.room_no.clone().unwrap_or_default()),
    ColumnSpec::new("consumeType", "消费类型", |r| {
        r.consume_type.clone().unwrap_or_default()
    }),
    ColumnSpec::new("amount", "扣减金额", |r| format!("{:.2}", r.amount)),
    ColumnSpec::new("balance", "余额快照", |r| format!("{:.2}", r.balance)),
];

/// Consume ledger. Mirrors the recharge ledger; the voucher column links to
/// the uploaded receipt image when one exists.
#[component]
pub fn ConsumeList(session: Session, cache: QueryCache) -> impl IntoView {
    let toasts = use_toasts();

    let (page, set_page) = signal(1usize);
    let (member_filter, set_member_filter) = signal::<Option<(String, String)>>(None);
    let (rows, set_rows) = signal::<Vec<ConsumeRecord>>(Vec::new());
    let (total, set_total) = signal(0usize);
    let (sort, set_sort) = signal::<SortState>(None);

    let query = Memo::new(move |_| ListQuery {
        member_id: member_filter.get().map(|(id, _)| id),
        ..ListQuery::page(page.get(), DEFAULT_PAGE_SIZE)
    });

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

    let displayed = move || sorted_view(&rows.get(), COLUMNS, &sort.get());

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"消费记录"</h1>
                </div>
                <div class="header__actions">
                    <MemberPicker
                        value=member_filter
                        on_pick=Callback::new(move |item: Option<LookupItem>| {
                            set_member_filter.set(item.map(|i| (i.id, i.display)));
                            set_page.set(1);
                        })
                        allow_clear=true
                    />
                    <button
                        class="button button--secondary"
                        on:click=move |_| cache.invalidate_prefix(RESOURCE)
                    >
                        {icon("refresh")}
                        "刷新"
                    </button>
                </div>
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
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
                            <th class="table__header-cell">"凭证"</th>
                            <th class="table__header-cell">"状态"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || displayed().into_iter().map(|record| {
                            let status = record.status;
                            let voucher = record.payment_voucher.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">
                                        {record.created_at.as_deref().map(format_timestamp).unwrap_or_default()}
                                    </td>
                                    <td class="table__cell">{record.member_id.clone()}</td>
                                    <td class="table__cell">{record.room_no.clone().unwrap_or_default()}</td>
                                    <td class="table__cell">{record.consume_type.clone().unwrap_or_default()}</td>
                                    <td class="table__cell table__cell--number">{format!("{:.2}", record.amount)}</td>
                                    <td class="table__cell table__cell--number">{format!("{:.2}", record.balance)}</td>
                                    <td class="table__cell">
                                        {match voucher {
                                            Some(url) => view! {
                                                <a href=url target="_blank" rel="noopener">"查看"</a>
                                            }.into_any(),
                                            None => view! { <span>"-"</span> }.into_any(),
                                        }}
                                    </td>
                                    <td class="table__cell">
                                        <StatusBadge label=status.label() badge_class=status.badge_class()/>
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
