use contracts::shared::envelope::{clamp_page, page_count};
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Reusable pagination controls. Pages are 1-indexed; navigation is clamped
/// to `[1, total_pages]` and nothing renders while the collection is empty.
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] total_count: Signal<usize>,
    #[prop(into)] page_size: Signal<usize>,
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let total_pages = Memo::new(move |_| page_count(total_count.get(), page_size.get()));

    let go = move |page: usize| {
        let clamped = clamp_page(page, total_pages.get());
        if clamped != current_page.get() {
            on_page_change.run(clamped);
        }
    };

    view! {
        <Show when=move || (total_pages.get() > 0)>
            <div class="pagination-controls">
                <button
                    class="pagination-btn"
                    title="上一页"
                    disabled=move || current_page.get() <= 1
                    on:click=move |_| go(current_page.get().saturating_sub(1))
                >
                    {icon("chevron-left")}
                </button>
                {move || {
                    (1..=total_pages.get())
                        .map(|page| {
                            view! {
                                <button
                                    class="pagination-btn pagination-btn--page"
                                    class:pagination-btn--active=move || current_page.get() == page
                                    on:click=move |_| go(page)
                                >
                                    {page.to_string()}
                                </button>
                            }
                        })
                        .collect_view()
                }}
                <button
                    class="pagination-btn"
                    title="下一页"
                    disabled=move || current_page.get() >= total_pages.get()
                    on:click=move |_| go(current_page.get() + 1)
                >
                    {icon("chevron-right")}
                </button>
                <span class="pagination-info">
                    {move || format!("共 {} 条", total_count.get())}
                </span>
            </div>
        </Show>
    }
}
