//! List helpers: three-state column sort, numeric-aware comparison, column
//! descriptors and the debounced search input.

use std::cmp::Ordering;

use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Active sort of a table: at most one column at a time.
pub type SortState = Option<(String, SortOrder)>;

/// Three-state toggle: clicking a column cycles ascending -> descending ->
/// unsorted; clicking a different column starts ascending there and clears
/// the previous column's sort.
pub fn cycle_sort(current: &SortState, clicked: &str) -> SortState {
    match current {
        Some((key, SortOrder::Ascending)) if key == clicked => {
            Some((clicked.to_string(), SortOrder::Descending))
        }
        Some((key, SortOrder::Descending)) if key == clicked => None,
        _ => Some((clicked.to_string(), SortOrder::Ascending)),
    }
}

/// Sort indicator for a header cell.
pub fn sort_indicator(sort: &SortState, key: &str) -> &'static str {
    match sort {
        Some((k, SortOrder::Ascending)) if k == key => " ▲",
        Some((k, SortOrder::Descending)) if k == key => " ▼",
        _ => " ⇅",
    }
}

/// Column descriptor of a list view. `get` extracts the displayed value;
/// `compare` overrides the default numeric/lexicographic rule when set.
#[derive(Clone)]
pub struct ColumnSpec<T> {
    pub key: &'static str,
    pub label: &'static str,
    pub get: fn(&T) -> String,
    pub compare: Option<fn(&T, &T) -> Ordering>,
}

impl<T> ColumnSpec<T> {
    pub const fn new(key: &'static str, label: &'static str, get: fn(&T) -> String) -> Self {
        Self {
            key,
            label,
            get,
            compare: None,
        }
    }
}

fn numeric(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        trimmed.parse::<f64>().ok()
    }
}

/// Compare two cell values case-insensitively.
pub fn compare_lexicographic(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Client-side re-sort of the current page, independent of server paging.
/// A column whose values are all numeric sorts numerically (9 < 10); any
/// non-numeric value switches the whole column to case-insensitive
/// lexicographic order. Unsorted returns the original server order.
pub fn sorted_view<T: Clone>(rows: &[T], columns: &[ColumnSpec<T>], sort: &SortState) -> Vec<T> {
    let mut out: Vec<T> = rows.to_vec();
    let Some((key, order)) = sort else {
        return out;
    };
    let Some(column) = columns.iter().find(|c| c.key == key) else {
        return out;
    };

    if let Some(compare) = column.compare {
        out.sort_by(compare);
    } else {
        let get = column.get;
        let all_numeric = rows.iter().all(|r| numeric(&get(r)).is_some());
        if all_numeric {
            out.sort_by(|a, b| {
                let (x, y) = (numeric(&get(a)), numeric(&get(b)));
                x.partial_cmp(&y).unwrap_or(Ordering::Equal)
            });
        } else {
            out.sort_by(|a, b| compare_lexicographic(&get(a), &get(b)));
        }
    }
    if *order == SortOrder::Descending {
        out.reverse();
    }
    out
}

/// Search input with debounce and a clear button. The committed value comes
/// from the parent; keystrokes only reach `on_change` after the debounce
/// window passes without further input.
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "搜索...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    // Each keystroke bumps the generation; only the latest one commits.
    let generation = StoredValue::new(0u64);

    let handle_input = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let gen = generation.get_value() + 1;
        generation.set_value(gen);
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(300).await;
            if generation.get_value() == gen {
                on_change.run(new_value);
            }
        });
    };

    let clear = move |_| {
        set_input_value.set(String::new());
        generation.set_value(generation.get_value() + 1);
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" title="清除" on:click=clear>
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: String,
        price: String,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                name: "Banana".into(),
                price: "9".into(),
            },
            Row {
                name: "apple".into(),
                price: "10".into(),
            },
            Row {
                name: "Cherry".into(),
                price: "2".into(),
            },
        ]
    }

    fn columns() -> Vec<ColumnSpec<Row>> {
        vec![
            ColumnSpec::new("name", "名称", |r| r.name.clone()),
            ColumnSpec::new("price", "价格", |r| r.price.clone()),
        ]
    }

    #[test]
    fn test_cycle_sort_three_states() {
        let s0: SortState = None;
        let s1 = cycle_sort(&s0, "name");
        assert_eq!(s1, Some(("name".into(), SortOrder::Ascending)));
        let s2 = cycle_sort(&s1, "name");
        assert_eq!(s2, Some(("name".into(), SortOrder::Descending)));
        let s3 = cycle_sort(&s2, "name");
        assert_eq!(s3, None);
    }

    #[test]
    fn test_cycle_sort_other_column_resets() {
        let s = Some(("name".into(), SortOrder::Descending));
        let next = cycle_sort(&s, "price");
        assert_eq!(next, Some(("price".into(), SortOrder::Ascending)));
    }

    #[test]
    fn test_numeric_column_sorts_numerically() {
        let sorted = sorted_view(
            &rows(),
            &columns(),
            &Some(("price".into(), SortOrder::Ascending)),
        );
        let prices: Vec<&str> = sorted.iter().map(|r| r.price.as_str()).collect();
        // 9 < 10 numerically, not lexicographically
        assert_eq!(prices, vec!["2", "9", "10"]);
    }

    #[test]
    fn test_mixed_column_sorts_lexicographically() {
        let mut data = rows();
        data[0].price = "N/A".into();
        let sorted = sorted_view(
            &data,
            &columns(),
            &Some(("price".into(), SortOrder::Ascending)),
        );
        let prices: Vec<&str> = sorted.iter().map(|r| r.price.as_str()).collect();
        // any non-numeric value switches to case-insensitive lexicographic
        assert_eq!(prices, vec!["10", "2", "N/A"]);
    }

    #[test]
    fn test_text_column_case_insensitive() {
        let sorted = sorted_view(
            &rows(),
            &columns(),
            &Some(("name".into(), SortOrder::Ascending)),
        );
        let names: Vec<&str> = sorted.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["apple", "Banana", "Cherry"]);
    }

    #[test]
    fn test_unsorted_restores_server_order() {
        let original = rows();
        let sorted = sorted_view(&original, &columns(), &None);
        assert_eq!(sorted, original);
    }

    #[test]
    fn test_descending_reverses() {
        let sorted = sorted_view(
            &rows(),
            &columns(),
            &Some(("price".into(), SortOrder::Descending)),
        );
        let prices: Vec<&str> = sorted.iter().map(|r| r.price.as_str()).collect();
        assert_eq!(prices, vec!["10", "9", "2"]);
    }
}
