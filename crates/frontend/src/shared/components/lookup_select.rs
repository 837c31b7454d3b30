use leptos::prelude::*;

/// One pickable option of a lookup selector.
///
/// `haystack` holds the 1-4 display fields the substring filter matches
/// against (name, phone, card/ID number, numeric id as string).
#[derive(Clone, Debug, PartialEq)]
pub struct LookupItem {
    pub id: String,
    pub display: String,
    pub haystack: Vec<String>,
}

impl LookupItem {
    pub fn new(id: impl Into<String>, display: impl Into<String>) -> Self {
        let display = display.into();
        Self {
            id: id.into(),
            haystack: vec![display.clone()],
            display,
        }
    }

    pub fn with_haystack(mut self, fields: &[&str]) -> Self {
        self.haystack = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    /// Case-insensitive substring match across the display fields.
    pub fn matches(&self, filter: &str) -> bool {
        if filter.is_empty() {
            return true;
        }
        let needle = filter.to_lowercase();
        self.haystack
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Search-as-you-type combobox.
///
/// Holds the full (bounded) option list supplied by the parent, filters it
/// client-side, and emits the picked item's id + display name. Selection is
/// controlled: the shown value always comes from `value`. Opening clears the
/// text to begin a fresh search; clicking outside closes without touching
/// the current selection.
#[component]
pub fn LookupSelect(
    #[prop(into)] items: Signal<Vec<LookupItem>>,
    /// Currently selected item (id, display), owned by the parent.
    #[prop(into)] value: Signal<Option<(String, String)>>,
    on_pick: Callback<Option<LookupItem>>,
    #[prop(optional, into)] placeholder: String,
    /// Offer a "none" row that clears the selection.
    #[prop(optional)] allow_clear: bool,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "搜索...".to_string()
    } else {
        placeholder
    };

    let (open, set_open) = signal(false);
    let (filter, set_filter) = signal(String::new());

    // Prefer the option's display name when the list knows the id; falls
    // back to whatever label the parent supplied (often the raw id).
    let display_text = move || match value.get() {
        None => "未选择".to_string(),
        Some((id, name)) => items
            .get()
            .into_iter()
            .find(|item| item.id == id)
            .map(|item| item.display)
            .unwrap_or(name),
    };

    let filtered = move || {
        let needle = filter.get();
        items
            .get()
            .into_iter()
            .filter(|item| item.matches(&needle))
            .collect::<Vec<_>>()
    };

    let open_dropdown = move |_| {
        // fresh search on every open
        set_filter.set(String::new());
        set_open.set(true);
    };

    let pick = move |item: Option<LookupItem>| {
        on_pick.run(item);
        set_open.set(false);
    };

    view! {
        <div class="lookup">
            <button type="button" class="lookup__value" on:click=open_dropdown>
                <span>{display_text}</span>
                <span class="lookup__caret">"▾"</span>
            </button>
            <Show when=move || open.get()>
                // Transparent backdrop: clicking outside closes the dropdown
                // without altering the current selection.
                <div class="lookup__backdrop" on:click=move |_| set_open.set(false)></div>
                <div class="lookup__dropdown">
                    <input
                        type="text"
                        class="lookup__search"
                        placeholder=placeholder.clone()
                        prop:value=move || filter.get()
                        on:input=move |ev| set_filter.set(event_target_value(&ev))
                    />
                    <div class="lookup__options">
                        <Show when=move || allow_clear>
                            <div class="lookup__option lookup__option--none" on:click=move |_| pick(None)>
                                "（不选择）"
                            </div>
                        </Show>
                        {move || {
                            let options = filtered();
                            if options.is_empty() {
                                view! { <div class="lookup__empty">"无匹配结果"</div> }.into_any()
                            } else {
                                options
                                    .into_iter()
                                    .map(|item| {
                                        let picked = item.clone();
                                        let is_current = value.get().map(|(id, _)| id == item.id).unwrap_or(false);
                                        view! {
                                            <div
                                                class="lookup__option"
                                                class:lookup__option--selected=is_current
                                                on:click=move |_| pick(Some(picked.clone()))
                                            >
                                                {item.display.clone()}
                                            </div>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member() -> LookupItem {
        LookupItem::new("m1", "张三").with_haystack(&["张三", "13800138000", "110101199001011234", "1001"])
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(member().matches(""));
    }

    #[test]
    fn test_matches_any_haystack_field() {
        let m = member();
        assert!(m.matches("张三"));
        assert!(m.matches("13800"));
        assert!(m.matches("199001"));
        assert!(m.matches("1001"));
        assert!(!m.matches("李四"));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let m = LookupItem::new("s1", "VIP Room").with_haystack(&["VIP Room", "s1"]);
        assert!(m.matches("vip"));
        assert!(m.matches("ROOM"));
    }
}
