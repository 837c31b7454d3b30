use leptos::prelude::*;

/// Table cell whose text commits on blur, not on keystroke.
///
/// The committed value comes from the server copy; while focused the input
/// owns its text, and `on_commit` fires only when the value actually
/// changed. The caller patches the entity and invalidates its list.
#[component]
pub fn EditableCell(
    #[prop(into)] value: Signal<String>,
    on_commit: Callback<String>,
) -> impl IntoView {
    view! {
        <td class="table__cell table__cell--editable" on:click=|e| e.stop_propagation()>
            <input
                type="text"
                class="table__inline-input"
                prop:value=move || value.get()
                on:blur=move |ev| {
                    let new_value = event_target_value(&ev);
                    if new_value != value.get_untracked() {
                        on_commit.run(new_value);
                    }
                }
            />
        </td>
    }
}
