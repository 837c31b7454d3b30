//! Transient notification stack.
//!
//! The single surfacing channel for transport, business and client-side
//! validation failures, plus success confirmations. Toasts auto-dismiss.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast--success",
            ToastKind::Error => "toast--error",
            ToastKind::Info => "toast--info",
        }
    }
}

#[derive(Clone, Debug)]
struct Toast {
    id: u64,
    kind: ToastKind,
    message: String,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    items: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.items.update(|items| {
            items.push(Toast { id, kind, message });
        });

        let items = self.items;
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            items.update(|list| list.retain(|t| t.id != id));
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        log::warn!("{}", message);
        self.push(ToastKind::Error, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message.into());
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in app root")
}

/// Renders the toast stack. Mount once at the application root.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_toasts();
    let items = svc.items;

    view! {
        <div class="toast-host">
            <For
                each=move || items.get()
                key=|t| t.id
                children=move |toast| {
                    let id = toast.id;
                    let dismiss = move |_| {
                        items.update(|list| list.retain(|t| t.id != id));
                    };
                    view! {
                        <div class=format!("toast {}", toast.kind.class()) on:click=dismiss>
                            {toast.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
