//! Toast notifications
//!
//! A single queue is provided at the app root and rendered top-center by
//! [`Toaster`]. Pages push messages through [`use_toasts`].

use leptos::prelude::*;

use crate::core::{Toast, ToastKind, ToastQueue};
use crate::ui::icon::{Icon, icons};

/// Handle to the toast queue
#[derive(Clone, Copy)]
pub struct Toasts {
    queue: RwSignal<ToastQueue>,
}

impl Toasts {
    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message);
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }

    fn push(&self, kind: ToastKind, message: impl Into<String>) {
        let message = message.into();
        let Some(toast) = self.queue.try_update(|q| q.push(kind, message)) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            use gloo_timers::future::TimeoutFuture;

            let queue = self.queue;
            leptos::task::spawn_local(async move {
                TimeoutFuture::new(toast.auto_dismiss_ms).await;
                queue.try_update(|q| q.dismiss(toast.id));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = toast;
    }
}

/// Provide the toast queue to the component tree
pub fn provide_toasts() -> Toasts {
    let toasts = Toasts {
        queue: RwSignal::new(ToastQueue::new()),
    };
    provide_context(toasts);
    toasts
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

/// Renders the queue at the top center of the viewport
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();
    let items = move || toasts.queue.with(|q| q.items().cloned().collect::<Vec<_>>());

    view! {
        <div class="fixed top-4 left-1/2 -translate-x-1/2 z-50 flex flex-col items-center gap-2 w-full max-w-sm px-4 pointer-events-none">
            <For each=items key=|toast| toast.id let:toast>
                <ToastItem toast=toast on_dismiss=move |id| toasts.dismiss(id) />
            </For>
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast, #[prop(into)] on_dismiss: Callback<u64>) -> impl IntoView {
    let (icon, icon_class) = match toast.kind {
        ToastKind::Success => (icons::CHECK_CIRCLE, "w-5 h-5 text-emerald-500"),
        ToastKind::Error => (icons::ALERT_CIRCLE, "w-5 h-5 text-red-500"),
        ToastKind::Info => (icons::INFO, "w-5 h-5 text-sky-500"),
    };
    let id = toast.id;

    view! {
        <div
            class="pointer-events-auto flex items-center gap-3 w-full px-4 py-3 rounded-xl bg-white shadow-lg border border-slate-100 text-sm text-slate-700"
            role="status"
        >
            <Icon name=icon class=icon_class />
            <p class="flex-1">{toast.message}</p>
            <button
                type="button"
                class="text-slate-400 hover:text-slate-600 transition-colors"
                aria-label="Dismiss"
                on:click=move |_| on_dismiss.run(id)
            >
                <Icon name=icons::X class="w-4 h-4" />
            </button>
        </div>
    }
}
