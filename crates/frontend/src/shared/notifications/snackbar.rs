use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thaw::*;

use super::{Notification, NotificationKind};
use crate::shared::lifetime::Lifetime;

fn intent_for(kind: NotificationKind) -> MessageBarIntent {
    match kind {
        NotificationKind::Success => MessageBarIntent::Success,
        NotificationKind::Error => MessageBarIntent::Error,
        NotificationKind::Warning => MessageBarIntent::Warning,
        NotificationKind::Info => MessageBarIntent::Info,
    }
}

/// Single dismissible notification.
///
/// Closes on the close button or after `timeout_ms`, whichever comes first;
/// `on_close` receives the notification id exactly once.
#[component]
#[allow(non_snake_case)]
pub fn Snackbar(notification: Notification, timeout_ms: u32, on_close: Callback<u64>) -> impl IntoView {
    let id = notification.id;
    let closed = Arc::new(AtomicBool::new(false));
    let lifetime = Lifetime::attach();

    let close = move || {
        if !closed.swap(true, Ordering::AcqRel) {
            on_close.run(id);
        }
    };

    if timeout_ms > 0 {
        let close = close.clone();
        spawn_local(async move {
            TimeoutFuture::new(timeout_ms).await;
            if lifetime.is_active() {
                close();
            }
        });
    }

    let class = match notification.kind {
        NotificationKind::Success => "snackbar snackbar--success",
        NotificationKind::Error => "snackbar snackbar--error",
        NotificationKind::Warning => "snackbar snackbar--warning",
        NotificationKind::Info => "snackbar snackbar--info",
    };

    view! {
        <div class=class role="status">
            <MessageBar intent=intent_for(notification.kind)>
                <div style="display: flex; align-items: center; justify-content: space-between; gap: var(--spacing-sm); width: 100%;">
                    <span>{notification.message}</span>
                    <Button
                        appearance=ButtonAppearance::Transparent
                        size=ButtonSize::Small
                        on_click=move |_| close()
                    >
                        "\u{2715}"
                    </Button>
                </div>
            </MessageBar>
        </div>
    }
}

/// Renders live notifications as a stack, keyed by id.
#[component]
#[allow(non_snake_case)]
pub fn SnackbarStack(
    #[prop(into)] notifications: Signal<Vec<Notification>>,
    timeout_ms: u32,
    on_close: Callback<u64>,
) -> impl IntoView {
    view! {
        <div class="snackbar-stack" style="position: fixed; right: 16px; bottom: 16px; display: flex; flex-direction: column; gap: 8px; z-index: 2000;">
            <For
                each=move || notifications.get()
                key=|n| n.id
                children=move |notification| {
                    view! {
                        <Snackbar notification=notification timeout_ms=timeout_ms on_close=on_close />
                    }
                }
            />
        </div>
    }
}
