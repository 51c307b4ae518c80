//! Toast notifications.

use chrono::Utc;
use dioxus::prelude::*;
use tokio::time::{Duration, sleep};

use crate::state::AppState;

/// Visible toasts, newest at the bottom. Expired ones are swept once a second.
#[component]
pub fn ToastStack(mut state: Signal<AppState>) -> Element {
    use_future(move || async move {
        loop {
            sleep(Duration::from_secs(1)).await;
            let expired = state
                .peek()
                .notifications
                .iter()
                .any(|n| n.is_expired(Utc::now()));
            if expired {
                state.write().notifications.expire(Utc::now());
            }
        }
    });

    let toasts: Vec<_> = state.read().notifications.iter().cloned().collect();

    rsx! {
        div {
            class: "toast-stack",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: "{toast.level.css_class()}",
                    span { class: "toast-message", "{toast.message}" }
                    button {
                        class: "toast-close",
                        onclick: move |_| state.write().notifications.dismiss(toast.id),
                        "\u{2715}"
                    }
                }
            }
        }
    }
}
