//! Modal dialog shell.

use dioxus::prelude::*;

#[component]
pub fn Modal(
    title: String,
    #[props(default)] wide: bool,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    let container = if wide { "modal-container modal-wide" } else { "modal-container" };

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),

            div {
                class: "{container}",
                onclick: move |evt| evt.stop_propagation(),

                div {
                    class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    button {
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        "\u{2715}"
                    }
                }

                div {
                    class: "modal-body",
                    {children}
                }
            }
        }
    }
}
