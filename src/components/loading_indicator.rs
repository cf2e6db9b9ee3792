use dioxus::prelude::*;

/// Spinner shown while the profile for the connected wallet is being fetched
#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            class: "flex justify-center items-center min-h-[60vh]",
            role: "status",
            aria_live: "polite",
            aria_busy: "true",

            // Screen reader announcement
            span {
                class: "sr-only",
                "Loading..."
            }

            div {
                class: "w-12 h-12 rounded-full border-4 border-muted border-t-blue-500 animate-spin"
            }
        }
    }
}
