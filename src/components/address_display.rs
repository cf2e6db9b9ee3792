use dioxus::prelude::*;
use dioxus_primitives::toast::{consume_toast, ToastOptions};
use std::time::Duration;

use crate::utils::WalletAddress;

/// Identicon for an address, used until profiles carry their own avatar
pub fn identicon_url(address: &WalletAddress) -> String {
    format!("https://api.dicebear.com/7.x/identicon/svg?seed={}", address)
}

/// Result of a clipboard write, as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
}

impl CopyOutcome {
    pub fn from_result<T, E>(result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => CopyOutcome::Copied,
            Err(_) => CopyOutcome::Failed,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            CopyOutcome::Copied => "Copied!",
            CopyOutcome::Failed => "Copy failed",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CopyOutcome::Copied => "Address copied to clipboard",
            CopyOutcome::Failed => "Could not access the clipboard",
        }
    }
}

async fn copy_to_clipboard(text: String) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let promise = window.navigator().clipboard().write_text(&text);
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("{:?}", e))
}

/// Avatar + shortened address with a copy-to-clipboard action
#[component]
pub fn AddressDisplay(
    address: WalletAddress,
    #[props(default = "w-16 h-16".to_string())] avatar_class: String,
) -> Element {
    let toast = consume_toast();
    let avatar_url = identicon_url(&address);
    let short = address.short();
    let full = address.to_string();
    let title = full.clone();

    rsx! {
        div {
            class: "flex flex-col items-center gap-2",
            img {
                class: "{avatar_class} rounded-full bg-muted",
                src: "{avatar_url}",
                alt: "{short}",
            }
            button {
                class: "font-mono text-sm opacity-80 hover:opacity-100 transition",
                title: "{title}",
                onclick: move |e: MouseEvent| {
                    e.stop_propagation();
                    let text = full.clone();
                    let toast_api = toast.clone();
                    spawn(async move {
                        let result = copy_to_clipboard(text).await;
                        let outcome = CopyOutcome::from_result(&result);
                        let options = ToastOptions::new()
                            .description(outcome.description())
                            .duration(Duration::from_secs(2))
                            .permanent(false);
                        match result {
                            Ok(()) => toast_api.success(outcome.title().to_string(), options),
                            Err(e) => {
                                log::warn!("Clipboard write failed: {}", e);
                                toast_api.error(outcome.title().to_string(), options);
                            }
                        }
                    });
                },
                "{short}"
            }
        }
    }
}
