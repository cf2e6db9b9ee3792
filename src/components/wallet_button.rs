use dioxus::prelude::*;
use dioxus_primitives::toast::{consume_toast, ToastOptions};
use std::time::Duration;

use crate::components::icons::WalletIcon;
use crate::stores::wallet_store::{self, WALLET_STATE};

/// Connect / disconnect control for the injected wallet
#[component]
pub fn WalletButton() -> Element {
    let toast = consume_toast();
    let wallet = WALLET_STATE.read().clone();

    if let Some(address) = wallet.address {
        let short = address.short();
        return rsx! {
            button {
                class: "flex items-center gap-2 px-4 py-2 rounded-full border border-border hover:bg-accent transition text-sm font-mono",
                title: "Disconnect",
                onclick: move |_| wallet_store::disconnect(),
                WalletIcon { class: "w-4 h-4" }
                span { "{short}" }
            }
        };
    }

    rsx! {
        button {
            class: "flex items-center gap-2 px-4 py-2 rounded-full bg-blue-500 hover:bg-blue-600 text-white font-semibold transition disabled:opacity-50",
            disabled: wallet.connecting,
            onclick: move |_| {
                let toast_api = toast.clone();
                spawn(async move {
                    if let Err(e) = wallet_store::connect_wallet().await {
                        toast_api.error(
                            "Could not connect wallet".to_string(),
                            ToastOptions::new()
                                .description(e.to_string())
                                .duration(Duration::from_secs(4))
                                .permanent(false),
                        );
                    }
                });
            },
            WalletIcon { class: "w-4 h-4" }
            if wallet.connecting {
                span { "Connecting..." }
            } else {
                span { "Connect Wallet" }
            }
        }
    }
}
