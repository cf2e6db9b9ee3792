use dioxus::prelude::*;

use crate::components::icons::UserIcon;
use crate::components::WalletButton;
use crate::routes::Route;
use crate::stores::wallet_store::WALLET_STATE;

#[component]
pub fn Home() -> Element {
    let connected = WALLET_STATE.read().address.is_some();

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-[60vh] gap-6 px-4 text-center",
            h1 {
                class: "text-4xl font-bold",
                "GamersDAO"
            }
            p {
                class: "text-lg text-muted-foreground max-w-xl",
                "Your gaming identity, owned by your wallet."
            }
            if connected {
                Link {
                    to: Route::Profile {},
                    class: "flex items-center gap-2 px-6 py-3 rounded-full bg-blue-500 hover:bg-blue-600 text-white font-semibold transition",
                    UserIcon { class: "w-5 h-5" }
                    "View Profile"
                }
            } else {
                WalletButton {}
            }
        }
    }
}
