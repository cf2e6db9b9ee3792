#![allow(non_snake_case)]

use dioxus::prelude::*;
use dioxus_primitives::toast::ToastProvider;

use services::ProfileReaderHandle;
use stores::{settings_store, theme_store, wallet_store};

// Modules
mod components;
mod hooks;
mod routes;
mod services;
mod stores;
mod utils;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting GamersDAO profile client");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Settings must load before the wallet session, which honours remember_wallet
    use_hook(|| {
        settings_store::init_settings();
        theme_store::init_theme();
        wallet_store::init_wallet();
    });

    // Profile reader for the whole app; swap for the contract reader once it exists
    use_context_provider(|| {
        let reader = settings_store::SETTINGS.peek().profile_reader();
        log::info!("Using mock profile reader ({:?})", reader.response);
        ProfileReaderHandle::new(reader)
    });

    use_effect(move || {
        spawn(wallet_store::watch_account_changes());
    });

    rsx! {
        ToastProvider {
            Router::<routes::Route> {}
        }
    }
}
