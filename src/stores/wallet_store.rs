//! Wallet session state
//!
//! Holds the connected address that the rest of the app keys off. The wallet
//! itself is an injected EIP-1193 provider (`window.ethereum`); this store only
//! asks it for accounts and listens for account switches.

use dioxus::prelude::*;
use gloo_storage::{LocalStorage, Storage};
use std::fmt;

use crate::stores::settings_store::SETTINGS;
use crate::utils::validation::{AddressValidationError, WalletAddress};

/// Wallet session state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WalletState {
    pub address: Option<WalletAddress>,
    pub connecting: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WalletError {
    /// No injected wallet provider in this browser
    NoProvider,
    /// The provider refused or failed the request
    Rejected(String),
    /// The provider answered with an empty account list
    NoAccounts,
    InvalidAddress(AddressValidationError),
}

impl fmt::Display for WalletError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoProvider => write!(f, "No wallet provider found"),
            Self::Rejected(msg) => write!(f, "Wallet request rejected: {}", msg),
            Self::NoAccounts => write!(f, "Wallet returned no accounts"),
            Self::InvalidAddress(e) => write!(f, "Wallet returned an invalid address: {}", e),
        }
    }
}

impl std::error::Error for WalletError {}

/// Global wallet state
pub static WALLET_STATE: GlobalSignal<WalletState> = Signal::global(WalletState::default);

const STORAGE_KEY_ADDRESS: &str = "gamer_profile_wallet_address";

/// Restore the remembered wallet address, if any
pub fn init_wallet() {
    if !SETTINGS.read().remember_wallet {
        return;
    }

    if let Ok(raw) = LocalStorage::get::<String>(STORAGE_KEY_ADDRESS) {
        match WalletAddress::parse(&raw) {
            Ok(address) => {
                log::info!("Restored wallet session {}", address.short());
                WALLET_STATE.write().address = Some(address);
            }
            Err(e) => {
                log::warn!("Dropping stored wallet address: {}", e);
                LocalStorage::delete(STORAGE_KEY_ADDRESS);
            }
        }
    }
}

/// Ask the injected provider for accounts and connect the first one
pub async fn connect_wallet() -> Result<WalletAddress, WalletError> {
    log::info!("Requesting wallet accounts...");
    WALLET_STATE.write().connecting = true;

    let result = request_accounts()
        .await
        .and_then(|accounts| select_account(&accounts));

    WALLET_STATE.write().connecting = false;

    match &result {
        Ok(address) => set_connected(address.clone()),
        Err(e) => log::error!("Wallet connection failed: {}", e),
    }
    result
}

/// Mark an address as connected
pub fn set_connected(address: WalletAddress) {
    log::info!("Wallet connected: {}", address.short());
    if SETTINGS.read().remember_wallet {
        LocalStorage::set(STORAGE_KEY_ADDRESS, address.as_str()).ok();
    }
    WALLET_STATE.write().address = Some(address);
}

/// Forget the connected address
pub fn disconnect() {
    log::info!("Wallet disconnected");
    LocalStorage::delete(STORAGE_KEY_ADDRESS);
    WALLET_STATE.write().address = None;
}

/// Pick the active account from a provider account list
pub fn select_account(accounts: &[String]) -> Result<WalletAddress, WalletError> {
    let first = accounts.first().ok_or(WalletError::NoAccounts)?;
    WalletAddress::parse(first).map_err(WalletError::InvalidAddress)
}

/// Follow account switches made inside the wallet while a session is open
///
/// Runs for the lifetime of the app; spawn it once from the root component.
pub async fn watch_account_changes() {
    #[cfg(target_arch = "wasm32")]
    {
        use futures::StreamExt;

        let mut changes = match provider::account_changes() {
            Ok(rx) => rx,
            Err(e) => {
                log::info!("Not watching wallet accounts: {}", e);
                return;
            }
        };

        while let Some(accounts) = changes.next().await {
            let current = WALLET_STATE.read().address.clone();
            if current.is_none() {
                continue;
            }
            match select_account(&accounts) {
                Ok(address) if current.as_ref() != Some(&address) => {
                    set_connected(address)
                }
                Ok(_) => {}
                Err(WalletError::NoAccounts) => disconnect(),
                Err(e) => log::warn!("Ignoring account change: {}", e),
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn request_accounts() -> Result<Vec<String>, WalletError> {
    provider::request_accounts().await
}

#[cfg(not(target_arch = "wasm32"))]
async fn request_accounts() -> Result<Vec<String>, WalletError> {
    Err(WalletError::NoProvider)
}

#[cfg(target_arch = "wasm32")]
mod provider {
    use super::WalletError;
    use futures::channel::mpsc;
    use js_sys::{Function, Object, Promise, Reflect};
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    fn injected() -> Result<JsValue, WalletError> {
        let ethereum = Reflect::get(&js_sys::global(), &JsValue::from_str("ethereum"))
            .map_err(|_| WalletError::NoProvider)?;
        if ethereum.is_undefined() || ethereum.is_null() {
            return Err(WalletError::NoProvider);
        }
        Ok(ethereum)
    }

    fn method(target: &JsValue, name: &str) -> Result<Function, WalletError> {
        Reflect::get(target, &JsValue::from_str(name))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok())
            .ok_or(WalletError::NoProvider)
    }

    // EIP-1193 errors are objects carrying a `message`
    fn rejected(value: JsValue) -> WalletError {
        let message = Reflect::get(&value, &JsValue::from_str("message"))
            .ok()
            .and_then(|m| m.as_string())
            .or_else(|| value.as_string())
            .unwrap_or_else(|| format!("{:?}", value));
        WalletError::Rejected(message)
    }

    fn decode_accounts(value: JsValue) -> Result<Vec<String>, WalletError> {
        serde_wasm_bindgen::from_value(value).map_err(|e| WalletError::Rejected(e.to_string()))
    }

    pub async fn request_accounts() -> Result<Vec<String>, WalletError> {
        let ethereum = injected()?;
        let request = method(&ethereum, "request")?;

        let args = Object::new();
        Reflect::set(
            &args,
            &JsValue::from_str("method"),
            &JsValue::from_str("eth_requestAccounts"),
        )
        .map_err(rejected)?;

        let promise: Promise = request
            .call1(&ethereum, &args)
            .map_err(rejected)?
            .dyn_into()
            .map_err(rejected)?;
        let accounts = JsFuture::from(promise).await.map_err(rejected)?;
        decode_accounts(accounts)
    }

    pub fn account_changes() -> Result<mpsc::UnboundedReceiver<Vec<String>>, WalletError> {
        let ethereum = injected()?;
        let on = method(&ethereum, "on")?;
        let (tx, rx) = mpsc::unbounded();

        let callback = Closure::<dyn FnMut(JsValue)>::new(move |accounts: JsValue| {
            match decode_accounts(accounts) {
                Ok(accounts) => {
                    let _ = tx.unbounded_send(accounts);
                }
                Err(e) => log::warn!("Unreadable accountsChanged payload: {}", e),
            }
        });

        on.call2(
            &ethereum,
            &JsValue::from_str("accountsChanged"),
            callback.as_ref().unchecked_ref(),
        )
        .map_err(rejected)?;
        // The provider keeps the listener for the page lifetime
        callback.forget();

        Ok(rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_first_account() {
        let accounts = vec![
            "0x00000000000000000000000000000000000000AA".to_string(),
            "0x00000000000000000000000000000000000000bb".to_string(),
        ];
        let address = select_account(&accounts).unwrap();
        assert_eq!(address.as_str(), "0x00000000000000000000000000000000000000aa");
    }

    #[test]
    fn test_select_account_errors() {
        assert_eq!(select_account(&[]), Err(WalletError::NoAccounts));
        assert_eq!(
            select_account(&["0x12".to_string()]),
            Err(WalletError::InvalidAddress(AddressValidationError::InvalidLength(2)))
        );
    }

    #[test]
    fn test_wallet_error_display() {
        assert_eq!(WalletError::NoProvider.to_string(), "No wallet provider found");
        assert_eq!(
            WalletError::Rejected("User rejected the request.".into()).to_string(),
            "Wallet request rejected: User rejected the request."
        );
    }
}
