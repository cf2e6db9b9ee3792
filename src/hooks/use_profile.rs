//! use_profile hook - fetch the connected wallet's gaming profile
//!
//! Every change of the connected address starts a new fetch and invalidates the
//! previous one:
//! - the previous task is cancelled
//! - its ticket no longer matches, so a late completion is dropped without
//!   touching state or notifying
//!
//! Disconnecting resets the view to `Disconnected` and drops any profile held
//! for the previous address.

use dioxus::core::Task;
use dioxus::prelude::*;
use dioxus_primitives::toast::{consume_toast, ToastOptions};
use std::time::Duration;

use crate::services::{GamingProfile, ProfileReadError, ProfileReader, ProfileReaderHandle};
use crate::stores::wallet_store::WALLET_STATE;
use crate::utils::{DataState, WalletAddress};

/// Identifies one fetch; only the newest ticket may apply its result
#[derive(Debug, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// A fetch the caller must run against the profile reader
#[derive(Debug, PartialEq)]
pub struct FetchRequest {
    pub ticket: FetchTicket,
    pub address: WalletAddress,
}

/// Outcome of applying a finished fetch
#[derive(Debug, PartialEq)]
pub enum Completion {
    Loaded,
    Empty,
    /// The fetch failed; the view fell back to Empty
    Failed(ProfileReadError),
    /// A newer address change superseded this fetch
    Stale,
}

/// Page state machine driven by address changes and fetch completions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileLoader {
    view: DataState<GamingProfile>,
    address: Option<WalletAddress>,
    generation: u64,
}

impl ProfileLoader {
    pub fn view(&self) -> &DataState<GamingProfile> {
        &self.view
    }

    /// React to the connected address; returns the fetch to issue, if any
    pub fn address_changed(&mut self, address: Option<WalletAddress>) -> Option<FetchRequest> {
        if self.address == address {
            return None;
        }

        self.generation += 1;
        self.address = address.clone();

        match address {
            Some(address) => {
                self.view = DataState::Loading;
                Some(FetchRequest {
                    ticket: FetchTicket(self.generation),
                    address,
                })
            }
            None => {
                self.view = DataState::Disconnected;
                None
            }
        }
    }

    /// Apply a finished fetch unless it was superseded
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<Option<GamingProfile>, ProfileReadError>,
    ) -> Completion {
        if ticket.0 != self.generation || !self.view.is_loading() {
            return Completion::Stale;
        }

        match result {
            Ok(found) => {
                self.view = DataState::from(found);
                if self.view.is_loaded() {
                    Completion::Loaded
                } else {
                    Completion::Empty
                }
            }
            Err(err) => {
                self.view = DataState::Empty;
                Completion::Failed(err)
            }
        }
    }
}

/// Hook returning the profile view for the connected wallet
///
/// Requires a [`ProfileReaderHandle`] in context and a toast provider above.
pub fn use_profile() -> Memo<DataState<GamingProfile>> {
    let reader = use_context::<ProfileReaderHandle>();
    let toast = consume_toast();
    let mut loader = use_signal(ProfileLoader::default);
    let mut in_flight = use_signal(|| None::<Task>);
    let address = use_memo(move || WALLET_STATE.read().address.clone());

    use_effect(move || {
        let next = address();
        let connected = next.is_some();
        let request = loader.write().address_changed(next);

        // Same address as before: the running fetch stays valid
        if request.is_none() && connected {
            return;
        }

        if let Some(task) = in_flight.write().take() {
            task.cancel();
        }

        let Some(FetchRequest { ticket, address }) = request else {
            return;
        };

        log::info!("Fetching profile for {}", address.short());
        let reader = reader.clone();
        let toast_api = toast.clone();

        let task = spawn(async move {
            let result = reader.0.fetch_profile(&address).await;

            let completion = loader.write().complete(ticket, result);
            match completion {
                Completion::Loaded => log::debug!("Profile loaded for {}", address.short()),
                Completion::Empty => log::info!("No profile registered for {}", address.short()),
                Completion::Failed(err) => {
                    log::error!("Error fetching profile: {}", err);
                    toast_api.error(
                        "Error fetching profile".to_string(),
                        ToastOptions::new()
                            .description(err.to_string())
                            .duration(Duration::from_secs(4))
                            .permanent(false),
                    );
                }
                Completion::Stale => {
                    log::debug!("Discarding superseded profile fetch for {}", address.short())
                }
            }
        });
        in_flight.set(Some(task));
    });

    use_memo(move || loader.read().view().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::profile_reader::demo_profile;

    fn addr(last: &str) -> WalletAddress {
        WalletAddress::parse(&format!("0x{:0>40}", last)).unwrap()
    }

    #[test]
    fn test_starts_disconnected_without_fetch() {
        let mut loader = ProfileLoader::default();
        assert!(loader.view().is_disconnected());
        assert_eq!(loader.address_changed(None), None);
        assert!(loader.view().is_disconnected());
    }

    #[test]
    fn test_connect_enters_loading_then_loaded() {
        let mut loader = ProfileLoader::default();
        let request = loader.address_changed(Some(addr("a1"))).unwrap();
        assert_eq!(request.address, addr("a1"));
        assert!(loader.view().is_loading());

        let completion = loader.complete(request.ticket, Ok(Some(demo_profile())));
        assert_eq!(completion, Completion::Loaded);
        assert_eq!(loader.view().data(), Some(&demo_profile()));
    }

    #[test]
    fn test_absent_profile_is_empty() {
        let mut loader = ProfileLoader::default();
        let request = loader.address_changed(Some(addr("a1"))).unwrap();
        assert_eq!(loader.complete(request.ticket, Ok(None)), Completion::Empty);
        assert!(loader.view().is_empty());
    }

    #[test]
    fn test_failure_reports_once_and_settles_empty() {
        let mut loader = ProfileLoader::default();
        let request = loader.address_changed(Some(addr("a1"))).unwrap();
        let err = ProfileReadError::Unavailable("rpc down".into());

        assert_eq!(
            loader.complete(request.ticket, Err(err.clone())),
            Completion::Failed(err)
        );
        assert!(loader.view().is_empty());
        assert!(!loader.view().is_loading());
    }

    #[test]
    fn test_superseded_fetch_is_ignored() {
        let mut loader = ProfileLoader::default();
        let first = loader.address_changed(Some(addr("a1"))).unwrap();
        let second = loader.address_changed(Some(addr("b2"))).unwrap();

        // first resolves late, after the switch
        let stale = loader.complete(first.ticket, Err(ProfileReadError::Unavailable("x".into())));
        assert_eq!(stale, Completion::Stale);
        assert!(loader.view().is_loading());

        assert_eq!(second.address, addr("b2"));
        assert_eq!(loader.complete(second.ticket, Ok(None)), Completion::Empty);
        assert!(loader.view().is_empty());
        assert_eq!(loader.address_changed(Some(addr("b2"))), None);
    }

    #[test]
    fn test_disconnect_resets_and_invalidates() {
        let mut loader = ProfileLoader::default();
        let request = loader.address_changed(Some(addr("a1"))).unwrap();
        assert_eq!(loader.address_changed(None), None);
        assert!(loader.view().is_disconnected());

        assert_eq!(
            loader.complete(request.ticket, Ok(Some(demo_profile()))),
            Completion::Stale
        );
        assert!(loader.view().is_disconnected());
    }

    #[test]
    fn test_disconnect_drops_loaded_profile() {
        let mut loader = ProfileLoader::default();
        let request = loader.address_changed(Some(addr("a1"))).unwrap();
        loader.complete(request.ticket, Ok(Some(demo_profile())));

        loader.address_changed(None);
        assert_eq!(loader.view(), &DataState::Disconnected);
    }

    #[test]
    fn test_same_address_does_not_refetch() {
        let mut loader = ProfileLoader::default();
        let request = loader.address_changed(Some(addr("a1"))).unwrap();
        assert_eq!(loader.address_changed(Some(addr("a1"))), None);

        assert_eq!(loader.complete(request.ticket, Ok(None)), Completion::Empty);
    }

    #[test]
    fn test_reconnect_fetches_again() {
        let mut loader = ProfileLoader::default();
        let request = loader.address_changed(Some(addr("a1"))).unwrap();
        loader.complete(request.ticket, Ok(None));

        loader.address_changed(None);
        let again = loader.address_changed(Some(addr("a1"))).unwrap();
        assert!(loader.view().is_loading());
        assert_eq!(loader.complete(again.ticket, Ok(Some(demo_profile()))), Completion::Loaded);
    }
}
