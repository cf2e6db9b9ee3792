use dioxus::prelude::*;

use crate::components::{
    AchievementsPanel, GamingAccountsPanel, LoadingIndicator, ProfileHeader, WalletButton,
};
use crate::hooks::use_profile;
use crate::services::GamingProfile;
use crate::stores::wallet_store::WALLET_STATE;
use crate::utils::{DataState, WalletAddress};

/// What the page shows for a given wallet and fetch state
///
/// The wallet wins over any fetch state, and a connected wallet whose fetch has
/// not been issued yet counts as loading.
pub fn resolve_view(
    address: Option<&WalletAddress>,
    state: &DataState<GamingProfile>,
) -> DataState<GamingProfile> {
    match (address, state) {
        (None, _) => DataState::Disconnected,
        (Some(_), DataState::Disconnected) => DataState::Loading,
        (Some(_), state) => state.clone(),
    }
}

#[component]
pub fn Profile() -> Element {
    let profile_state = use_profile();
    let address = WALLET_STATE.read().address.clone();
    let view = resolve_view(address.as_ref(), &profile_state.read());

    match (view, address) {
        (DataState::Loaded(profile), Some(address)) => rsx! {
            ProfileView { address, profile }
        },
        (DataState::Loading, _) => rsx! {
            LoadingIndicator {}
        },
        (DataState::Empty, _) => rsx! {
            div {
                class: "flex flex-col items-center justify-center min-h-[60vh]",
                p {
                    class: "mb-4 text-lg",
                    "No profile found. Please create one first."
                }
            }
        },
        _ => rsx! {
            div {
                class: "flex flex-col items-center justify-center min-h-[60vh]",
                p {
                    class: "mb-4 text-lg",
                    "Please connect your wallet to view your profile"
                }
                WalletButton {}
            }
        },
    }
}

#[component]
fn ProfileView(address: WalletAddress, profile: GamingProfile) -> Element {
    let accounts = profile.gaming_accounts.clone();
    let achievements = profile.achievements.clone();

    rsx! {
        div {
            class: "container mx-auto px-4 py-8",
            ProfileHeader { address, profile }
            div {
                class: "grid grid-cols-1 md:grid-cols-2 gap-8 mb-8",
                GamingAccountsPanel { accounts }
                AchievementsPanel { achievements }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::profile_reader::demo_profile;

    fn address() -> WalletAddress {
        WalletAddress::parse("0x00000000000000000000000000000000000000aa").unwrap()
    }

    #[test]
    fn test_no_wallet_overrides_any_state() {
        for state in [
            DataState::Disconnected,
            DataState::Loading,
            DataState::Empty,
            DataState::Loaded(demo_profile()),
        ] {
            assert_eq!(resolve_view(None, &state), DataState::Disconnected);
        }
    }

    #[test]
    fn test_connected_before_fetch_is_loading() {
        assert_eq!(
            resolve_view(Some(&address()), &DataState::Disconnected),
            DataState::Loading
        );
    }

    #[test]
    fn test_connected_passes_fetch_state_through() {
        let addr = address();
        assert_eq!(resolve_view(Some(&addr), &DataState::Loading), DataState::Loading);
        assert_eq!(resolve_view(Some(&addr), &DataState::Empty), DataState::Empty);
        assert_eq!(
            resolve_view(Some(&addr), &DataState::Loaded(demo_profile())),
            DataState::Loaded(demo_profile())
        );
    }
}
