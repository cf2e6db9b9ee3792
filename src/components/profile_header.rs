use dioxus::prelude::*;

use crate::components::AddressDisplay;
use crate::services::GamingProfile;
use crate::utils::WalletAddress;

/// Identity block: address, username, bio and the two badges
#[component]
pub fn ProfileHeader(address: WalletAddress, profile: GamingProfile) -> Element {
    let reputation = profile.reputation_label();
    let achievement_count = profile.achievement_count_label();

    rsx! {
        div {
            class: "bg-card border border-border rounded-xl p-6 mb-8",
            div {
                class: "flex items-start gap-6",
                div {
                    class: "flex-shrink-0",
                    AddressDisplay { address, avatar_class: "w-24 h-24" }
                }
                div {
                    class: "flex-grow min-w-0",
                    h1 {
                        class: "text-3xl font-bold mb-2 break-words",
                        "{profile.username}"
                    }
                    p {
                        class: "text-lg mb-4 text-muted-foreground",
                        "{profile.bio}"
                    }
                    div {
                        class: "flex items-center gap-4 flex-wrap",
                        span {
                            class: "px-3 py-1 rounded-full bg-blue-500 text-white text-sm font-semibold",
                            "{reputation}"
                        }
                        span {
                            class: "px-3 py-1 rounded-full bg-purple-500 text-white text-sm font-semibold",
                            "{achievement_count}"
                        }
                    }
                }
            }
        }
    }
}
