use dioxus::prelude::*;

use crate::components::icons::GamepadIcon;
use crate::services::GamingAccount;

/// Display data for one linked account row
#[derive(Clone, Debug, PartialEq)]
pub struct AccountRow {
    /// Position in the profile's list, used as the render key
    pub key: String,
    pub icon: &'static str,
    pub platform: String,
    pub account_id: String,
}

/// One row per linked account, in the order the profile lists them
pub fn account_rows(accounts: &[GamingAccount]) -> Vec<AccountRow> {
    accounts
        .iter()
        .enumerate()
        .map(|(index, account)| AccountRow {
            key: index.to_string(),
            icon: account.icon(),
            platform: account.platform.clone(),
            account_id: account.account_id.clone(),
        })
        .collect()
}

#[component]
pub fn GamingAccountsPanel(accounts: Vec<GamingAccount>) -> Element {
    let rows = account_rows(&accounts);

    rsx! {
        section {
            class: "bg-card border border-border rounded-xl p-6",
            h2 {
                class: "text-2xl font-bold mb-4 flex items-center gap-2",
                GamepadIcon { class: "w-6 h-6" }
                "Gaming Accounts"
            }
            div {
                class: "space-y-4",
                for row in rows {
                    GamingAccountRow { key: "{row.key}", row }
                }
            }
        }
    }
}

#[component]
fn GamingAccountRow(row: AccountRow) -> Element {
    rsx! {
        div {
            class: "flex items-center justify-between p-3 bg-muted rounded-lg",
            div {
                class: "flex items-center gap-3",
                span {
                    class: "text-xl",
                    "{row.icon}"
                }
                div {
                    p {
                        class: "font-semibold",
                        "{row.platform}"
                    }
                    p {
                        class: "text-sm opacity-70",
                        "{row.account_id}"
                    }
                }
            }
            // Verification flow is not wired yet
            button {
                class: "px-3 py-1 text-sm rounded-md hover:bg-accent transition",
                "Verify"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_rows_keep_input_order() {
        let accounts = vec![
            GamingAccount::new("Epic", "epic456"),
            GamingAccount::new("Steam", "steam123"),
            GamingAccount::new("Riot", "riot789"),
        ];
        let rows = account_rows(&accounts);

        assert_eq!(rows.len(), 3);
        let platforms: Vec<&str> = rows.iter().map(|r| r.platform.as_str()).collect();
        assert_eq!(platforms, vec!["Epic", "Steam", "Riot"]);
        let keys: Vec<&str> = rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["0", "1", "2"]);
        assert_eq!(rows[1].account_id, "steam123");
    }

    #[test]
    fn test_account_rows_icons() {
        let rows = account_rows(&[
            GamingAccount::new("Steam", "s"),
            GamingAccount::new("Epic", "e"),
        ]);
        assert_eq!(rows[0].icon, "🎮");
        assert_eq!(rows[1].icon, "🎯");
    }

    #[test]
    fn test_no_accounts_no_rows() {
        assert!(account_rows(&[]).is_empty());
    }
}
