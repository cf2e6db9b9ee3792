// UI Components
// This module contains all reusable UI components

pub mod achievements_panel;
pub mod address_display;
pub mod gaming_accounts_panel;
pub mod icons;
pub mod loading_indicator;
pub mod profile_header;
pub mod wallet_button;

pub use achievements_panel::AchievementsPanel;
pub use address_display::AddressDisplay;
pub use gaming_accounts_panel::GamingAccountsPanel;
pub use loading_indicator::LoadingIndicator;
pub use profile_header::ProfileHeader;
pub use wallet_button::WalletButton;
