// Utility functions
// Helper functions shared by stores, hooks and components

pub mod data_state;
pub mod time;
pub mod validation;

pub use data_state::DataState;
pub use time::format_earned_date;
pub use validation::WalletAddress;
