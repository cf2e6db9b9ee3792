pub mod use_profile;

pub use use_profile::use_profile;
