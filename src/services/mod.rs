// Services
// Data sources behind the profile page

pub mod gaming_profile;
pub mod profile_reader;

pub use gaming_profile::{Achievement, GamingAccount, GamingProfile};
pub use profile_reader::{
    MockProfileReader, MockResponse, ProfileReadError, ProfileReader, ProfileReaderHandle,
};
