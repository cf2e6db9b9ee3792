//! Profile reader - the address → profile boundary
//!
//! The page only depends on [`ProfileReader`]: given a wallet address it yields a
//! profile, nothing (no profile registered), or a read error. The on-chain reader
//! does not exist yet, so the app wires in [`MockProfileReader`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use crate::services::gaming_profile::{Achievement, GamingAccount, GamingProfile};
use crate::utils::WalletAddress;

/// Errors produced while reading a profile
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileReadError {
    /// The backing source could not be reached
    Unavailable(String),
    /// The source answered with data that does not decode as a profile
    Malformed(String),
    /// Two achievements share an id
    DuplicateAchievement { id: String },
}

impl fmt::Display for ProfileReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "Profile source unavailable: {}", msg),
            Self::Malformed(msg) => write!(f, "Malformed profile data: {}", msg),
            Self::DuplicateAchievement { id } => {
                write!(f, "Duplicate achievement id: {}", id)
            }
        }
    }
}

impl std::error::Error for ProfileReadError {}

impl From<serde_json::Error> for ProfileReadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

/// Reads the gaming profile registered for a wallet address
#[async_trait(?Send)]
pub trait ProfileReader {
    async fn fetch_profile(
        &self,
        address: &WalletAddress,
    ) -> Result<Option<GamingProfile>, ProfileReadError>;
}

/// Shared handle placed in the Dioxus context by the app root
#[derive(Clone)]
pub struct ProfileReaderHandle(pub Rc<dyn ProfileReader>);

impl ProfileReaderHandle {
    pub fn new(reader: impl ProfileReader + 'static) -> Self {
        Self(Rc::new(reader))
    }
}

/// Reject profiles that break the unique-achievement-id invariant
pub fn check_profile(profile: GamingProfile) -> Result<GamingProfile, ProfileReadError> {
    if let Some(id) = profile.duplicate_achievement_id() {
        return Err(ProfileReadError::DuplicateAchievement { id: id.to_string() });
    }
    Ok(profile)
}

/// Decode a JSON profile document, as a future contract read would return it
pub fn decode_profile(json: &str) -> Result<Option<GamingProfile>, ProfileReadError> {
    let profile: Option<GamingProfile> = serde_json::from_str(json)?;
    profile.map(check_profile).transpose()
}

/// What the mock reader answers with
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum MockResponse {
    /// The fixed demonstration profile
    Demo,
    /// No profile registered
    NotFound,
    /// A raw JSON document decoded as the contract read would be
    Document(String),
    /// A read failure with the given message
    Fail(String),
}

/// Placeholder reader returning fixed data after a simulated delay
///
/// The address is accepted but not used to pick the data.
#[derive(Clone, Debug)]
pub struct MockProfileReader {
    pub latency: Duration,
    pub response: MockResponse,
}

impl MockProfileReader {
    pub fn with_response(response: MockResponse) -> Self {
        Self {
            latency: Duration::ZERO,
            response,
        }
    }

    pub fn latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait(?Send)]
impl ProfileReader for MockProfileReader {
    async fn fetch_profile(
        &self,
        address: &WalletAddress,
    ) -> Result<Option<GamingProfile>, ProfileReadError> {
        log::debug!("Mock profile read for {}", address);
        simulate_latency(self.latency).await;

        match &self.response {
            MockResponse::Demo => check_profile(demo_profile()).map(Some),
            MockResponse::NotFound => Ok(None),
            MockResponse::Document(json) => decode_profile(json),
            MockResponse::Fail(msg) => Err(ProfileReadError::Unavailable(msg.clone())),
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn simulate_latency(latency: Duration) {
    if !latency.is_zero() {
        gloo_timers::future::sleep(latency).await;
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn simulate_latency(_latency: Duration) {}

/// Demonstration profile shown until the contract read lands
pub fn demo_profile() -> GamingProfile {
    GamingProfile {
        username: "ProGamer123".to_string(),
        bio: "Competitive gamer passionate about FPS and strategy games".to_string(),
        gaming_accounts: vec![
            GamingAccount::new("Steam", "steam123"),
            GamingAccount::new("Epic", "epic456"),
        ],
        achievements: vec![
            Achievement {
                id: "1".to_string(),
                name: "Early Adopter".to_string(),
                description: "One of the first 1000 users on GamersDAO".to_string(),
                earned_date: "2024-03-15".to_string(),
            },
            Achievement {
                id: "2".to_string(),
                name: "Social Butterfly".to_string(),
                description: "Connected 3 gaming accounts".to_string(),
                earned_date: "2024-03-16".to_string(),
            },
        ],
        reputation: 850,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn address() -> WalletAddress {
        WalletAddress::parse("0x00000000000000000000000000000000000000aa").unwrap()
    }

    #[test]
    fn test_mock_demo_profile() {
        let reader = MockProfileReader::with_response(MockResponse::Demo);
        let profile = block_on(reader.fetch_profile(&address())).unwrap().unwrap();
        assert_eq!(profile.username, "ProGamer123");
        assert_eq!(profile.reputation, 850);
        assert_eq!(profile.gaming_accounts.len(), 2);
        assert_eq!(profile.achievements[0].name, "Early Adopter");
        assert_eq!(profile.achievements[1].earned_date, "2024-03-16");
    }

    #[test]
    fn test_mock_latency_builder() {
        let reader = MockProfileReader::with_response(MockResponse::NotFound);
        assert_eq!(reader.latency, Duration::ZERO);

        let reader = reader.latency(Duration::from_millis(250));
        assert_eq!(reader.latency, Duration::from_millis(250));
        assert_eq!(reader.response, MockResponse::NotFound);
    }

    #[test]
    fn test_mock_not_found() {
        let reader = MockProfileReader::with_response(MockResponse::NotFound);
        assert_eq!(block_on(reader.fetch_profile(&address())), Ok(None));
    }

    #[test]
    fn test_mock_failure() {
        let reader = MockProfileReader::with_response(MockResponse::Fail("rpc down".into()));
        let err = block_on(reader.fetch_profile(&address())).unwrap_err();
        assert_eq!(err, ProfileReadError::Unavailable("rpc down".into()));
        assert_eq!(err.to_string(), "Profile source unavailable: rpc down");
    }

    #[test]
    fn test_mock_document() {
        let reader = MockProfileReader::with_response(MockResponse::Document("null".into()));
        assert_eq!(block_on(reader.fetch_profile(&address())), Ok(None));

        let reader = MockProfileReader::with_response(MockResponse::Document("{".into()));
        assert!(matches!(
            block_on(reader.fetch_profile(&address())),
            Err(ProfileReadError::Malformed(_))
        ));
    }

    #[test]
    fn test_decode_profile() {
        assert_eq!(decode_profile("null"), Ok(None));

        let json = serde_json::to_string(&demo_profile()).unwrap();
        assert_eq!(decode_profile(&json), Ok(Some(demo_profile())));

        assert!(matches!(
            decode_profile("{\"username\": 5}"),
            Err(ProfileReadError::Malformed(_))
        ));
    }

    #[test]
    fn test_decode_rejects_duplicate_ids() {
        let mut profile = demo_profile();
        profile.achievements[1].id = "1".to_string();
        let json = serde_json::to_string(&profile).unwrap();
        assert_eq!(
            decode_profile(&json),
            Err(ProfileReadError::DuplicateAchievement { id: "1".into() })
        );
    }
}
