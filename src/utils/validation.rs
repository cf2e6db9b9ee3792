//! Validation utilities for wallet addresses coming from the wallet provider or storage.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reasons an address string was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressValidationError {
    /// Missing the `0x` prefix
    MissingPrefix,
    /// Not exactly 20 bytes of hex after the prefix
    InvalidLength(usize),
    /// Contains non-hex characters
    InvalidHex,
}

impl fmt::Display for AddressValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPrefix => write!(f, "Address must start with 0x"),
            Self::InvalidLength(len) => {
                write!(f, "Address must have 40 hex digits, got {}", len)
            }
            Self::InvalidHex => write!(f, "Address contains non-hex characters"),
        }
    }
}

impl std::error::Error for AddressValidationError {}

/// A validated EVM account address, stored lowercase
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WalletAddress(String);

impl WalletAddress {
    /// Parse and normalize an address (`0x` followed by 40 hex digits, any case)
    pub fn parse(input: &str) -> Result<Self, AddressValidationError> {
        let trimmed = input.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .ok_or(AddressValidationError::MissingPrefix)?;

        if digits.len() != 40 {
            return Err(AddressValidationError::InvalidLength(digits.len()));
        }

        let bytes = hex::decode(digits).map_err(|_| AddressValidationError::InvalidHex)?;
        Ok(Self(format!("0x{}", hex::encode(bytes))))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Shortened display form, e.g. "0xab12...cdef"
    pub fn short(&self) -> String {
        format!("{}...{}", &self.0[..6], &self.0[self.0.len() - 4..])
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for WalletAddress {
    type Error = AddressValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<WalletAddress> for String {
    fn from(address: WalletAddress) -> Self {
        address.0
    }
}
