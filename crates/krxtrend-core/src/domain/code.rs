use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

const CODE_LEN: usize = 6;

/// Validated six-digit KRX issue code.
///
/// Shorter all-digit inputs are left-padded with zeros, so `"5930"` and
/// `"005930"` compare equal after parsing. Feed documents are normalized the
/// same way before comparison.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StockCode(String);

impl StockCode {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyCode);
        }

        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::CodeNotNumeric {
                value: trimmed.to_owned(),
            });
        }

        if trimmed.len() > CODE_LEN {
            return Err(ValidationError::CodeTooLong {
                value: trimmed.to_owned(),
                max: CODE_LEN,
            });
        }

        Ok(Self(format!("{trimmed:0>width$}", width = CODE_LEN)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for StockCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for StockCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for StockCode {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<StockCode> for String {
    fn from(value: StockCode) -> Self {
        value.0
    }
}
