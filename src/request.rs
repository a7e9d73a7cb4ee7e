use serde_json::Value;
use std::fmt;

use crate::error::PayloadError;

// Bucket + key of the object to convert, both non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchLocation {
    pub bucket: String,
    pub key: String,
}

impl FetchLocation {
    // Parse raw payload bytes; anything that is not JSON is rejected before field checks
    pub fn from_slice(payload: &[u8]) -> Result<Self, PayloadError> {
        let value: Value = serde_json::from_slice(payload).map_err(PayloadError::Malformed)?;
        Self::try_from(&value)
    }
}

impl TryFrom<&Value> for FetchLocation {
    type Error = PayloadError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let field = |name: &str| {
            value
                .get(name)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
        };
        match (field("s3bucket"), field("s3key")) {
            (Some(bucket), Some(key)) => Ok(FetchLocation { bucket, key }),
            _ => Err(PayloadError::MissingLocation),
        }
    }
}

impl fmt::Display for FetchLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s3://{}/{}", self.bucket, self.key)
    }
}
