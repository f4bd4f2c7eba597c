//! Opaque node identifiers.
//!
//! A global id is the standard base64 encoding of `"<TypeName>:<local id>"`. The format carries no
//! version and must stay stable: clients persist these tokens.

use std::{fmt, str::FromStr};

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::{MalformedIdError, MalformedIdReason};

const SEPARATOR: char = ':';

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GlobalId {
    type_name: String,
    local_id: String,
}

impl GlobalId {
    pub fn new(type_name: impl Into<String>, local_id: impl ToString) -> Self {
        Self {
            type_name: type_name.into(),
            local_id: local_id.to_string(),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn local_id(&self) -> &str {
        &self.local_id
    }

    pub fn encode(&self) -> String {
        STANDARD.encode(format!("{}{SEPARATOR}{}", self.type_name, self.local_id))
    }

    pub fn decode(token: &str) -> Result<Self, MalformedIdError> {
        let bytes = STANDARD
            .decode(token)
            .map_err(|_| MalformedIdError::new(token, MalformedIdReason::Base64))?;

        let decoded = String::from_utf8(bytes).map_err(|_| MalformedIdError::new(token, MalformedIdReason::Utf8))?;

        // Type names never contain the separator, local ids may.
        let (type_name, local_id) = decoded
            .split_once(SEPARATOR)
            .ok_or_else(|| MalformedIdError::new(token, MalformedIdReason::MissingSeparator))?;

        if type_name.is_empty() {
            return Err(MalformedIdError::new(token, MalformedIdReason::EmptyTypeName));
        }

        if local_id.is_empty() {
            return Err(MalformedIdError::new(token, MalformedIdReason::EmptyLocalId));
        }

        Ok(Self::new(type_name, local_id))
    }
}

/// Parses a numeric local id, accepting only its canonical decimal form.
///
/// `"01"`, `"+1"` and `" 1"` all read as `1` with a plain integer parse. Accepting them would
/// give one record several global ids, so they are rejected here.
pub(crate) fn parse_local_id(local_id: &str) -> Option<u64> {
    let id = local_id.parse::<u64>().ok()?;
    (id.to_string() == local_id).then_some(id)
}

impl fmt::Display for GlobalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for GlobalId {
    type Err = MalformedIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}
