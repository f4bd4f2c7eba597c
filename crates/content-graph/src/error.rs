use std::path::PathBuf;

use async_graphql::ErrorExtensions;

/// Codes attached to the `extensions.code` entry of GraphQL errors raised by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::AsRefStr, strum::IntoStaticStr, strum::EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorCode {
    /// A global id could not be decoded.
    MalformedId,
    /// A resolver received a parent value of an unexpected shape.
    InternalError,
}

impl ErrorCode {
    pub(crate) fn error(self, message: impl Into<String>) -> async_graphql::Error {
        async_graphql::Error::new(message).extend_with(|_, extensions| extensions.set("code", self.to_string()))
    }
}

/// Raised when a global id token does not follow the `base64("<type>:<id>")` encoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid global id `{token}`: {reason}")]
pub struct MalformedIdError {
    token: String,
    reason: MalformedIdReason,
}

impl MalformedIdError {
    pub(crate) fn new(token: &str, reason: MalformedIdReason) -> Self {
        Self {
            token: token.to_owned(),
            reason,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn reason(&self) -> MalformedIdReason {
        self.reason
    }
}

impl ErrorExtensions for MalformedIdError {
    fn extend(&self) -> async_graphql::Error {
        ErrorCode::MalformedId.error(self.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MalformedIdReason {
    #[error("not valid base64")]
    Base64,
    #[error("not valid UTF-8")]
    Utf8,
    #[error("missing `:` between type name and id")]
    MissingSeparator,
    #[error("empty type name")]
    EmptyTypeName,
    #[error("empty id")]
    EmptyLocalId,
}

/// Errors preventing a schema from being built.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("`{type_name}` is not a valid GraphQL type name (registered as `{name}`)")]
    InvalidTypeName { name: String, type_name: String },
    #[error("GraphQL type name `{0}` is used more than once")]
    DuplicateTypeName(String),
    #[error("`{field}` is not a valid custom field name on `{type_name}`")]
    InvalidFieldName { type_name: String, field: String },
    #[error("taxonomy type `{type_name}` cannot declare meta field `{field}`")]
    TaxonomyMetaField { type_name: String, field: String },
    #[error("taxonomy type `{name}` extends `{extends}`, which is not registered")]
    UnknownBaseTaxonomy { name: String, extends: String },
    #[error(transparent)]
    Build(#[from] async_graphql::dynamic::SchemaError),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("reading configuration file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
