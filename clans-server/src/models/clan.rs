//! Clan input models
//!
//! Create bodies arrive as loosely typed JSON; `NewClan::from_json` is the
//! only way to turn one into something the store accepts.

use serde_json::Value;
use uuid::Uuid;

use super::ValidationError;

/// Validated clan name (non-empty, otherwise unconstrained)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClanName(String);

impl ClanName {
    /// Create a clan name, rejecting the empty string.
    ///
    /// Whitespace-only names are accepted; presence is the only rule.
    ///
    /// # Example
    /// ```
    /// use clans_server::models::ClanName;
    ///
    /// assert!(ClanName::new("Phoenix").is_ok());
    /// assert!(ClanName::new("").is_err());
    /// ```
    pub fn new(s: impl Into<String>) -> Result<Self, ValidationError> {
        let s = s.into();
        if s.is_empty() {
            return Err(ValidationError::Required { field: "name" });
        }
        Ok(Self(s))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ClanName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A clan ready to be inserted, with its server-generated id
#[derive(Debug, Clone)]
pub struct NewClan {
    pub id: Uuid,
    pub name: ClanName,
    pub region: Option<String>,
}

impl NewClan {
    /// Build a clan with a fresh random (v4) id.
    pub fn new(name: ClanName, region: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            region,
        }
    }

    /// Validate a decoded JSON body.
    ///
    /// Anything other than an object with a non-empty string `name` is a
    /// missing name. `region` may be absent, null, or a string.
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let obj = body
            .as_object()
            .ok_or(ValidationError::Required { field: "name" })?;

        let name = obj
            .get("name")
            .and_then(Value::as_str)
            .ok_or(ValidationError::Required { field: "name" })?;
        let name = ClanName::new(name)?;

        let region = match obj.get("region") {
            None | Some(Value::Null) => None,
            Some(Value::String(region)) => Some(region.clone()),
            Some(_) => return Err(ValidationError::NotAString { field: "region" }),
        };

        Ok(Self::new(name, region))
    }
}

/// Column a clan listing is ordered by.
///
/// The SQL text comes only from `as_sql`, never from request input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    Name,
    #[default]
    CreatedAt,
}

impl SortColumn {
    /// Resolve a `sort` query value. Unknown or absent values fall back to
    /// `created_at`.
    pub fn resolve(value: Option<&str>) -> Self {
        match value {
            Some("name") => Self::Name,
            _ => Self::CreatedAt,
        }
    }

    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::CreatedAt => "created_at",
        }
    }
}

/// Filter and ordering for a clan listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClanQuery {
    /// Exact-match region filter
    pub region: Option<String>,
    pub sort: SortColumn,
}

impl ClanQuery {
    /// Build from raw query values. An empty region means no filter.
    pub fn new(region: Option<String>, sort: Option<&str>) -> Self {
        Self {
            region: region.filter(|r| !r.is_empty()),
            sort: SortColumn::resolve(sort),
        }
    }
}
