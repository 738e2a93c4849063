//! Participants — the endpoints of relationships.

use serde::{Deserialize, Serialize};

/// Opaque participant identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParticipantId(pub u64);

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ParticipantId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// Anything that can be a relationship endpoint.
///
/// The store is generic over this trait so that richer participant types
/// (accounts, organizations, imported contacts) plug in without changes to
/// the store itself. [`Person`] is the stock implementation.
pub trait Participant {
    /// Stable identity key. All store lookups and edge endpoints use this.
    fn id(&self) -> ParticipantId;

    /// Display name.
    fn name(&self) -> &str;

    /// Contact string (email, handle, phone).
    fn contact(&self) -> &str;
}

/// A person in the network.
///
/// Equality is by identity key, not by structural content: two `Person`
/// values with the same id are the same participant even if their display
/// fields differ.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: ParticipantId,
    pub name: String,
    pub email: String,
}

impl Person {
    pub fn new(
        id: impl Into<ParticipantId>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}

impl Participant for Person {
    fn id(&self) -> ParticipantId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn contact(&self) -> &str {
        &self.email
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Person {}
