//! Relationship (directed edge) between two participants.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ParticipantId, Quality};

/// The kind of a relationship. Closed set: the generator draws uniformly
/// from [`RelationshipType::ALL`] and reports render one row per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationshipType {
    Friend,
    Family,
    Colleague,
    Romantic,
    Rival,
}

impl RelationshipType {
    pub const ALL: [RelationshipType; 5] = [
        RelationshipType::Friend,
        RelationshipType::Family,
        RelationshipType::Colleague,
        RelationshipType::Romantic,
        RelationshipType::Rival,
    ];
}

impl std::fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RelationshipType::Friend => "Friend",
            RelationshipType::Family => "Family",
            RelationshipType::Colleague => "Colleague",
            RelationshipType::Romantic => "Romantic",
            RelationshipType::Rival => "Rival",
        };
        f.write_str(name)
    }
}

/// A directed, typed, quality-scored edge.
///
/// Identity is the ordered `(from, to)` pair — the store keeps at most one
/// relationship per pair. `from`, `to`, `kind`, and `started` are fixed at
/// creation; only `quality` is replaced in place, and only by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    pub from: ParticipantId,
    pub to: ParticipantId,
    pub kind: RelationshipType,
    pub quality: Quality,
    pub started: DateTime<Utc>,
}

impl Relationship {
    /// The ordered-pair identity key.
    pub fn key(&self) -> (ParticipantId, ParticipantId) {
        (self.from, self.to)
    }

    /// Whether the given participant is either endpoint.
    pub fn involves(&self, id: ParticipantId) -> bool {
        self.from == id || self.to == id
    }

    /// The "other" end of the edge from the given participant.
    pub fn other_end(&self, id: ParticipantId) -> Option<ParticipantId> {
        if id == self.from {
            Some(self.to)
        } else if id == self.to {
            Some(self.from)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Relationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> {} ({}): {} (Score: {:.1})",
            self.from,
            self.to,
            self.kind,
            self.quality.sentiment(),
            self.quality.overall_score(),
        )
    }
}
