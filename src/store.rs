//! In-memory relationship store.
//!
//! [`Network`] owns the participant registry and the relationship
//! collection, and is the only place either is mutated.
//!
//! ## Limitations
//!
//! - **Linear scans**: ordered-pair lookups walk the relationship list.
//!   Collections are demo-sized; there is no index beyond id membership.
//! - **Single-actor only**: no interior locking. In a multi-threaded host,
//!   treat a `Network` as one logical resource behind an external lock.
//! - **No persistence**: state lives and dies with the value.

use chrono::{DateTime, Utc};
use hashbrown::HashSet;
use tracing::debug;

use crate::model::{Participant, ParticipantId, Person, Quality, Relationship, RelationshipType};
use crate::{Error, Result};

/// Registry of participants and the directed relationships between them.
///
/// Both collections are insertion-ordered and duplicate-free: participants
/// by identity key, relationships by ordered `(from, to)` pair.
pub struct Network<P = Person> {
    participants: Vec<P>,
    participant_ids: HashSet<ParticipantId>,
    relationships: Vec<Relationship>,
}

impl<P: Participant> Network<P> {
    pub fn new() -> Self {
        Self {
            participants: Vec::new(),
            participant_ids: HashSet::new(),
            relationships: Vec::new(),
        }
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Register a participant. Idempotent: a second registration under the
    /// same id is dropped and the first occurrence (and its position) is
    /// retained. Returns whether the registry grew.
    pub fn add_participant(&mut self, participant: P) -> bool {
        if !self.participant_ids.insert(participant.id()) {
            return false;
        }
        debug!(id = %participant.id(), name = participant.name(), "participant registered");
        self.participants.push(participant);
        true
    }

    /// Add a directed relationship starting now.
    ///
    /// Both endpoints are auto-registered. If the ordered pair already has
    /// a relationship, the call is a no-op (`Ok(false)`) and the existing
    /// edge keeps its quality — first write wins. Self-loops are rejected.
    pub fn add_relationship(
        &mut self,
        from: P,
        to: P,
        kind: RelationshipType,
        quality: Quality,
    ) -> Result<bool> {
        self.add_relationship_dated(from, to, kind, quality, Utc::now())
    }

    /// [`add_relationship`](Self::add_relationship) with an explicit start
    /// date. The generator uses this to backdate edges; the store itself
    /// holds no random source.
    pub fn add_relationship_dated(
        &mut self,
        from: P,
        to: P,
        kind: RelationshipType,
        quality: Quality,
        started: DateTime<Utc>,
    ) -> Result<bool> {
        let from_id = from.id();
        let to_id = to.id();
        if from_id == to_id {
            return Err(Error::SelfLoop(from_id));
        }

        self.add_participant(from);
        self.add_participant(to);

        if self.relationship(from_id, to_id).is_some() {
            return Ok(false);
        }

        debug!(from = %from_id, to = %to_id, ?kind, "relationship added");
        self.relationships.push(Relationship {
            from: from_id,
            to: to_id,
            kind,
            quality,
            started,
        });
        Ok(true)
    }

    /// Remove the relationship for the ordered pair. Returns `true` if one
    /// existed; absent pairs are a no-op, never an error.
    pub fn remove_relationship(&mut self, from: ParticipantId, to: ParticipantId) -> bool {
        let before = self.relationships.len();
        self.relationships.retain(|r| r.key() != (from, to));
        let removed = self.relationships.len() != before;
        if removed {
            debug!(%from, %to, "relationship removed");
        }
        removed
    }

    /// Replace the quality of the ordered pair's relationship wholesale.
    /// Returns `true` if one existed; absent pairs are a no-op. This is the
    /// only update path — there is no partial-field update.
    pub fn update_quality(
        &mut self,
        from: ParticipantId,
        to: ParticipantId,
        new_quality: Quality,
    ) -> bool {
        match self
            .relationships
            .iter_mut()
            .find(|r| r.key() == (from, to))
        {
            Some(rel) => {
                debug!(%from, %to, "relationship quality updated");
                rel.quality = new_quality;
                true
            }
            None => false,
        }
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Exact ordered-pair lookup.
    pub fn relationship(&self, from: ParticipantId, to: ParticipantId) -> Option<&Relationship> {
        self.relationships.iter().find(|r| r.key() == (from, to))
    }

    pub fn participant(&self, id: ParticipantId) -> Option<&P> {
        self.participants.iter().find(|p| p.id() == id)
    }

    /// All participants, in registration order.
    pub fn participants(&self) -> &[P] {
        &self.participants
    }

    /// All relationships, in insertion order.
    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    /// Relationships where the participant is the source, in stored order.
    pub fn outgoing(&self, id: ParticipantId) -> impl Iterator<Item = &Relationship> + '_ {
        self.relationships.iter().filter(move |r| r.from == id)
    }

    /// Relationships where the participant is the target, in stored order.
    pub fn incoming(&self, id: ParticipantId) -> impl Iterator<Item = &Relationship> + '_ {
        self.relationships.iter().filter(move |r| r.to == id)
    }

    /// Relationships touching the participant in either direction — a
    /// single pass preserving stored order, not "outgoing then incoming".
    pub fn involving(&self, id: ParticipantId) -> impl Iterator<Item = &Relationship> + '_ {
        self.relationships.iter().filter(move |r| r.involves(id))
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }

    // ========================================================================
    // Mutual pairs
    // ========================================================================

    /// Detect reciprocal pairs: for each relationship A→B with a stored
    /// B→A, yield `(outgoing, incoming)` exactly once, in the order the
    /// outgoing edge appears in the collection.
    ///
    /// Dedup is by the unordered pair of participant ids, so the pair is
    /// reported for whichever direction is scanned first and suppressed
    /// when the reverse direction comes around.
    pub fn mutual_relationships(&self) -> Vec<(&Relationship, &Relationship)> {
        let mut seen: HashSet<(ParticipantId, ParticipantId)> = HashSet::new();
        let mut pairs = Vec::new();

        for rel in &self.relationships {
            let Some(reciprocal) = self.relationship(rel.to, rel.from) else {
                continue;
            };
            let key = if rel.from <= rel.to {
                (rel.from, rel.to)
            } else {
                (rel.to, rel.from)
            };
            if seen.insert(key) {
                pairs.push((rel, reciprocal));
            }
        }

        pairs
    }
}

impl<P: Participant> Default for Network<P> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
