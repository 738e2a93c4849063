//! # Network Model
//!
//! The data types that cross every boundary: store ↔ generator ↔ reporter.
//!
//! Design rule: this module is pure data — no I/O, no store state, no
//! randomness. The store owns the collections; these types only describe
//! participants, edges, and edge quality.

pub mod participant;
pub mod quality;
pub mod relationship;

pub use participant::{Participant, ParticipantId, Person};
pub use quality::{Quality, Sentiment};
pub use relationship::{Relationship, RelationshipType};
