//! # relnet — In-Memory Social Relationship Network
//!
//! A directed social/professional network: participants and typed,
//! quality-scored relationships between them, with mutual-pair detection
//! and reporting over the network.
//!
//! ## Design Principles
//!
//! 1. **Store owns everything**: [`Network`] is the sole source of truth;
//!    participants and relationships carry no back-references
//! 2. **Value-oriented identity**: edges are keyed by ordered
//!    `(ParticipantId, ParticipantId)` pairs, never by object identity
//! 3. **Trait-first**: [`Participant`] is the contract between the store
//!    and any participant-like type
//! 4. **Collaborators stay thin**: generation and reporting only call the
//!    public store API
//!
//! ## Quick Start
//!
//! ```rust
//! use relnet::{Network, Person, Quality, RelationshipType};
//!
//! # fn example() -> relnet::Result<()> {
//! let mut network = Network::new();
//! let ada = Person::new(1, "Ada", "ada@example.com");
//! let ben = Person::new(2, "Ben", "ben@example.com");
//!
//! network.add_relationship(
//!     ada.clone(),
//!     ben.clone(),
//!     RelationshipType::Colleague,
//!     Quality::new(7, 8, 5, 6)?,
//! )?;
//! network.add_relationship(ben, ada, RelationshipType::Friend, Quality::new(6, 6, 7, 5)?)?;
//!
//! assert_eq!(network.relationship_count(), 2);
//! assert_eq!(network.mutual_relationships().len(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod store;
pub mod generator;
pub mod report;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{
    Participant, ParticipantId, Person,
    Quality, Sentiment,
    Relationship, RelationshipType,
};

// ============================================================================
// Re-exports: Store
// ============================================================================

pub use store::Network;

// ============================================================================
// Re-exports: Collaborators
// ============================================================================

pub use generator::{GeneratorConfig, generate_network, generate_with};
pub use report::{export_json, write_report};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("quality dimension {dimension} out of range: {value} (expected -10..=10)")]
    QualityOutOfRange { dimension: &'static str, value: i32 },

    #[error("self-referential relationship for participant {0}")]
    SelfLoop(ParticipantId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
