//! End-to-end tests for the relationship store.
//!
//! Each test drives the public `Network` API the way the generator and
//! reporter do: add participants and edges, then query the read surface.

use pretty_assertions::assert_eq;
use relnet::{Network, ParticipantId, Person, Quality, RelationshipType, Sentiment};

fn person(id: u64, name: &str) -> Person {
    Person::new(id, name, format!("{}@example.com", name.to_lowercase()))
}

fn flat(value: i32) -> Quality {
    Quality::new(value, value, value, value).unwrap()
}

// ============================================================================
// 1. Involving = outgoing + incoming, in stored order
// ============================================================================

#[test]
fn involving_unions_both_directions_in_stored_order() {
    let mut network = Network::new();
    let anna = person(1, "Anna");
    let ben = person(2, "Ben");
    let clara = person(3, "Clara");

    // Interleave directions so "outgoing then incoming" would reorder.
    network
        .add_relationship(anna.clone(), ben.clone(), RelationshipType::Friend, flat(1))
        .unwrap();
    network
        .add_relationship(clara.clone(), anna.clone(), RelationshipType::Rival, flat(-1))
        .unwrap();
    network
        .add_relationship(ben.clone(), clara.clone(), RelationshipType::Colleague, flat(2))
        .unwrap();
    network
        .add_relationship(anna.clone(), clara.clone(), RelationshipType::Family, flat(3))
        .unwrap();

    let anna_id = ParticipantId(1);
    let outgoing = network.outgoing(anna_id).count();
    let incoming = network.incoming(anna_id).count();
    let involving: Vec<_> = network.involving(anna_id).map(|r| r.key()).collect();

    assert_eq!(outgoing, 2);
    assert_eq!(incoming, 1);
    assert_eq!(involving.len(), outgoing + incoming);
    assert_eq!(
        involving,
        vec![
            (ParticipantId(1), ParticipantId(2)),
            (ParticipantId(3), ParticipantId(1)),
            (ParticipantId(1), ParticipantId(3)),
        ]
    );
}

// ============================================================================
// 2. Insertion order of the read views
// ============================================================================

#[test]
fn views_preserve_insertion_order() {
    let mut network = Network::new();
    for (id, name) in [(3, "Clara"), (1, "Anna"), (2, "Ben")] {
        network.add_participant(person(id, name));
    }
    // Re-adding an existing id keeps the original position.
    network.add_participant(person(1, "Anna Again"));

    let names: Vec<&str> = network.participants().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Clara", "Anna", "Ben"]);
}

// ============================================================================
// 3. Mutual detection is order-independent
// ============================================================================

#[test]
fn mutual_pair_found_regardless_of_stored_order() {
    for reversed in [false, true] {
        let mut network = Network::new();
        let anna = person(1, "Anna");
        let ben = person(2, "Ben");

        let (first, second) = if reversed {
            ((ben.clone(), anna.clone()), (anna.clone(), ben.clone()))
        } else {
            ((anna.clone(), ben.clone()), (ben.clone(), anna.clone()))
        };

        network
            .add_relationship(first.0, first.1, RelationshipType::Friend, flat(4))
            .unwrap();
        network
            .add_relationship(second.0, second.1, RelationshipType::Friend, flat(2))
            .unwrap();

        let mutual = network.mutual_relationships();
        assert_eq!(mutual.len(), 1, "reversed={reversed}");

        // The pair holds both directions, outgoing = first stored.
        let (outgoing, incoming) = mutual[0];
        assert_eq!(outgoing.to, incoming.from);
        assert_eq!(outgoing.from, incoming.to);
    }
}

#[test]
fn one_way_relationships_yield_no_mutual_pairs() {
    let mut network = Network::new();
    network
        .add_relationship(
            person(1, "Anna"),
            person(2, "Ben"),
            RelationshipType::Friend,
            flat(5),
        )
        .unwrap();
    network
        .add_relationship(
            person(2, "Ben"),
            person(3, "Clara"),
            RelationshipType::Friend,
            flat(5),
        )
        .unwrap();

    assert!(network.mutual_relationships().is_empty());
}

// ============================================================================
// 4. Removal shrinks the collection by exactly one
// ============================================================================

#[test]
fn remove_affects_exactly_one_edge() {
    let mut network = Network::new();
    network
        .add_relationship(
            person(1, "Anna"),
            person(2, "Ben"),
            RelationshipType::Friend,
            flat(1),
        )
        .unwrap();
    network
        .add_relationship(
            person(2, "Ben"),
            person(1, "Anna"),
            RelationshipType::Friend,
            flat(1),
        )
        .unwrap();

    assert!(network.remove_relationship(ParticipantId(1), ParticipantId(2)));

    assert_eq!(network.relationship_count(), 1);
    assert!(network.relationship(ParticipantId(1), ParticipantId(2)).is_none());
    assert!(network.relationship(ParticipantId(2), ParticipantId(1)).is_some());
    // Participants stay registered.
    assert_eq!(network.participant_count(), 2);
}

// ============================================================================
// 5. The full scenario: three participants, one mutual pair
// ============================================================================

#[test]
fn three_participant_network_end_to_end() {
    let mut network = Network::new();
    let anna = person(1, "Anna");
    let ben = person(2, "Ben");
    let clara = person(3, "Clara");

    network
        .add_relationship(anna.clone(), ben.clone(), RelationshipType::Friend, flat(8))
        .unwrap();
    network
        .add_relationship(ben.clone(), anna.clone(), RelationshipType::Friend, flat(7))
        .unwrap();
    network
        .add_relationship(anna.clone(), clara.clone(), RelationshipType::Rival, flat(-8))
        .unwrap();

    assert_eq!(network.relationship_count(), 3);
    assert_eq!(network.participant_count(), 3);

    let mutual = network.mutual_relationships();
    assert_eq!(mutual.len(), 1);
    assert_eq!(mutual[0].0.key(), (ParticipantId(1), ParticipantId(2)));

    let to_ben = network
        .relationship(ParticipantId(1), ParticipantId(2))
        .unwrap();
    assert_eq!(to_ben.quality.sentiment(), Sentiment::VeryPositive);

    let to_clara = network
        .relationship(ParticipantId(1), ParticipantId(3))
        .unwrap();
    assert_eq!(to_clara.quality.sentiment(), Sentiment::VeryNegative);
}
