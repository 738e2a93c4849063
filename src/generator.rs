//! Random network generation.
//!
//! Thin glue over the store API — all graph logic lives in [`Network`].
//! The RNG is passed in explicitly, so a fixed seed reproduces the exact
//! same network.

use chrono::{Duration, Utc};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::Result;
use crate::model::{Person, Quality, RelationshipType};
use crate::store::Network;

const SAMPLE_NAMES: [&str; 10] = [
    "Anna", "Ben", "Clara", "David", "Emma", "Felix", "Greta", "Hans", "Iris", "Jonas",
];

/// Shape of a generated network.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of participants to create.
    pub participants: usize,
    /// Smallest out-degree drawn per participant.
    pub min_out_degree: usize,
    /// Largest out-degree drawn per participant. Must be >= `min_out_degree`;
    /// draws are capped at `participants - 1` (no self-loops).
    pub max_out_degree: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            participants: SAMPLE_NAMES.len(),
            min_out_degree: 3,
            max_out_degree: 7,
        }
    }
}

/// Generate a sample network with the default shape.
pub fn generate_network(rng: &mut impl Rng) -> Result<Network<Person>> {
    generate_with(rng, &GeneratorConfig::default())
}

/// Generate a sample network: `participants` people, each with a random
/// out-degree of typed, quality-scored, backdated relationships to
/// distinct targets.
pub fn generate_with(rng: &mut impl Rng, config: &GeneratorConfig) -> Result<Network<Person>> {
    let mut network = Network::new();

    let people: Vec<Person> = (0..config.participants).map(sample_person).collect();
    for person in &people {
        network.add_participant(person.clone());
    }

    for person in &people {
        let out_degree = rng
            .gen_range(config.min_out_degree..=config.max_out_degree)
            .min(people.len().saturating_sub(1));
        let targets: Vec<Person> = people
            .iter()
            .filter(|candidate| candidate.id != person.id)
            .cloned()
            .collect();

        for target in targets.choose_multiple(rng, out_degree) {
            let started = Utc::now() - Duration::days(rng.gen_range(1..3650i64));
            network.add_relationship_dated(
                person.clone(),
                target.clone(),
                sample_kind(rng),
                sample_quality(rng)?,
                started,
            )?;
        }
    }

    debug!(
        participants = network.participant_count(),
        relationships = network.relationship_count(),
        "network generated"
    );
    Ok(network)
}

fn sample_person(index: usize) -> Person {
    let base = SAMPLE_NAMES[index % SAMPLE_NAMES.len()];
    // Past the name pool, disambiguate: "Anna 2", "Ben 2", ...
    let name = if index < SAMPLE_NAMES.len() {
        base.to_string()
    } else {
        format!("{base} {}", index / SAMPLE_NAMES.len() + 1)
    };
    let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
    Person::new(index as u64 + 1, name, email)
}

fn sample_kind(rng: &mut impl Rng) -> RelationshipType {
    RelationshipType::ALL[rng.gen_range(0..RelationshipType::ALL.len())]
}

fn sample_quality(rng: &mut impl Rng) -> Result<Quality> {
    Quality::new(
        sample_rating(rng),
        sample_rating(rng),
        sample_rating(rng),
        sample_rating(rng),
    )
}

/// One dimension draw: 15% chance of the negative band `[-10, -1]`, 25% of
/// the neutral band `[-2, 2]`, 60% of the positive band `[1, 10]`.
fn sample_rating(rng: &mut impl Rng) -> i32 {
    let roll: f64 = rng.r#gen();
    if roll < 0.15 {
        rng.gen_range(-10..0)
    } else if roll < 0.40 {
        rng.gen_range(-2..3)
    } else {
        rng.gen_range(1..11)
    }
}
