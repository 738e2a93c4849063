//! Reporting over a network — statistics, console report, JSON export.
//!
//! Everything here is read-only glue: functions take `&Network` and only
//! call its public query surface.

use std::io::Write;

use hashbrown::HashMap;
use serde::Serialize;

use crate::Result;
use crate::model::{Participant, ParticipantId, Relationship, RelationshipType, Sentiment};
use crate::store::Network;

// ============================================================================
// Statistics
// ============================================================================

/// Relationship count per sentiment class. Classes with no relationships
/// are absent; report rendering zero-fills over [`Sentiment::ALL`].
pub fn sentiment_distribution<P: Participant>(network: &Network<P>) -> HashMap<Sentiment, usize> {
    let mut counts = HashMap::new();
    for rel in network.relationships() {
        *counts.entry(rel.quality.sentiment()).or_insert(0) += 1;
    }
    counts
}

/// Relationship count per relationship type.
pub fn kind_distribution<P: Participant>(
    network: &Network<P>,
) -> HashMap<RelationshipType, usize> {
    let mut counts = HashMap::new();
    for rel in network.relationships() {
        *counts.entry(rel.kind).or_insert(0) += 1;
    }
    counts
}

/// The `n` highest-scoring very-positive relationships, best first.
pub fn top_positive<P: Participant>(network: &Network<P>, n: usize) -> Vec<&Relationship> {
    let mut rels: Vec<&Relationship> = network
        .relationships()
        .iter()
        .filter(|r| r.quality.sentiment() == Sentiment::VeryPositive)
        .collect();
    rels.sort_by(|a, b| b.quality.overall_score().total_cmp(&a.quality.overall_score()));
    rels.truncate(n);
    rels
}

/// The `n` lowest-scoring very-negative relationships, worst first.
pub fn top_negative<P: Participant>(network: &Network<P>, n: usize) -> Vec<&Relationship> {
    let mut rels: Vec<&Relationship> = network
        .relationships()
        .iter()
        .filter(|r| r.quality.sentiment() == Sentiment::VeryNegative)
        .collect();
    rels.sort_by(|a, b| a.quality.overall_score().total_cmp(&b.quality.overall_score()));
    rels.truncate(n);
    rels
}

/// Render one relationship with endpoint names resolved through the store.
/// Unknown endpoints fall back to the raw id.
pub fn describe<P: Participant>(network: &Network<P>, rel: &Relationship) -> String {
    format!(
        "{} -> {} ({}): {} (Score: {:.1})",
        endpoint_name(network, rel.from),
        endpoint_name(network, rel.to),
        rel.kind,
        rel.quality.sentiment(),
        rel.quality.overall_score(),
    )
}

fn endpoint_name<P: Participant>(network: &Network<P>, id: ParticipantId) -> String {
    network
        .participant(id)
        .map(|p| p.name().to_string())
        .unwrap_or_else(|| id.to_string())
}

// ============================================================================
// Console report
// ============================================================================

/// Write the full network report: roster, per-participant outbound
/// relations, sentiment/type distributions, top relationships, and mutual
/// pairs.
pub fn write_report<P: Participant>(network: &Network<P>, writer: &mut dyn Write) -> Result<()> {
    writeln!(writer, "=== Relationship Network Report ===")?;
    writeln!(writer)?;

    writeln!(writer, "Participants:")?;
    for participant in network.participants() {
        writeln!(writer, "- {} ({})", participant.name(), participant.contact())?;
    }
    writeln!(
        writer,
        "Network Overview: {} Participants, {} Relations",
        network.participant_count(),
        network.relationship_count()
    )?;

    writeln!(writer)?;
    writeln!(writer, "=== All Relations (outbound) ===")?;
    for participant in network.participants() {
        let mut outgoing: Vec<&Relationship> = network.outgoing(participant.id()).collect();
        outgoing.sort_by_key(|rel| endpoint_name(network, rel.to));

        writeln!(writer)?;
        writeln!(writer, "{}'s outbound relations:", participant.name())?;
        for rel in outgoing {
            writeln!(writer, "  {}", describe(network, rel))?;
            writeln!(writer, "    Details: {}", rel.quality)?;
        }
    }

    writeln!(writer)?;
    writeln!(writer, "=== Statistics ===")?;
    let by_sentiment = sentiment_distribution(network);
    writeln!(writer, "Distribution by sentiment:")?;
    for sentiment in Sentiment::ALL {
        let count = by_sentiment.get(&sentiment).copied().unwrap_or(0);
        writeln!(writer, "  {sentiment}: {count}")?;
    }
    let by_kind = kind_distribution(network);
    writeln!(writer, "Distribution by type:")?;
    for kind in RelationshipType::ALL {
        let count = by_kind.get(&kind).copied().unwrap_or(0);
        writeln!(writer, "  {kind}: {count}")?;
    }

    writeln!(writer)?;
    writeln!(writer, "=== Special Relations ===")?;
    writeln!(writer, "Top 3 positive relations:")?;
    for rel in top_positive(network, 3) {
        writeln!(writer, "  {}", describe(network, rel))?;
    }
    let worst = top_negative(network, 3);
    if !worst.is_empty() {
        writeln!(writer, "Top 3 negative relations:")?;
        for rel in worst {
            writeln!(writer, "  {}", describe(network, rel))?;
        }
    }

    writeln!(writer)?;
    writeln!(writer, "=== Mutual Relations ===")?;
    for (outgoing, incoming) in network.mutual_relationships().into_iter().take(5) {
        writeln!(
            writer,
            "{} <-> {}:",
            endpoint_name(network, outgoing.from),
            endpoint_name(network, outgoing.to)
        )?;
        writeln!(writer, "  {}", describe(network, outgoing))?;
        writeln!(writer, "  {}", describe(network, incoming))?;

        let out_score = outgoing.quality.overall_score();
        let in_score = incoming.quality.overall_score();
        let average = (out_score + in_score) / 2.0;
        let symmetric = (out_score - in_score).abs() < 2.0;
        writeln!(
            writer,
            "    Average: {average:.1}, Symmetric: {}",
            if symmetric { "yes" } else { "no" }
        )?;
    }

    Ok(())
}

// ============================================================================
// JSON export
// ============================================================================

#[derive(Serialize)]
struct NetworkDump<'a, P> {
    participants: &'a [P],
    relationships: &'a [Relationship],
}

/// Serialize the whole network (participants + relationships) as pretty
/// JSON.
pub fn export_json<P>(network: &Network<P>, writer: &mut dyn Write) -> Result<()>
where
    P: Participant + Serialize,
{
    let dump = NetworkDump {
        participants: network.participants(),
        relationships: network.relationships(),
    };
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}
