//! Relationship quality — four bounded sentiment dimensions and the
//! aggregate classification derived from them.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Five-way classification of a relationship's overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    VeryNegative,
    Negative,
    Neutral,
    Positive,
    VeryPositive,
}

impl Sentiment {
    /// All variants, in ascending order. Reports iterate this to render
    /// zero-filled distribution rows.
    pub const ALL: [Sentiment; 5] = [
        Sentiment::VeryNegative,
        Sentiment::Negative,
        Sentiment::Neutral,
        Sentiment::Positive,
        Sentiment::VeryPositive,
    ];
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Sentiment::VeryNegative => "VeryNegative",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
            Sentiment::Positive => "Positive",
            Sentiment::VeryPositive => "VeryPositive",
        };
        f.write_str(name)
    }
}

/// Quality of a single directed relationship.
///
/// Four integer dimensions, each in `[-10, +10]`. A `Quality` is a plain
/// value owned by exactly one [`Relationship`](super::Relationship); the
/// store replaces it wholesale on update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quality {
    trust: i32,
    respect: i32,
    affection: i32,
    compatibility: i32,
}

impl Quality {
    pub const DIM_MIN: i32 = -10;
    pub const DIM_MAX: i32 = 10;

    /// Build a quality value, rejecting any out-of-range dimension.
    pub fn new(trust: i32, respect: i32, affection: i32, compatibility: i32) -> Result<Self> {
        Ok(Self {
            trust: check_dimension("trust", trust)?,
            respect: check_dimension("respect", respect)?,
            affection: check_dimension("affection", affection)?,
            compatibility: check_dimension("compatibility", compatibility)?,
        })
    }

    pub fn trust(&self) -> i32 {
        self.trust
    }

    pub fn respect(&self) -> i32 {
        self.respect
    }

    pub fn affection(&self) -> i32 {
        self.affection
    }

    pub fn compatibility(&self) -> i32 {
        self.compatibility
    }

    /// Arithmetic mean of the four dimensions. Full precision — one-decimal
    /// rounding is a presentation concern, not a data concern.
    pub fn overall_score(&self) -> f64 {
        (self.trust + self.respect + self.affection + self.compatibility) as f64 / 4.0
    }

    /// Classify the overall score.
    ///
    /// Boundary contract: `-5.0` is Negative (the very-negative test is
    /// strict), `5.0` is Positive (the positive test is inclusive), and
    /// Neutral requires a mean of exactly zero. Integer quarters are exact
    /// in `f64`, so the zero test is well-defined.
    pub fn sentiment(&self) -> Sentiment {
        let score = self.overall_score();
        if score < -5.0 {
            Sentiment::VeryNegative
        } else if score < 0.0 {
            Sentiment::Negative
        } else if score == 0.0 {
            Sentiment::Neutral
        } else if score <= 5.0 {
            Sentiment::Positive
        } else {
            Sentiment::VeryPositive
        }
    }
}

impl std::fmt::Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Trust: {}, Respect: {}, Affection: {}, Compatibility: {}",
            self.trust, self.respect, self.affection, self.compatibility
        )
    }
}

fn check_dimension(dimension: &'static str, value: i32) -> Result<i32> {
    if (Quality::DIM_MIN..=Quality::DIM_MAX).contains(&value) {
        Ok(value)
    } else {
        Err(Error::QualityOutOfRange { dimension, value })
    }
}

// ============================================================================
// Tests
// ============================================================================
