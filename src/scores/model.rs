use std::fmt;

use serde::{Serialize, Serializer};

/// Letter rating assigned by the backend scoring engine, best first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[allow(clippy::upper_case_acronyms)]
pub enum Rating {
    AAA,
    AA,
    A,
    BBB,
    BB,
    B,
    CCC,
    /// Missing, blank, or a grade outside the AAA..CCC scale (kept verbatim).
    Unrated(String),
}

impl Rating {
    /// Parses a letter rating, case-insensitively.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "AAA" => Self::AAA,
            "AA" => Self::AA,
            "A" => Self::A,
            "BBB" => Self::BBB,
            "BB" => Self::BB,
            "B" => Self::B,
            "CCC" => Self::CCC,
            _ => Self::Unrated(raw.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::AAA => "AAA",
            Self::AA => "AA",
            Self::A => "A",
            Self::BBB => "BBB",
            Self::BB => "BB",
            Self::B => "B",
            Self::CCC => "CCC",
            Self::Unrated(s) => s,
        }
    }

    pub const fn is_rated(&self) -> bool {
        !matches!(self, Self::Unrated(_))
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// The three scoring pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Pillar {
    Environmental,
    Social,
    Governance,
}

impl Pillar {
    pub const ALL: [Self; 3] = [Self::Environmental, Self::Social, Self::Governance];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Environmental => "Environmental",
            Self::Social => "Social",
            Self::Governance => "Governance",
        }
    }
}

/// A flat ESG score row: overall score, letter rating, and per-pillar sub-scores.
///
/// Numeric fields missing from the backend row are `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EsgScoreRecord {
    /// Company the row belongs to, when the backend includes it.
    pub company: Option<String>,
    /// Reporting period label (usually a year), when present.
    pub period: Option<String>,
    /// Total ESG score.
    pub total: f64,
    /// Letter rating.
    pub rating: Rating,
    /// Environmental pillar score.
    pub environmental: f64,
    /// Social pillar score.
    pub social: f64,
    /// Governance pillar score.
    pub governance: f64,
}

impl EsgScoreRecord {
    /// The sub-score for one pillar.
    pub const fn pillar(&self, pillar: Pillar) -> f64 {
        match pillar {
            Pillar::Environmental => self.environmental,
            Pillar::Social => self.social,
            Pillar::Governance => self.governance,
        }
    }
}
