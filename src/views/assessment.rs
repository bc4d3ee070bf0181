//! Written assessment shown next to the overall score: advice per rating and per pillar.

use serde::Serialize;

use crate::scores::{EsgScoreRecord, Pillar, Rating};

/// Standing of one pillar score on the 0..=10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DimensionLevel {
    Excellent,
    Good,
    ToBeImproved,
}

impl DimensionLevel {
    /// `Excellent` for 6..=10, `Good` for 3..6, `ToBeImproved` otherwise (including above 10).
    pub fn of(score: f64) -> Self {
        if (6.0..=10.0).contains(&score) {
            Self::Excellent
        } else if (3.0..6.0).contains(&score) {
            Self::Good
        } else {
            Self::ToBeImproved
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::ToBeImproved => "To be improved",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionAssessment {
    pub pillar: Pillar,
    pub score: f64,
    pub level: DimensionLevel,
    pub advice: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub rating: Rating,
    /// `None` when the record carries no recognizable rating.
    pub overall_advice: Option<&'static str>,
    pub dimensions: Vec<DimensionAssessment>,
    /// The highest-scoring pillar; ties go to Environmental, then Social.
    pub best: Pillar,
    pub praise: &'static str,
}

pub fn rating_advice(rating: &Rating) -> Option<&'static str> {
    Some(match rating {
        Rating::AAA => {
            "The company excels in ESG, setting a high benchmark for sustainability and social responsibility. Its proactive approach and commitment to green investment are commendable. Keep the momentum while improving transparency and exploring new ESG initiatives to consolidate industry leadership."
        }
        Rating::AA => {
            "The company shows strong ESG performance at industry-leading standards, with room to grow. Strengthening internal governance, especially environmental management and social responsibility, and aligning more closely with international best practice will increase its impact."
        }
        Rating::A => {
            "The company has made solid ESG progress, with opportunities in key areas. More investment in environmental programs, better corporate governance and clearer communication with stakeholders will lift its ESG performance."
        }
        Rating::BBB => {
            "The company shows good ESG potential with several areas to improve. Focus on environmental protection, broader social responsibility programs and governance refinements around transparency and compliance."
        }
        Rating::BB => {
            "The company has room to grow in ESG. A comprehensive assessment followed by targeted action on environmental management, social responsibility and governance practice will drive real improvement."
        }
        Rating::B => {
            "The company has significant opportunities to improve. Start a comprehensive ESG reform plan that builds robust systems for environmental management, social responsibility and governance to reduce risk."
        }
        Rating::CCC => {
            "The company faces considerable ESG challenges. Prioritize developing and implementing an ESG improvement plan focused on environmental practice, labor rights and governance frameworks."
        }
        Rating::Unrated(_) => return None,
    })
}

pub fn dimension_advice(pillar: Pillar, score: f64) -> &'static str {
    match pillar {
        Pillar::Environmental if score >= 6.0 => {
            "The environmental score reflects an outstanding commitment to sustainability and responsible resource management. Keep building on it with new green initiatives that extend the company's environmental leadership."
        }
        Pillar::Environmental if score >= 3.0 => {
            "The environmental score is solid. There is room to invest further in advanced technology and more sustainable practices."
        }
        Pillar::Environmental => {
            "Environmental performance can improve significantly. Focus on energy reduction, waste management and transparency of environmental practice."
        }
        Pillar::Social if score >= 6.0 => {
            "The company shows a strong commitment to social responsibility and employee welfare. Expanding these efforts will sustain long-term positive impact."
        }
        Pillar::Social if score >= 3.0 => {
            "Social responsibility is progressing; improving employee health and safety and addressing key social issues will strengthen the company's standing."
        }
        Pillar::Social => {
            "Social responsibility efforts can grow considerably. Prioritize staff training and support for underserved communities."
        }
        Pillar::Governance if score >= 6.0 => {
            "Governance is excellent, with a well-established structure and strong policies. Maintain these standards while continuing to innovate."
        }
        Pillar::Governance if score >= 3.0 => {
            "The governance structure is generally sound. Improve transparency, internal controls and the compliance framework."
        }
        Pillar::Governance => {
            "Governance practice needs strengthening. Focus on internal controls, board independence and information disclosure."
        }
    }
}

fn praise_for(pillar: Pillar) -> &'static str {
    match pillar {
        Pillar::Environmental => {
            "The company is to be commended for its environmental performance, with clear leadership in areas such as energy consumption and waste management."
        }
        Pillar::Social => {
            "The company is to be commended for its social responsibility, showing real care for its employees, the community and society as a whole."
        }
        Pillar::Governance => {
            "The company is to be commended for its governance: transparent decision-making, a well-defined structure and an efficient management team earn stakeholder trust."
        }
    }
}

pub fn assess(record: &EsgScoreRecord) -> Assessment {
    let dimensions = Pillar::ALL
        .into_iter()
        .map(|pillar| {
            let score = record.pillar(pillar);
            DimensionAssessment {
                pillar,
                score,
                level: DimensionLevel::of(score),
                advice: dimension_advice(pillar, score),
            }
        })
        .collect();

    // First maximum wins, which gives the Environmental > Social > Governance tie order.
    let best = Pillar::ALL
        .into_iter()
        .fold(Pillar::Environmental, |best, p| {
            if record.pillar(p) > record.pillar(best) {
                p
            } else {
                best
            }
        });

    Assessment {
        rating: record.rating.clone(),
        overall_advice: rating_advice(&record.rating),
        dimensions,
        best,
        praise: praise_for(best),
    }
}
