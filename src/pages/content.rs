//! Static content of the Home, Model and Workflow pages.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Card {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: &'static str,
    pub intro: Option<&'static str>,
    pub cards: &'static [Card],
}

const fn card(title: &'static str, description: &'static str) -> Card {
    Card { title, description }
}

pub const HOME: &[Section] = &[
    Section {
        title: "ESG Components",
        intro: None,
        cards: &[
            card(
                "Environmental",
                "Evaluate environmental impact, resource usage, and sustainability initiatives.",
            ),
            card(
                "Social",
                "Assess social responsibility, community engagement, labor practices, and human rights.",
            ),
            card(
                "Governance",
                "Analyze corporate governance structures, ethics policies, and compliance frameworks.",
            ),
        ],
    },
    Section {
        title: "Why Choose Our Platform",
        intro: None,
        cards: &[
            card("Advanced Analytics", "Algorithmic and machine-learning models for precise ESG analysis."),
            card("Real-time Insights", "Up-to-date ESG metrics through a live dashboard."),
            card("Comprehensive Reports", "Detailed reports with actionable recommendations."),
            card("Industry Benchmarking", "Compare performance against industry standards and peers."),
            card("Data Security", "Sensitive documents stay protected end to end."),
            card("Expert Support", "ESG specialists available for guidance and consultation."),
        ],
    },
];

pub const MODEL: &[Section] = &[
    Section {
        title: "Model Architecture",
        intro: Some(
            "Machine learning and natural language processing turn sustainability reports into ESG insight.",
        ),
        cards: &[
            card(
                "Natural Language Processing",
                "Extracts ESG facts from report text and tables.",
            ),
            card(
                "Data Processing",
                "A multi-stage pipeline keeps results consistent across document types.",
            ),
            card(
                "Scoring System",
                "Scores companies across more than fifty metrics aligned with global standards.",
            ),
            card("Trend Analysis", "Tracks ESG performance across reporting periods."),
        ],
    },
    Section {
        title: "Key Features",
        intro: None,
        cards: &[
            card("Real-time Processing", "Uploaded documents are analyzed as soon as they arrive."),
            card("Multi-framework Support", "Works with GRI, SASB and TCFD disclosures."),
            card("Customizable Metrics", "Scoring adapts to industry requirements and priorities."),
            card("Automated Reporting", "Breakdowns and recommendations generated per company."),
        ],
    },
    Section {
        title: "Our Methodology",
        intro: None,
        cards: &[
            card("Data Collection", "Company reports, news and regulatory filings."),
            card("Analysis & Processing", "Machine learning and NLP over the collected text."),
            card("Scoring & Reporting", "Scores and insights per environmental, social and governance pillar."),
        ],
    },
];

pub const WORKFLOW: &[Section] = &[
    Section {
        title: "Technical Details",
        intro: Some("An AI backend extracts and scores ESG data from published reports."),
        cards: &[
            card("AI-Powered Backend", "Deep ESG data extraction and analysis."),
            card("BERT Integration", "Language-model processing of report text."),
            card("Comprehensive Scoring", "ESG assessment tailored to the financial sector."),
            card("Dual Verification", "Human and model review for higher data accuracy."),
        ],
    },
    Section {
        title: "Workflow",
        intro: None,
        cards: &[
            card("Batch Download", "Finds and downloads ESG reports by keyword, logging each step."),
            card("PDF Parse", "Converts PDFs to Markdown, keeping tables and charts."),
            card("Data Clean", "Normalizes tables, units and text in the Markdown."),
            card("Data Retrieve", "Answers metric questions from very long reports."),
            card("Text Annotate", "Labels text spans into structured JSON."),
        ],
    },
];
