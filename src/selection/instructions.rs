//! Instruction synthesis
//!
//! Renders the four category decisions into the natural-language instruction
//! block embedded verbatim into the downstream prompt. Always exactly one
//! line per category, in the fixed order weather, events, trends, cultural,
//! so the prompt builder can rely on the shape.

use crate::category::{CategoryDecision, CategoryDecisions, CategoryPriority, SignalCategory};

/// Render the decisions as a four-line instruction block.
pub fn synthesize_instructions(decisions: &CategoryDecisions) -> String {
    SignalCategory::ORDERED
        .iter()
        .map(|&category| category_line(category, decisions.get(category)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn category_line(category: SignalCategory, decision: &CategoryDecision) -> String {
    let (label, subject) = match category {
        SignalCategory::Weather => ("Weather", "current weather conditions"),
        SignalCategory::Events => ("Events", "local events"),
        SignalCategory::Trends => ("Trends", "trending topics"),
        SignalCategory::Cultural => ("Cultural", "local cultural context"),
    };

    if !decision.use_category || decision.priority == CategoryPriority::Ignore {
        return format!("{label}: skip {subject}; do not reference them in the content.");
    }

    match decision.priority {
        CategoryPriority::High => {
            format!("{label}: integrate {subject} prominently throughout the content.")
        }
        CategoryPriority::Medium => {
            format!("{label}: mention {subject} where they naturally add value.")
        }
        CategoryPriority::Low | CategoryPriority::Ignore => {
            format!("{label}: reference {subject} subtly, and only if they add value.")
        }
    }
}
