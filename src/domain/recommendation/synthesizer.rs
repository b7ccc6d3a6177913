//! Turns a completed slot record into a rendered recommendation.

use std::fmt::Write as _;

use super::options::{options_for_domain, OptionLabel, OptionRecord};
use super::rules::decision_table_for_domain;
use crate::domain::flow::{FlowTable, SlotKey, SlotRecord, NONE, NOT_SURE};
use crate::domain::foundation::{Domain, Pattern};

const HEADER: &str = "Here's what I heard.";

const NOT_SURE_GUARDRAIL: &str = "Some answers were \"not sure\". That's fine: \
start with the smallest step and notice what you learn.";

const HEALTH_FOOTER: &str = "If this feels severe or keeps getting worse, \
contact a doctor or your local emergency number.";

const DISCLAIMER: &str = "This is a reflection aid, not professional advice.";

/// A synthesized recommendation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub domain: Domain,
    pub options: [OptionRecord; 3],
    pub best: OptionLabel,
    /// Name of the rule that picked `best`, `None` for the domain default.
    pub decided_by: Option<&'static str>,
    pub text: String,
}

impl Recommendation {
    pub fn best_option(&self) -> &OptionRecord {
        // options are always labeled A, B, C in order
        match self.best {
            OptionLabel::A => &self.options[0],
            OptionLabel::B => &self.options[1],
            OptionLabel::C => &self.options[2],
        }
    }
}

/// Builds recommendations from completed flows.
#[derive(Debug, Clone)]
pub struct Synthesizer {
    flows: FlowTable,
    cost_projection: bool,
}

impl Synthesizer {
    pub fn new(flows: FlowTable, cost_projection: bool) -> Self {
        Self {
            flows,
            cost_projection,
        }
    }

    /// Picks the best option and renders the response text.
    ///
    /// Returns `None` only for domains without options (`definition`).
    pub fn synthesize(&self, domain: Domain, slots: &SlotRecord) -> Option<Recommendation> {
        let options = options_for_domain(domain)?;
        let decision = decision_table_for_domain(domain)?.decide(slots);

        let mut recommendation = Recommendation {
            domain,
            options,
            best: decision.label,
            decided_by: decision.rule,
            text: String::new(),
        };
        recommendation.text = self.render(&recommendation, slots);

        tracing::debug!(
            domain = domain.key(),
            best = %recommendation.best,
            rule = recommendation.decided_by.unwrap_or("default"),
            "Synthesized recommendation"
        );
        Some(recommendation)
    }

    fn render(&self, rec: &Recommendation, slots: &SlotRecord) -> String {
        let mut out = String::new();

        out.push_str(HEADER);
        if let Some(answers) = self.restate(rec.domain, slots) {
            let _ = write!(out, " {}", answers);
        }
        if let Some(pattern) = slots
            .get(&SlotKey::Pattern)
            .and_then(|value| Pattern::from_slot_value(value))
            .filter(|p| *p != Pattern::Unclear)
        {
            let _ = write!(out, " This looks like {}.", pattern.description());
        }
        out.push('\n');

        if let Some(cost) = self.cost_projection(slots) {
            let _ = writeln!(out, "\nIf nothing changes, this will likely keep costing you {}.", cost);
        }

        if slots.values().any(|v| v == NOT_SURE) {
            let _ = writeln!(out, "\n{}", NOT_SURE_GUARDRAIL);
        }

        for option in &rec.options {
            let marker = if option.label == rec.best {
                " (most balanced)"
            } else {
                ""
            };
            let _ = writeln!(out, "\nOption {}: {}{}", option.label, option.title, marker);
            let _ = writeln!(out, "  {}", option.steps.join(" → "));
            let _ = writeln!(out, "  Cost: {}", option.cost);
        }

        let best = rec.best_option();
        let _ = writeln!(
            out,
            "\nWhy {} is usually most balanced: {}",
            best.label, best.rationale
        );
        let _ = writeln!(out, "Tiny move: {}", best.tiny_move);

        if rec.domain == Domain::Health {
            let _ = writeln!(out, "\n{}", HEALTH_FOOTER);
        }

        let _ = write!(out, "\n{}", DISCLAIMER);
        out
    }

    /// One sentence restating the answered steps in flow order, e.g.
    /// `You answered "Today" for when and "Peace" for what you want.`
    ///
    /// Skipped slots and the derived pattern are left out.
    fn restate(&self, domain: Domain, slots: &SlotRecord) -> Option<String> {
        let flow = self.flows.get(domain)?;

        let clauses: Vec<String> = flow
            .steps
            .iter()
            .filter_map(|step| {
                let value = slots.get(&step.slot)?;
                if value == NONE {
                    return None;
                }
                Some(format!(
                    "\"{}\" for {}",
                    step.label_of(value),
                    step.slot.label().to_lowercase()
                ))
            })
            .collect();

        let (last, rest) = clauses.split_last()?;
        let listed = if rest.is_empty() {
            last.clone()
        } else {
            format!("{} and {}", rest.join(", "), last)
        };
        Some(format!("You answered {}.", listed))
    }

    fn cost_projection(&self, slots: &SlotRecord) -> Option<&'static str> {
        if !self.cost_projection {
            return None;
        }
        match slots.get(&SlotKey::Cost)?.as_str() {
            "sleep" => Some("sleep"),
            "relationships" => Some("strain in your relationships"),
            "options" => Some("fewer options"),
            "health" => Some("your health"),
            _ => None,
        }
    }
}
