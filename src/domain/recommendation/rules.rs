//! Ordered decision tables choosing the best option.
//!
//! Rules are checked top to bottom and the first whose conditions all hold
//! wins. Topic rules come before body-signal rules. When nothing matches,
//! the domain default applies.

use super::options::OptionLabel;
use crate::domain::flow::{SlotCondition, SlotKey, SlotRecord};
use crate::domain::foundation::Domain;

/// A named, ordered tie-break rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestRule {
    pub name: &'static str,
    /// All must hold.
    pub when: Vec<SlotCondition>,
    pub pick: OptionLabel,
}

impl BestRule {
    fn new(name: &'static str, when: Vec<SlotCondition>, pick: OptionLabel) -> Self {
        Self { name, when, pick }
    }

    pub fn matches(&self, slots: &SlotRecord) -> bool {
        self.when.iter().all(|c| c.holds(slots))
    }
}

/// The best option and the rule that picked it (`None` for the default).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub label: OptionLabel,
    pub rule: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionTable {
    pub rules: Vec<BestRule>,
    pub default: OptionLabel,
}

impl DecisionTable {
    pub fn decide(&self, slots: &SlotRecord) -> Decision {
        self.rules
            .iter()
            .find(|rule| rule.matches(slots))
            .map_or(
                Decision {
                    label: self.default,
                    rule: None,
                },
                |rule| Decision {
                    label: rule.pick,
                    rule: Some(rule.name),
                },
            )
    }
}

/// Returns the decision table for a domain, or `None` for `definition`.
pub fn decision_table_for_domain(domain: Domain) -> Option<DecisionTable> {
    match domain {
        Domain::Definition => None,
        Domain::Daily => Some(daily_rules()),
        Domain::Relationship => Some(relationship_rules()),
        Domain::Work => Some(work_rules()),
        Domain::Money => Some(money_rules()),
        Domain::Health => Some(health_rules()),
    }
}

const ACTIVATED_BODY: SlotCondition =
    SlotCondition::new(SlotKey::BodyQuality, &["tight", "heat", "numb"]);

fn relationship_rules() -> DecisionTable {
    use OptionLabel::*;
    let triangle = SlotCondition::new(SlotKey::Pattern, &["triangle"]);
    DecisionTable {
        rules: vec![
            BestRule::new(
                "repeating_triangle",
                vec![triangle, SlotCondition::new(SlotKey::Repeating, &["repeating"])],
                B,
            ),
            BestRule::new(
                "triangle_bystander",
                vec![triangle, SlotCondition::new(SlotKey::Role, &["go_between", "witness"])],
                B,
            ),
            BestRule::new(
                "boundary_pattern",
                vec![SlotCondition::new(SlotKey::Pattern, &["boundary"])],
                C,
            ),
            BestRule::new(
                "truth_distortion_pattern",
                vec![SlotCondition::new(SlotKey::Pattern, &["truth_distortion"])],
                C,
            ),
            BestRule::new(
                "fair_share_pattern",
                vec![SlotCondition::new(SlotKey::Pattern, &["fair_share"])],
                A,
            ),
            BestRule::new(
                "wants_distance",
                vec![SlotCondition::new(SlotKey::Goal, &["distance"])],
                C,
            ),
            BestRule::new(
                "wants_repair_or_clarity",
                vec![SlotCondition::new(SlotKey::Goal, &["repair", "clarity"])],
                A,
            ),
            BestRule::new(
                "activated_body_wants_peace",
                vec![ACTIVATED_BODY, SlotCondition::new(SlotKey::Goal, &["peace"])],
                B,
            ),
        ],
        default: A,
    }
}

fn work_rules() -> DecisionTable {
    use OptionLabel::*;
    DecisionTable {
        rules: vec![
            BestRule::new(
                "too_much_on_plate",
                vec![SlotCondition::new(SlotKey::Scope, &["too_much"])],
                A,
            ),
            BestRule::new(
                "friction",
                vec![SlotCondition::new(SlotKey::Scope, &["conflict"])],
                B,
            ),
            BestRule::new(
                "avoidance",
                vec![SlotCondition::new(SlotKey::Scope, &["avoidance"])],
                C,
            ),
            BestRule::new(
                "unclear_wants_clarity",
                vec![
                    SlotCondition::new(SlotKey::Scope, &["unclear"]),
                    SlotCondition::new(SlotKey::Goal, &["clarity"]),
                ],
                A,
            ),
        ],
        default: A,
    }
}

fn daily_rules() -> DecisionTable {
    use OptionLabel::*;
    DecisionTable {
        rules: vec![
            BestRule::new(
                "phone_pull",
                vec![SlotCondition::new(SlotKey::Disturbance, &["phone"])],
                B,
            ),
            BestRule::new(
                "crowded_head",
                vec![SlotCondition::new(SlotKey::Disturbance, &["pressure", "thoughts"])],
                C,
            ),
            BestRule::new("activated_body", vec![ACTIVATED_BODY], A),
        ],
        default: A,
    }
}

fn money_rules() -> DecisionTable {
    use OptionLabel::*;
    DecisionTable {
        rules: vec![
            BestRule::new(
                "due_this_week",
                vec![
                    SlotCondition::new(SlotKey::Urgency, &["this_week"]),
                    SlotCondition::new(SlotKey::MoneyIssue, &["debt", "bills"]),
                ],
                B,
            ),
            BestRule::new(
                "regretted_spending",
                vec![SlotCondition::new(SlotKey::MoneyIssue, &["spending"])],
                C,
            ),
            BestRule::new(
                "wants_clarity",
                vec![SlotCondition::new(SlotKey::Goal, &["clarity"])],
                A,
            ),
            BestRule::new(
                "income_gap",
                vec![SlotCondition::new(SlotKey::MoneyIssue, &["income"])],
                A,
            ),
            BestRule::new("activated_body", vec![ACTIVATED_BODY], A),
        ],
        default: A,
    }
}

fn health_rules() -> DecisionTable {
    use OptionLabel::*;
    DecisionTable {
        rules: vec![
            BestRule::new(
                "severe",
                vec![SlotCondition::new(SlotKey::Severity, &["severe"])],
                B,
            ),
            BestRule::new(
                "lasting_symptom",
                vec![
                    SlotCondition::new(SlotKey::HealthConcern, &["symptom"]),
                    SlotCondition::new(SlotKey::Duration, &["weeks", "months"]),
                ],
                B,
            ),
            BestRule::new(
                "sleep_or_energy",
                vec![SlotCondition::new(SlotKey::HealthConcern, &["sleep", "energy"])],
                C,
            ),
            BestRule::new(
                "numbness",
                vec![SlotCondition::new(SlotKey::BodyQuality, &["numb"])],
                B,
            ),
            BestRule::new(
                "wants_understanding",
                vec![SlotCondition::new(SlotKey::Goal, &["understand"])],
                A,
            ),
        ],
        default: A,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots(pairs: &[(SlotKey, &str)]) -> SlotRecord {
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    fn decide(domain: Domain, pairs: &[(SlotKey, &str)]) -> Decision {
        decision_table_for_domain(domain).unwrap().decide(&slots(pairs))
    }

    mod relationship {
        use super::*;

        #[test]
        fn repeating_triangle_steps_out() {
            let d = decide(
                Domain::Relationship,
                &[
                    (SlotKey::Pattern, "triangle"),
                    (SlotKey::Role, "witness"),
                    (SlotKey::Repeating, "repeating"),
                    (SlotKey::Goal, "peace"),
                ],
            );
            assert_eq!(d.label, OptionLabel::B);
            assert_eq!(d.rule, Some("repeating_triangle"));
        }

        #[test]
        fn boundary_sets_a_boundary() {
            let d = decide(
                Domain::Relationship,
                &[(SlotKey::Pattern, "boundary"), (SlotKey::Goal, "repair")],
            );
            assert_eq!(d.label, OptionLabel::C);
        }

        #[test]
        fn topic_rules_precede_body_rules() {
            let d = decide(
                Domain::Relationship,
                &[
                    (SlotKey::Pattern, "unclear"),
                    (SlotKey::BodyQuality, "tight"),
                    (SlotKey::Goal, "repair"),
                ],
            );
            assert_eq!(d.rule, Some("wants_repair_or_clarity"));
        }

        #[test]
        fn activated_body_and_peace_steps_out() {
            let d = decide(
                Domain::Relationship,
                &[
                    (SlotKey::Pattern, "overload"),
                    (SlotKey::BodyQuality, "heat"),
                    (SlotKey::Goal, "peace"),
                ],
            );
            assert_eq!(d.label, OptionLabel::B);
        }

        #[test]
        fn falls_back_to_default() {
            let d = decide(Domain::Relationship, &[(SlotKey::Goal, "respect")]);
            assert_eq!(d, Decision { label: OptionLabel::A, rule: None });
        }
    }

    mod work {
        use super::*;

        #[test]
        fn too_much_shrinks_the_load() {
            let d = decide(
                Domain::Work,
                &[
                    (SlotKey::Scope, "too_much"),
                    (SlotKey::Timing, "today"),
                    (SlotKey::BodyLocation, "none"),
                    (SlotKey::BodyQuality, "none"),
                    (SlotKey::Goal, "clarity"),
                ],
            );
            assert_eq!(d.label, OptionLabel::A);
            assert_eq!(d.rule, Some("too_much_on_plate"));
        }

        #[test]
        fn avoidance_starts_ugly() {
            let d = decide(Domain::Work, &[(SlotKey::Scope, "avoidance")]);
            assert_eq!(d.label, OptionLabel::C);
        }
    }

    mod other_domains {
        use super::*;

        #[test]
        fn daily_phone_moves_the_phone() {
            assert_eq!(decide(Domain::Daily, &[(SlotKey::Disturbance, "phone")]).label, OptionLabel::B);
        }

        #[test]
        fn money_due_this_week_makes_a_call() {
            let d = decide(
                Domain::Money,
                &[(SlotKey::Urgency, "this_week"), (SlotKey::MoneyIssue, "bills")],
            );
            assert_eq!(d.label, OptionLabel::B);
        }

        #[test]
        fn money_bills_later_are_not_urgent() {
            let d = decide(
                Domain::Money,
                &[(SlotKey::Urgency, "this_month"), (SlotKey::MoneyIssue, "bills")],
            );
            assert_eq!(d.label, OptionLabel::A);
        }

        #[test]
        fn health_severe_books_a_check_in() {
            let d = decide(
                Domain::Health,
                &[(SlotKey::HealthConcern, "sleep"), (SlotKey::Severity, "severe")],
            );
            assert_eq!(d.rule, Some("severe"));
        }

        #[test]
        fn health_sleep_adjusts_routine() {
            let d = decide(
                Domain::Health,
                &[(SlotKey::HealthConcern, "sleep"), (SlotKey::Severity, "mild")],
            );
            assert_eq!(d.label, OptionLabel::C);
        }
    }

    #[test]
    fn rule_names_are_unique_within_each_table() {
        for &domain in Domain::flow_domains() {
            let table = decision_table_for_domain(domain).unwrap();
            let mut names: Vec<&str> = table.rules.iter().map(|r| r.name).collect();
            let total = names.len();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), total, "duplicate rule name in {}", domain);
        }
    }
}
