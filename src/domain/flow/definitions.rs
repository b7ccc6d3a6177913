//! The shipped flow for each life domain.

use super::sequence::Flow;
use super::step::{Choice, Skip, Step};
use super::values::{SlotKey, NONE, NOT_SURE};
use crate::domain::foundation::Domain;

/// Returns the flow for a domain, or `None` for `definition`.
pub fn flow_for_domain(domain: Domain) -> Option<Flow> {
    match domain {
        Domain::Definition => None,
        Domain::Daily => Some(daily_flow()),
        Domain::Relationship => Some(relationship_flow()),
        Domain::Work => Some(work_flow()),
        Domain::Money => Some(money_flow()),
        Domain::Health => Some(health_flow()),
    }
}

fn relationship_flow() -> Flow {
    Flow {
        domain: Domain::Relationship,
        intro: "Let's slow this down before deciding anything.",
        steps: vec![
            Step {
                id: "time",
                slot: SlotKey::Time,
                prompt: "When did this happen?",
                choices: vec![
                    Choice::new("today", "Today"),
                    Choice::new("yesterday", "Yesterday"),
                    Choice::new("this_week", "Earlier this week"),
                    Choice::new("a_while_ago", "A while ago"),
                ],
                skip: None,
            },
            Step {
                id: "role",
                slot: SlotKey::Role,
                prompt: "What was your part in it?",
                choices: vec![
                    Choice::new("participant", "I was in it"),
                    Choice::new("witness", "I watched it happen"),
                    Choice::new("go_between", "I was stuck in the middle"),
                    Choice::new("target", "It was aimed at me"),
                ],
                skip: None,
            },
            Step {
                id: "repeating",
                slot: SlotKey::Repeating,
                prompt: "Has this happened before?",
                choices: vec![
                    Choice::new("one_time", "This was a one-off"),
                    Choice::new("repeating", "It keeps happening"),
                    Choice::new(NOT_SURE, "Not sure"),
                ],
                skip: None,
            },
            body_location_step(),
            body_quality_step(),
            Step {
                id: "goal",
                slot: SlotKey::Goal,
                prompt: "What do you want most from this?",
                choices: vec![
                    Choice::new("peace", "Peace"),
                    Choice::new("respect", "Respect"),
                    Choice::new("clarity", "Clarity"),
                    Choice::new("distance", "Some distance"),
                    Choice::new("repair", "Repair things"),
                ],
                skip: None,
            },
        ],
        derived: vec![SlotKey::Pattern],
    }
}

fn work_flow() -> Flow {
    Flow {
        domain: Domain::Work,
        intro: "Work stress. Let's get specific before fixing anything.",
        steps: vec![
            Step {
                id: "scope",
                slot: SlotKey::Scope,
                prompt: "What's weighing on you most at work?",
                choices: vec![
                    Choice::new("too_much", "Too much on my plate"),
                    Choice::new("unclear", "Not sure what's expected"),
                    Choice::new("conflict", "Friction with someone"),
                    Choice::new("avoidance", "I keep putting something off"),
                ],
                skip: None,
            },
            Step {
                id: "timing",
                slot: SlotKey::Timing,
                prompt: "How urgent is it?",
                choices: vec![
                    Choice::new("today", "It has to happen today"),
                    Choice::new("this_week", "This week"),
                    Choice::new("ongoing", "It's been going on a while"),
                ],
                skip: None,
            },
            body_location_step(),
            body_quality_step(),
            Step {
                id: "goal",
                slot: SlotKey::Goal,
                prompt: "What would help most right now?",
                choices: vec![
                    Choice::new("clarity", "Clarity"),
                    Choice::new("energy", "Energy"),
                    Choice::new("calm", "Calm"),
                    Choice::new("progress", "Progress"),
                ],
                skip: None,
            },
        ],
        derived: vec![],
    }
}

fn daily_flow() -> Flow {
    Flow {
        domain: Domain::Daily,
        intro: "Let's look at the day you're actually having.",
        steps: vec![
            Step {
                id: "time",
                slot: SlotKey::Time,
                prompt: "When is it hardest?",
                choices: vec![
                    Choice::new("morning", "Morning"),
                    Choice::new("afternoon", "Afternoon"),
                    Choice::new("evening", "Evening"),
                    Choice::new("night", "Night"),
                ],
                skip: None,
            },
            Step {
                id: "disturbance",
                slot: SlotKey::Disturbance,
                prompt: "What pulls you off track most?",
                choices: vec![
                    Choice::new("phone", "My phone"),
                    Choice::new("pressure", "Time pressure"),
                    Choice::new("thoughts", "Racing thoughts"),
                    Choice::new("tired", "Being tired"),
                    Choice::new(NOT_SURE, "Not sure"),
                ],
                skip: None,
            },
            body_location_step(),
            body_quality_step(),
            Step {
                id: "goal",
                slot: SlotKey::Goal,
                prompt: "What do you want more of today?",
                choices: vec![
                    Choice::new("calm", "Calm"),
                    Choice::new("focus", "Focus"),
                    Choice::new("energy", "Energy"),
                    Choice::new("rest", "Rest"),
                ],
                skip: None,
            },
        ],
        derived: vec![],
    }
}

fn money_flow() -> Flow {
    Flow {
        domain: Domain::Money,
        intro: "Money worries are loud. Let's make this one concrete.",
        steps: vec![
            Step {
                id: "money_issue",
                slot: SlotKey::MoneyIssue,
                prompt: "What's the money worry?",
                choices: vec![
                    Choice::new("debt", "Debt"),
                    Choice::new("bills", "Bills coming due"),
                    Choice::new("spending", "Spending I regret"),
                    Choice::new("income", "Not enough coming in"),
                    Choice::new("conflict", "Arguing about money"),
                ],
                skip: None,
            },
            Step {
                id: "urgency",
                slot: SlotKey::Urgency,
                prompt: "How soon does it bite?",
                choices: vec![
                    Choice::new("this_week", "This week"),
                    Choice::new("this_month", "This month"),
                    Choice::new("ongoing", "It's ongoing"),
                ],
                skip: None,
            },
            Step {
                id: "cost",
                slot: SlotKey::Cost,
                prompt: "What is it costing you besides money?",
                choices: vec![
                    Choice::new("sleep", "Sleep"),
                    Choice::new("relationships", "My relationships"),
                    Choice::new("options", "My options"),
                    Choice::new("health", "My health"),
                    Choice::new(NOT_SURE, "Not sure"),
                ],
                skip: None,
            },
            body_location_step(),
            body_quality_step(),
            Step {
                id: "goal",
                slot: SlotKey::Goal,
                prompt: "What would feel like progress?",
                choices: vec![
                    Choice::new("stability", "Stability"),
                    Choice::new("clarity", "Knowing where I stand"),
                    Choice::new("relief", "Some relief"),
                    Choice::new("plan", "A plan"),
                ],
                skip: None,
            },
        ],
        derived: vec![],
    }
}

fn health_flow() -> Flow {
    Flow {
        domain: Domain::Health,
        intro: "Let's take stock of how you're doing. This is reflection, not medical advice.",
        steps: vec![
            Step {
                id: "health_concern",
                slot: SlotKey::HealthConcern,
                prompt: "What's going on?",
                choices: vec![
                    Choice::new("pain", "Pain"),
                    Choice::new("sleep", "Sleep"),
                    Choice::new("energy", "Low energy"),
                    Choice::new("stress", "Stress"),
                    Choice::new("symptom", "A new symptom"),
                ],
                skip: None,
            },
            Step {
                id: "duration",
                slot: SlotKey::Duration,
                prompt: "How long has it been going on?",
                choices: vec![
                    Choice::new("days", "A few days"),
                    Choice::new("weeks", "Weeks"),
                    Choice::new("months", "Months"),
                ],
                skip: None,
            },
            Step {
                id: "severity",
                slot: SlotKey::Severity,
                prompt: "How much is it getting in the way?",
                choices: vec![
                    Choice::new("mild", "A little"),
                    Choice::new("moderate", "Quite a bit"),
                    Choice::new("severe", "A lot"),
                ],
                skip: None,
            },
            body_location_step(),
            body_quality_step(),
            Step {
                id: "goal",
                slot: SlotKey::Goal,
                prompt: "What do you want from this?",
                choices: vec![
                    Choice::new("understand", "Understand it"),
                    Choice::new("relief", "Get relief"),
                    Choice::new("routine", "A better routine"),
                    Choice::new("reassurance", "Reassurance"),
                ],
                skip: None,
            },
        ],
        derived: vec![],
    }
}

/// Shared body-signal question. "Nothing" skips the quality question.
fn body_location_step() -> Step {
    Step {
        id: "body_location",
        slot: SlotKey::BodyLocation,
        prompt: "Where do you notice it in your body right now?",
        choices: vec![
            Choice::new("chest", "Chest"),
            Choice::new("stomach", "Stomach"),
            Choice::new("throat", "Throat"),
            Choice::new("head", "Head"),
            Choice::new("shoulders", "Shoulders"),
            Choice::new(NONE, "I don't notice anything"),
        ],
        skip: Some(Skip {
            when: &[NONE],
            to: "goal",
        }),
    }
}

fn body_quality_step() -> Step {
    Step {
        id: "body_quality",
        slot: SlotKey::BodyQuality,
        prompt: "What does it feel like?",
        choices: vec![
            Choice::new("tight", "Tight"),
            Choice::new("heavy", "Heavy"),
            Choice::new("heat", "Hot"),
            Choice::new("numb", "Numb"),
            Choice::new("shaky", "Shaky"),
            Choice::new(NOT_SURE, "Not sure"),
        ],
        skip: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_flow_domain_has_a_valid_flow() {
        for &domain in Domain::flow_domains() {
            let flow = flow_for_domain(domain).unwrap();
            assert_eq!(flow.domain, domain);
            flow.validate().unwrap();
        }
    }

    #[test]
    fn definition_has_no_flow() {
        assert!(flow_for_domain(Domain::Definition).is_none());
    }

    #[test]
    fn relationship_collects_the_documented_slots() {
        let flow = flow_for_domain(Domain::Relationship).unwrap();
        let slots: Vec<SlotKey> = flow.required_slots().collect();
        assert_eq!(
            slots,
            vec![
                SlotKey::Time,
                SlotKey::Role,
                SlotKey::Repeating,
                SlotKey::BodyLocation,
                SlotKey::BodyQuality,
                SlotKey::Goal,
                SlotKey::Pattern,
            ]
        );
    }

    #[test]
    fn no_body_signal_skips_quality_in_every_flow() {
        for &domain in Domain::flow_domains() {
            let flow = flow_for_domain(domain).unwrap();
            let adv = flow.advance("body_location", NONE);
            assert_eq!(adv.next.map(|s| s.id), Some("goal"));
            assert_eq!(adv.skipped.len(), 1);
            assert_eq!(adv.skipped[0].slot, SlotKey::BodyQuality);
        }
    }

    #[test]
    fn every_flow_ends_on_goal() {
        for &domain in Domain::flow_domains() {
            let flow = flow_for_domain(domain).unwrap();
            assert_eq!(flow.steps.last().map(|s| s.slot), Some(SlotKey::Goal));
        }
    }
}
