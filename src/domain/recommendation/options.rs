//! The three fixed options offered in each domain.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Domain;

/// Option label. Exactly three per recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OptionLabel {
    A,
    B,
    C,
}

impl OptionLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }
}

impl fmt::Display for OptionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One option of a recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionRecord {
    pub label: OptionLabel,
    pub title: &'static str,
    /// Ordered step descriptions, rendered arrow-joined.
    pub steps: &'static [&'static str],
    pub cost: &'static str,
    /// Why this option is balanced when it is picked as best.
    pub rationale: &'static str,
    /// Smallest concrete action that starts this option.
    pub tiny_move: &'static str,
}

/// Returns the options for a domain, or `None` for `definition`.
pub fn options_for_domain(domain: Domain) -> Option<[OptionRecord; 3]> {
    match domain {
        Domain::Definition => None,
        Domain::Daily => Some(daily_options()),
        Domain::Relationship => Some(relationship_options()),
        Domain::Work => Some(work_options()),
        Domain::Money => Some(money_options()),
        Domain::Health => Some(health_options()),
    }
}

fn relationship_options() -> [OptionRecord; 3] {
    [
        OptionRecord {
            label: OptionLabel::A,
            title: "Name it once, calmly",
            steps: &[
                "Pick a quiet moment",
                "Say what you saw in one sentence",
                "Ask what they need",
            ],
            cost: "Risks a tense conversation.",
            rationale: "it deals with the issue directly without raising the temperature.",
            tiny_move: "Write down the one sentence you would say, and nothing more.",
        },
        OptionRecord {
            label: OptionLabel::B,
            title: "Step out of the middle",
            steps: &[
                "Stop carrying messages",
                "Tell each person to talk to the other",
                "Stay kind to both",
            ],
            cost: "Someone may feel you picked a side.",
            rationale: "it hands the conflict back to the people who own it, so you stop absorbing it.",
            tiny_move: "Next time one of them vents about the other, say: \"I think you should tell them that.\"",
        },
        OptionRecord {
            label: OptionLabel::C,
            title: "Set a small boundary",
            steps: &[
                "Name the line",
                "Say what you will do if it's crossed",
                "Follow through once",
            ],
            cost: "Feels uncomfortable at first.",
            rationale: "it protects your footing without waiting for the other person to change.",
            tiny_move: "Finish this sentence privately: \"From now on, I will...\"",
        },
    ]
}

fn work_options() -> [OptionRecord; 3] {
    [
        OptionRecord {
            label: OptionLabel::A,
            title: "Shrink the load",
            steps: &[
                "List everything on your plate",
                "Circle the one that matters today",
                "Defer or drop one item",
            ],
            cost: "Some things will wait longer.",
            rationale: "less on the plate makes every other move easier, and it needs nobody's permission.",
            tiny_move: "Write down the three things due soonest and cross one off for today.",
        },
        OptionRecord {
            label: OptionLabel::B,
            title: "Clear the air",
            steps: &[
                "Name the friction to yourself",
                "Ask for ten minutes",
                "Agree on one next step",
            ],
            cost: "A short, awkward conversation.",
            rationale: "one direct conversation usually costs less than weeks of quiet tension.",
            tiny_move: "Send a one-line message asking for ten minutes this week.",
        },
        OptionRecord {
            label: OptionLabel::C,
            title: "Start ugly",
            steps: &[
                "Pick the task you keep avoiding",
                "Set a ten-minute timer",
                "Produce a rough first pass",
            ],
            cost: "The first draft will be bad.",
            rationale: "momentum beats polish when avoidance is the real blocker.",
            tiny_move: "Open the file and work on it for ten minutes.",
        },
    ]
}

fn daily_options() -> [OptionRecord; 3] {
    [
        OptionRecord {
            label: OptionLabel::A,
            title: "Anchor the body first",
            steps: &[
                "Stand up and breathe slowly",
                "Drink a glass of water",
                "Pick the next small task",
            ],
            cost: "Two minutes that feel unproductive.",
            rationale: "a settled body makes the rest of the day easier to steer.",
            tiny_move: "Take five slow breaths with your feet flat on the floor.",
        },
        OptionRecord {
            label: OptionLabel::B,
            title: "Put the phone out of reach",
            steps: &[
                "Silence notifications",
                "Move the phone to another room",
                "Check it at a set time",
            ],
            cost: "You may miss something for a while.",
            rationale: "removing the biggest pull costs little and frees attention right away.",
            tiny_move: "Put your phone in another room for the next thirty minutes.",
        },
        OptionRecord {
            label: OptionLabel::C,
            title: "Unload the head",
            steps: &[
                "Write every open loop down",
                "Pick one to act on",
                "Park the rest for later",
            ],
            cost: "Seeing the whole list can sting.",
            rationale: "pressure shrinks once it lives on paper instead of in your head.",
            tiny_move: "Set a timer for three minutes and write down everything on your mind.",
        },
    ]
}

fn money_options() -> [OptionRecord; 3] {
    [
        OptionRecord {
            label: OptionLabel::A,
            title: "See the full picture",
            steps: &[
                "List what comes in",
                "List what goes out",
                "Mark the one number that scares you",
            ],
            cost: "An uncomfortable hour with the numbers.",
            rationale: "decisions get easier once the numbers stop being a fog.",
            tiny_move: "Open your banking app and write down your current balance.",
        },
        OptionRecord {
            label: OptionLabel::B,
            title: "Make one call",
            steps: &[
                "Pick the most urgent bill or debt",
                "Call and ask about options",
                "Write down what they offer",
            ],
            cost: "An awkward phone call.",
            rationale: "lenders and billers often have options, but only if you ask before the deadline.",
            tiny_move: "Find the phone number for the most urgent bill and save it.",
        },
        OptionRecord {
            label: OptionLabel::C,
            title: "Plug one leak",
            steps: &[
                "Find the spending you regret most",
                "Cancel or pause it",
                "Move that money somewhere safe",
            ],
            cost: "Giving up something you enjoy.",
            rationale: "one stopped leak is a real win you can build on.",
            tiny_move: "Cancel one subscription or recurring charge today.",
        },
    ]
}

fn health_options() -> [OptionRecord; 3] {
    [
        OptionRecord {
            label: OptionLabel::A,
            title: "Track it for three days",
            steps: &[
                "Note when it shows up",
                "Note what helps or hurts",
                "Look for a pattern",
            ],
            cost: "A little attention each day.",
            rationale: "notes turn a vague worry into something you can understand or show a professional.",
            tiny_move: "Write today's date and one line about how you feel right now.",
        },
        OptionRecord {
            label: OptionLabel::B,
            title: "Book a check-in",
            steps: &[
                "Choose a doctor or clinic",
                "Write down your main questions",
                "Book the earliest slot",
            ],
            cost: "Time, and possibly money.",
            rationale: "when something is severe or lasting, a professional opinion is the safest next step.",
            tiny_move: "Look up the number for your doctor or clinic and save it.",
        },
        OptionRecord {
            label: OptionLabel::C,
            title: "Adjust one routine",
            steps: &[
                "Pick one habit to change",
                "Make it small enough for today",
                "Keep it for a week",
            ],
            cost: "Results take a while to show.",
            rationale: "small routine changes are often what moves sleep and energy.",
            tiny_move: "Set a reminder for a fixed bedtime tonight.",
        },
    ]
}
