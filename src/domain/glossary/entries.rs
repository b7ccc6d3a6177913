//! Static glossary content.

/// One glossary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlossaryEntry {
    /// Display name of the term.
    pub name: &'static str,
    /// Lower-case keys matched as whole words in normalized text.
    pub keys: &'static [&'static str],
    pub definition: &'static str,
}

/// All glossary entries, in lookup order.
pub const GLOSSARY: &[GlossaryEntry] = &[
    GlossaryEntry {
        name: "Ma'at",
        keys: &["ma'at", "maat"],
        definition: MAAT,
    },
    GlossaryEntry {
        name: "Isfet",
        keys: &["isfet"],
        definition: ISFET,
    },
    GlossaryEntry {
        name: "Weighing of the Heart",
        keys: &["weighing of the heart"],
        definition: WEIGHING,
    },
    GlossaryEntry {
        name: "The Feather",
        keys: &["feather"],
        definition: FEATHER,
    },
    GlossaryEntry {
        name: "Thoth",
        keys: &["thoth", "djehuty"],
        definition: THOTH,
    },
    GlossaryEntry {
        name: "Ammit",
        keys: &["ammit"],
        definition: AMMIT,
    },
    GlossaryEntry {
        name: "Duat",
        keys: &["duat"],
        definition: DUAT,
    },
    GlossaryEntry {
        name: "Tiny move",
        keys: &["tiny move"],
        definition: TINY_MOVE,
    },
];

// ============================================================================
// Definitions
// ============================================================================

pub const MAAT: &str = "Ma'at is the ancient Egyptian idea of balance, truth and right order. \
Here it means choosing the response that brings a situation back into balance instead of adding more weight to it.";

pub const ISFET: &str = "Isfet is the opposite of Ma'at: chaos, disorder and imbalance. \
Here it names the part of a situation that keeps feeding itself, like the argument that repeats or the bill that keeps growing.";

const WEIGHING: &str = "In the Weighing of the Heart, a person's heart was placed on a scale against the Feather of Ma'at. \
Here it is a reminder to check what you are carrying before you decide what to do next.";

const FEATHER: &str = "The Feather is the symbol of Ma'at. A heart as light as the Feather was in balance. \
Here it stands for slowing down until the next step feels light enough to actually take.";

const THOTH: &str = "Thoth (Djehuty) is the Egyptian god of writing and wisdom who recorded the result of the weighing. \
Here he stands for writing things down: a situation on paper weighs less than one spinning in your head.";

const AMMIT: &str = "Ammit is the devourer who waited beside the scale in the weighing story. \
Here she stands for the quiet cost of leaving things exactly as they are.";

const DUAT: &str = "The Duat is the Egyptian underworld, the passage every soul had to cross. \
Here it is a name for the hard middle of a change, when the old way is gone and the new one is not clear yet.";

const TINY_MOVE: &str = "A tiny move is the smallest concrete action that starts the best option. \
It should take less than five minutes and be possible today.";
