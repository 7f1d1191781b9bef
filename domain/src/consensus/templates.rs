//! Recommended actions used when the consensus answer lists none.
//!
//! Level 1 is the most aggressive plan, level 5 the least. `{s}` stands for
//! the detected symptom description.

use crate::triage::EsiLevel;

fn template(level: EsiLevel) -> [&'static str; 5] {
    match level {
        EsiLevel::One => [
            "Immediate intervention by emergency physician for {s}",
            "Prepare resuscitation equipment appropriate for {s}",
            "Establish two large-bore IV access for immediate medication administration and fluid resuscitation",
            "Continuous cardiac monitoring and vital sign checks every 2-3 minutes",
            "Notify critical care team for possible ICU admission due to {s}",
        ],
        EsiLevel::Two => [
            "Urgent assessment by emergency physician within 10 minutes to evaluate {s}",
            "Establish IV access for medication and fluid administration",
            "Continuous vital sign monitoring every 5-10 minutes",
            "Administer appropriate medication for {s} after physician assessment",
            "Order diagnostic studies specific to {s} including labs and imaging",
        ],
        EsiLevel::Three => [
            "Assessment by emergency physician within 30 minutes to evaluate {s}",
            "Obtain baseline vital signs and repeat every 1-2 hours",
            "Order diagnostic tests appropriate for {s}",
            "Establish IV access if needed for medication administration",
            "Provide symptomatic treatment for {s} as ordered",
        ],
        EsiLevel::Four => [
            "Assessment by provider within 60 minutes to evaluate {s}",
            "Obtain baseline vital signs",
            "Focused examination of {s}",
            "Consider appropriate testing for {s} if clinically indicated",
            "Provide symptomatic relief for {s} as appropriate",
        ],
        EsiLevel::Five => [
            "Assessment by provider when available to evaluate {s}",
            "Obtain baseline vital signs once",
            "Focused examination of {s}",
            "Provide education on home management of {s}",
            "Arrange appropriate follow-up care as needed",
        ],
    }
}

/// Five level-appropriate actions mentioning `symptoms`
pub fn default_actions(level: EsiLevel, symptoms: &str) -> Vec<String> {
    template(level)
        .iter()
        .map(|line| line.replace("{s}", symptoms))
        .collect()
}
