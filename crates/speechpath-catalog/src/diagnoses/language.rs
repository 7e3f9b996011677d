use std::sync::LazyLock;

use crate::Diagnosis;
use crate::template::{AgeBand, Selector, Template};

/// Receptive and expressive language delay.
pub struct Language;

impl Diagnosis for Language {
    fn code(&self) -> &str {
        "language"
    }

    fn name(&self) -> &str {
        "Language"
    }

    fn templates(&self) -> &[(Selector, Template)] {
        static TEMPLATES: LazyLock<Vec<(Selector, Template)>> = LazyLock::new(|| {
            vec![
                (
                    Selector::AgeBand(AgeBand::Preschool),
                    Template::new(
                        &[
                            "Expand vocabulary (naming objects/categories)",
                            "Improve sentence structure",
                            "Strengthen understanding of basic concepts",
                            "Increase ability to answer 'wh' questions",
                        ],
                        &[("Picture card naming", "vocabulary building for toddlers")],
                    ),
                ),
                (
                    Selector::AgeBand(AgeBand::SchoolAge),
                    Template::new(
                        &[
                            "Improve multi-step directions",
                            "Expand complex sentence use",
                            "Strengthen storytelling skills",
                            "Increase understanding of figurative language",
                        ],
                        &[("Story sequencing", "story sequencing activities")],
                    ),
                ),
                (
                    Selector::AgeBand(AgeBand::Adolescent),
                    Template::new(
                        &[
                            "Develop advanced academic vocabulary",
                            "Strengthen written communication",
                            "Improve pragmatic language skills",
                        ],
                        &[("Debate practice", "debate skills for teens")],
                    ),
                ),
            ]
        });
        &TEMPLATES
    }
}
