use std::sync::LazyLock;

use crate::Diagnosis;
use crate::template::{AgeBand, Selector, Template};

pub struct Pragmatic;

impl Diagnosis for Pragmatic {
    fn code(&self) -> &str {
        "pragmatic"
    }

    fn name(&self) -> &str {
        "Pragmatic (Social) Communication"
    }

    fn templates(&self) -> &[(Selector, Template)] {
        static TEMPLATES: LazyLock<Vec<(Selector, Template)>> = LazyLock::new(|| {
            vec![
                (
                    Selector::AgeBand(AgeBand::Preschool),
                    Template::new(
                        &[
                            "Improve eye contact",
                            "Strengthen turn-taking",
                            "Expand play with peers",
                        ],
                        &[("Joint attention games", "joint attention activities")],
                    ),
                ),
                (
                    Selector::AgeBand(AgeBand::SchoolAge),
                    Template::new(
                        &[
                            "Stay on topic in conversations",
                            "Understand nonverbal cues",
                            "Develop social problem-solving",
                        ],
                        &[("Emotion charades", "teaching facial expressions kids")],
                    ),
                ),
                (
                    Selector::AgeBand(AgeBand::Adolescent),
                    Template::new(
                        &[
                            "Engage in deeper conversations",
                            "Improve self-advocacy",
                            "Learn professional communication",
                        ],
                        &[("Workplace role-plays", "social skills workplace scenarios")],
                    ),
                ),
            ]
        });
        &TEMPLATES
    }
}
