use std::sync::LazyLock;

use crate::Diagnosis;
use crate::template::{AgeBand, Selector, Template};

/// Motor planning disorder. Templates favour drill and multisensory cueing.
pub struct Apraxia;

impl Diagnosis for Apraxia {
    fn code(&self) -> &str {
        "apraxia"
    }

    fn name(&self) -> &str {
        "Childhood Apraxia of Speech"
    }

    fn templates(&self) -> &[(Selector, Template)] {
        static TEMPLATES: LazyLock<Vec<(Selector, Template)>> = LazyLock::new(|| {
            vec![
                (
                    Selector::AgeBand(AgeBand::Preschool),
                    Template::new(
                        &[
                            "Produce simple syllables consistently",
                            "Improve word production accuracy",
                            "Use alternative communication",
                        ],
                        &[("VC/CV syllable drills", "apraxia syllable practice")],
                    ),
                ),
                (
                    Selector::AgeBand(AgeBand::SchoolAge),
                    Template::new(
                        &[
                            "Improve complex word coordination",
                            "Increase speech accuracy at sentence level",
                            "Strengthen oral-motor planning",
                        ],
                        &[("Multisensory cueing", "apraxia multisensory therapy")],
                    ),
                ),
                (
                    Selector::AgeBand(AgeBand::Adolescent),
                    Template::new(
                        &[
                            "Improve conversation clarity",
                            "Develop compensatory strategies",
                            "Strengthen speech rhythm",
                        ],
                        &[("Melodic intonation", "melodic intonation therapy")],
                    ),
                ),
            ]
        });
        &TEMPLATES
    }
}
