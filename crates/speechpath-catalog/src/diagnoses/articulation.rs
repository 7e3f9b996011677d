use std::sync::LazyLock;

use crate::Diagnosis;
use crate::template::{AgeBand, Selector, Template};

/// Speech sound disorders: substitutions, omissions and distortions.
pub struct Articulation;

impl Diagnosis for Articulation {
    fn code(&self) -> &str {
        "articulation"
    }

    fn name(&self) -> &str {
        "Articulation"
    }

    fn templates(&self) -> &[(Selector, Template)] {
        static TEMPLATES: LazyLock<Vec<(Selector, Template)>> = LazyLock::new(|| {
            vec![
                (
                    Selector::AgeBand(AgeBand::Preschool),
                    Template::new(
                        &[
                            "Improve correct production of target sounds (e.g., /k/ instead of /t/)",
                            "Increase awareness of tongue and lip placement",
                            "Reduce phonological errors (e.g., stopping, fronting)",
                            "Strengthen oral-motor coordination",
                        ],
                        &[
                            ("Sound imitation with mirrors", "speech sound imitation for preschoolers"),
                            ("Tongue placement games", "tongue exercises for speech therapy"),
                        ],
                    ),
                ),
                (
                    Selector::AgeBand(AgeBand::SchoolAge),
                    Template::new(
                        &[
                            "Produce difficult sounds in all word positions",
                            "Use correct sounds in sentences/conversations",
                            "Increase self-monitoring of speech",
                        ],
                        &[("Sentence repetition drills", "speech therapy sentence practice")],
                    ),
                ),
                (
                    Selector::AgeBand(AgeBand::Adolescent),
                    Template::new(
                        &[
                            "Eliminate residual speech sound errors",
                            "Improve clarity in spontaneous speech",
                            "Develop self-correction strategies",
                        ],
                        &[("Conversational practice", "speech therapy for teens conversation")],
                    ),
                ),
            ]
        });
        &TEMPLATES
    }
}
