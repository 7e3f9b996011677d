use std::sync::LazyLock;

use crate::Diagnosis;
use crate::template::{AgeBand, Selector, Template};

pub struct Stuttering;

impl Diagnosis for Stuttering {
    fn code(&self) -> &str {
        "stuttering"
    }

    fn name(&self) -> &str {
        "Stuttering"
    }

    fn templates(&self) -> &[(Selector, Template)] {
        static TEMPLATES: LazyLock<Vec<(Selector, Template)>> = LazyLock::new(|| {
            vec![
                (
                    Selector::AgeBand(AgeBand::Preschool),
                    Template::new(
                        &[
                            "Reduce tension while speaking",
                            "Increase use of slow, relaxed speech",
                            "Develop turn-taking skills",
                        ],
                        &[("Breathing exercises", "kids breathing exercises for speech")],
                    ),
                ),
                (
                    Selector::AgeBand(AgeBand::SchoolAge),
                    Template::new(
                        &[
                            "Use fluency-enhancing strategies",
                            "Reduce fear around speaking",
                            "Improve communication confidence",
                        ],
                        &[("Easy onset practice", "easy onset speech therapy")],
                    ),
                ),
                (
                    Selector::AgeBand(AgeBand::Adolescent),
                    Template::new(
                        &[
                            "Master fluency techniques",
                            "Reduce avoidance behaviors",
                            "Improve emotional coping",
                        ],
                        &[("Real-life practice", "stuttering therapy for adults")],
                    ),
                ),
            ]
        });
        &TEMPLATES
    }
}
