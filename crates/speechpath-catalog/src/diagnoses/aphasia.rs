use std::sync::LazyLock;

use speechpath_core::clinical::{APHASIA, Severity};

use crate::Diagnosis;
use crate::template::{Selector, Template};

/// Acquired aphasia. Templates are keyed by severity; age plays no part.
pub struct Aphasia;

impl Diagnosis for Aphasia {
    fn code(&self) -> &str {
        APHASIA
    }

    fn name(&self) -> &str {
        "Aphasia"
    }

    fn templates(&self) -> &[(Selector, Template)] {
        static TEMPLATES: LazyLock<Vec<(Selector, Template)>> = LazyLock::new(|| {
            vec![
                (
                    Selector::Severity(Severity::Mild),
                    Template::new(
                        &[
                            "Strengthen word-finding skills",
                            "Improve sentence formation",
                            "Develop comprehension strategies",
                        ],
                        &[("Semantic feature analysis", "semantic feature aphasia therapy")],
                    ),
                ),
                (
                    Selector::Severity(Severity::Moderate),
                    Template::new(
                        &[
                            "Communicate basic needs",
                            "Use alternative communication",
                            "Improve direction following",
                        ],
                        &[("Gesture communication", "gesture communication aphasia")],
                    ),
                ),
            ]
        });
        &TEMPLATES
    }
}
