use crate::backend::services::CandidateRecord;
use dioxus::prelude::*;

#[component]
pub fn CandidateResults(candidates: Vec<CandidateRecord>) -> Element {
    rsx! {
        section { class: "panel results-panel",
            h2 { "Candidates" }
            if candidates.is_empty() {
                p { class: "panel-muted", "No candidates yet. Run a search from Home to build your list." }
            } else {
                ul { class: "candidate-list",
                    for candidate in candidates.iter() {
                        li { key: "{candidate.id}", class: "candidate-card",
                            div { class: "candidate-name", "{candidate.name}" }
                            div { class: "candidate-title", "{candidate.title} · {candidate.location}" }
                            div { class: "candidate-skills",
                                for skill in candidate.skills.iter() {
                                    span { key: "{skill}", class: "skill-tag", "{skill}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
