use dioxus::prelude::*;

const COLUMNS: &[(&str, &[&str])] = &[
    (
        "Features",
        &["HireGPT Search", "Resume Parsing", "Candidate Ranking", "Outreach Templates"],
    ),
    (
        "Phase 1 MVP",
        &["Basic Search", "Upload System", "Template Outreach", "Candidate Profiles"],
    ),
    (
        "Coming Soon",
        &["ATS Integration", "Background Verification", "AI Pre-Screening", "Talent Nurturing"],
    ),
];

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "app-footer",
            div { class: "footer-grid",
                div {
                    span { class: "footer-brand", "Hire AI" }
                    p { class: "footer-muted",
                        "Revolutionizing AI talent acquisition with smart automation and bias-aware screening."
                    }
                }
                for (heading, items) in COLUMNS.iter().copied() {
                    div { key: "{heading}",
                        h3 { "{heading}" }
                        ul { class: "footer-muted",
                            for item in items.iter() {
                                li { key: "{item}", "{item}" }
                            }
                        }
                    }
                }
            }
            div { class: "footer-bottom footer-muted",
                "© 2024 Hire AI. Built for the future of AI talent acquisition."
            }
        }
    }
}
