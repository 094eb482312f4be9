use dioxus::prelude::*;

const STATS: &[(&str, &str)] = &[
    ("95%", "Faster Sourcing"),
    ("60%", "Less Bias"),
    ("10x", "More Candidates"),
];

const FEATURES: &[(&str, &str)] = &[
    (
        "HireGPT Search",
        "\"Find senior RAG engineers in EU open to contracts\" - Search like you talk",
    ),
    (
        "Bias-Aware Ranking",
        "Anonymized initial screening with transparent scoring rationale",
    ),
    (
        "Smart Outreach",
        "AI-personalized templates based on candidate profiles and role fit",
    ),
];

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { class: "hero",
            h2 { class: "hero-title", "Reduce Time-to-Hire from 60+ Days to Hours" }
            p { class: "hero-subtitle",
                "AI-powered talent sourcing with natural language search, automated screening, "
                "and bias-aware verification for specialized AI roles."
            }
            div { class: "hero-stats",
                for (value, label) in STATS.iter().copied() {
                    div { key: "{label}", class: "stat-card",
                        div { class: "stat-value", "{value}" }
                        div { class: "stat-label", "{label}" }
                    }
                }
            }
            div { class: "hero-features",
                for (title, description) in FEATURES.iter().copied() {
                    div { key: "{title}", class: "feature-card",
                        h3 { "{title}" }
                        p { "{description}" }
                    }
                }
            }
        }
    }
}
