use dioxus::prelude::*;

struct Template {
    name: &'static str,
    body: &'static str,
}

const TEMPLATES: &[Template] = &[
    Template {
        name: "Initial Reach-out",
        body: "Hi {name}, your work on {project} caught our eye. We're hiring for a {role} and would love to chat.",
    },
    Template {
        name: "Follow-up",
        body: "Hi {name}, just following up on my earlier note about the {role} role. Happy to share more details.",
    },
    Template {
        name: "Contract Offer",
        body: "Hi {name}, we have a {duration} contract for a {role}, fully remote. Would you be open to a quick call?",
    },
];

#[component]
pub fn OutreachTemplates() -> Element {
    let mut selected = use_signal(|| 0usize);
    let current = TEMPLATES.get(selected()).unwrap_or(&TEMPLATES[0]);

    rsx! {
        section { class: "panel outreach-panel",
            h2 { "Outreach Templates" }
            div { class: "template-picker",
                for (index, template) in TEMPLATES.iter().enumerate() {
                    button {
                        key: "{template.name}",
                        class: if index == selected() { "template-tab active" } else { "template-tab" },
                        onclick: move |_| selected.set(index),
                        "{template.name}"
                    }
                }
            }
            pre { class: "template-body", {current.body} }
        }
    }
}
