use dioxus::prelude::*;

const ACCEPTED_FORMATS: &[&str] = &["PDF", "DOCX", "TXT"];

#[component]
pub fn ResumeUpload() -> Element {
    rsx! {
        section { class: "panel upload-panel",
            h2 { "Upload Resumes" }
            div { class: "drop-zone",
                p { "Drop resumes here to add them to your talent pool." }
                p { class: "panel-muted",
                    "Accepted formats: "
                    {ACCEPTED_FORMATS.join(", ")}
                }
            }
        }
    }
}
