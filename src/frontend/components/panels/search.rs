use crate::backend::services::candidates::{append_new, bundled_pool, search};
use crate::backend::services::CandidateRecord;
use dioxus::{events::KeyboardEvent, prelude::*};

#[component]
pub fn SearchInterface(
    candidates: Vec<CandidateRecord>,
    on_candidates: EventHandler<Vec<CandidateRecord>>,
) -> Element {
    let mut query = use_signal(String::new);
    let mut last_hits = use_signal(|| None::<usize>);

    let run_search = {
        let candidates = candidates.clone();
        move || {
            let q = query.read().clone();
            let hits = search(bundled_pool(), &q);
            log::debug!("Search {q:?} matched {}", hits.len());
            last_hits.set(Some(hits.len()));
            if !hits.is_empty() {
                on_candidates.call(append_new(&candidates, &hits));
            }
        }
    };

    let on_keydown = {
        let mut run_search = run_search.clone();
        move |e: KeyboardEvent| {
            if e.key() == Key::Enter {
                run_search();
            }
        }
    };

    rsx! {
        section { class: "panel search-panel",
            h2 { "HireGPT Search" }
            div { class: "search-bar",
                input {
                    class: "search-input",
                    r#type: "text",
                    value: "{query()}",
                    placeholder: "Find senior RAG engineers in EU open to contracts",
                    oninput: move |e| query.set(e.value()),
                    onkeydown: on_keydown,
                }
                button {
                    class: "primary-button",
                    onclick: {
                        let mut run_search = run_search.clone();
                        move |_| run_search()
                    },
                    "Search"
                }
                if !candidates.is_empty() {
                    button {
                        class: "ghost-button",
                        onclick: move |_| {
                            last_hits.set(None);
                            on_candidates.call(Vec::new());
                        },
                        "Clear"
                    }
                }
            }
            match last_hits() {
                Some(0) => rsx! { p { class: "panel-muted", "No candidates matched." } },
                Some(n) => rsx! { p { class: "panel-muted", "{n} matched, {candidates.len()} in your list." } },
                None => rsx! {},
            }
        }
    }
}
