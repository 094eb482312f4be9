//! Candidate records and the bundled demo pool used by the search panel.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub id: u32,
    pub name: String,
    pub title: String,
    pub location: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl CandidateRecord {
    fn matches_term(&self, term: &str) -> bool {
        [&self.name, &self.title, &self.location]
            .into_iter()
            .chain(self.skills.iter())
            .any(|field| field.to_lowercase().contains(term))
    }

    /// True when every whitespace-separated term occurs in some field.
    pub fn matches(&self, query: &str) -> bool {
        let terms: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
        !terms.is_empty() && terms.iter().all(|term| self.matches_term(term))
    }
}

#[derive(Debug, Deserialize)]
struct PoolData {
    candidates: Vec<CandidateRecord>,
}

const POOL_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/candidates.json"));

static POOL: OnceLock<Vec<CandidateRecord>> = OnceLock::new();

pub fn parse_pool(json: &str) -> Result<Vec<CandidateRecord>> {
    let data: PoolData = serde_json::from_str(json)?;
    Ok(data.candidates)
}

/// The bundled demo pool. An unparsable bundle yields an empty pool.
pub fn bundled_pool() -> &'static [CandidateRecord] {
    POOL.get_or_init(|| {
        parse_pool(POOL_JSON).unwrap_or_else(|e| {
            log::error!("Failed to parse bundled candidates: {e}");
            Vec::new()
        })
    })
}

pub fn search<'a>(pool: &'a [CandidateRecord], query: &str) -> Vec<&'a CandidateRecord> {
    pool.iter().filter(|c| c.matches(query)).collect()
}

/// Appends `found` to `existing`, skipping ids already present. Order is kept.
pub fn append_new(existing: &[CandidateRecord], found: &[&CandidateRecord]) -> Vec<CandidateRecord> {
    let mut merged = existing.to_vec();
    for candidate in found {
        if !merged.iter().any(|c| c.id == candidate.id) {
            merged.push((*candidate).clone());
        }
    }
    merged
}
