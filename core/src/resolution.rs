use crate::dataset::{Dataset, PersonId};
use crate::error::ResolveError;

/// Resolves a typed name to exactly one person, reporting ambiguity to the caller.
pub fn resolve_person(dataset: &Dataset, name: &str) -> Result<PersonId, ResolveError> {
    let mut candidates = dataset.resolve_name(name);

    match candidates.len() {
        0 => Err(ResolveError::NotFound {
            name: name.to_string(),
        }),
        1 => Ok(candidates.remove(0)),
        _ => Err(ResolveError::Ambiguous {
            name: name.to_string(),
            candidates,
        }),
    }
}

/// Picks the id the user typed out of an ambiguous match.
pub fn choose_candidate(candidates: &[PersonId], chosen_id: &str) -> Result<PersonId, ResolveError> {
    let chosen_id = chosen_id.trim();
    candidates
        .iter()
        .find(|candidate| candidate.as_str() == chosen_id)
        .cloned()
        .ok_or_else(|| ResolveError::NotFound {
            name: chosen_id.to_string(),
        })
}
