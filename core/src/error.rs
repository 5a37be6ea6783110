use std::path::PathBuf;
use thiserror::Error;

use crate::dataset::{MovieId, PersonId};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {}: {}", .path.display(), .source)]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A cast row references a person or movie that was never loaded.
    #[error("cast row references unknown ids (person {person_id}, movie {movie_id})")]
    MalformedRecord {
        person_id: PersonId,
        movie_id: MovieId,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("Person '{name}' not found")]
    NotFound { name: String },

    #[error("'{}' matches {} people", .name, .candidates.len())]
    Ambiguous {
        name: String,
        candidates: Vec<PersonId>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FrontierError {
    #[error("empty frontier")]
    Empty,
}
