use crate::error::LoadError;
use crate::string_normalization::normalize_name;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(String);

macro_rules! string_id {
    ($id:ident) => {
        impl $id {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $id {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $id {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $id {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(PersonId);
string_id!(MovieId);

pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub birth: String,
    pub movies: FxHashSet<MovieId>,
}

pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: String,
    pub stars: FxHashSet<PersonId>,
}

type NameLookup = FxHashMap<String, Vec<PersonId>>;
type PersonMetadata = FxHashMap<PersonId, Person>;
type MovieMetadata = FxHashMap<MovieId, Movie>;

/// Read-only relation store of people, movies and who starred in what.
pub struct Dataset {
    names: NameLookup,
    people: PersonMetadata,
    movies: MovieMetadata,
}

impl Dataset {
    pub fn builder() -> DatasetBuilder {
        DatasetBuilder::default()
    }

    pub fn person(&self, person_id: &PersonId) -> Option<&Person> {
        self.people.get(person_id)
    }

    pub fn movie(&self, movie_id: &MovieId) -> Option<&Movie> {
        self.movies.get(movie_id)
    }

    pub fn people_count(&self) -> usize {
        self.people.len()
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    /// Every `(movie, co-star)` pair for the movies `person_id` appeared in.
    ///
    /// The person is paired with themself as well; the search drops those
    /// pairs because the expanded state is already explored. The result is
    /// sorted so that repeated searches visit neighbors in the same order.
    pub fn neighbors(&self, person_id: &PersonId) -> Vec<(MovieId, PersonId)> {
        let Some(person) = self.people.get(person_id) else {
            return vec![];
        };

        let mut neighbors: Vec<(MovieId, PersonId)> = person
            .movies
            .iter()
            .filter_map(|movie_id| self.movies.get(movie_id))
            .flat_map(|movie| {
                movie
                    .stars
                    .iter()
                    .map(move |star| (movie.id.clone(), star.clone()))
            })
            .collect();

        neighbors.sort_unstable();
        neighbors
    }

    /// Case-insensitive exact lookup; ids come back in load order.
    pub fn resolve_name(&self, name: &str) -> Vec<PersonId> {
        self.names
            .get(&normalize_name(name))
            .cloned()
            .unwrap_or_default()
    }
}

#[derive(Default)]
pub struct DatasetBuilder {
    names: NameLookup,
    people: PersonMetadata,
    movies: MovieMetadata,
}

impl DatasetBuilder {
    pub fn add_person(
        &mut self,
        id: impl Into<PersonId>,
        name: impl Into<String>,
        birth: impl Into<String>,
    ) -> &mut Self {
        let id = id.into();
        let name = name.into();

        let ids = self.names.entry(normalize_name(&name)).or_default();
        if !ids.contains(&id) {
            ids.push(id.clone());
        }

        self.people.insert(
            id.clone(),
            Person {
                id,
                name,
                birth: birth.into(),
                movies: FxHashSet::default(),
            },
        );
        self
    }

    pub fn add_movie(
        &mut self,
        id: impl Into<MovieId>,
        title: impl Into<String>,
        year: impl Into<String>,
    ) -> &mut Self {
        let id = id.into();
        self.movies.insert(
            id.clone(),
            Movie {
                id,
                title: title.into(),
                year: year.into(),
                stars: FxHashSet::default(),
            },
        );
        self
    }

    /// Links a person to a movie. Both ids must already be present.
    pub fn add_star(
        &mut self,
        person_id: impl Into<PersonId>,
        movie_id: impl Into<MovieId>,
    ) -> Result<&mut Self, LoadError> {
        let person_id = person_id.into();
        let movie_id = movie_id.into();

        match (
            self.people.get_mut(&person_id),
            self.movies.get_mut(&movie_id),
        ) {
            (Some(person), Some(movie)) => {
                person.movies.insert(movie_id);
                movie.stars.insert(person_id);
                Ok(self)
            }
            _ => Err(LoadError::MalformedRecord {
                person_id,
                movie_id,
            }),
        }
    }

    pub fn build(self) -> Dataset {
        Dataset {
            names: self.names,
            people: self.people,
            movies: self.movies,
        }
    }
}
