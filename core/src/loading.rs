use crate::dataset::{Dataset, DatasetBuilder};
use crate::error::LoadError;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::{fs::File, path::Path};
use tracing::{debug, info};

const PEOPLE_FILE: &str = "people.csv";
const MOVIES_FILE: &str = "movies.csv";
const STARS_FILE: &str = "stars.csv";

#[derive(Deserialize)]
struct PersonRow {
    id: String,
    name: String,
    birth: String,
}

#[derive(Deserialize)]
struct MovieRow {
    id: String,
    title: String,
    year: String,
}

#[derive(Deserialize)]
struct StarRow {
    person_id: String,
    movie_id: String,
}

/// Row counts observed while loading a dataset directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub people: usize,
    pub movies: usize,
    pub stars: usize,
    pub skipped_stars: usize,
}

pub fn load_dataset(directory: &Path) -> Result<(Dataset, LoadReport), LoadError> {
    let mut builder = Dataset::builder();
    let mut report = LoadReport::default();

    for row in read_rows::<PersonRow>(&directory.join(PEOPLE_FILE))? {
        builder.add_person(row.id, row.name, row.birth);
        report.people += 1;
    }

    for row in read_rows::<MovieRow>(&directory.join(MOVIES_FILE))? {
        builder.add_movie(row.id, row.title, row.year);
        report.movies += 1;
    }

    for row in read_rows::<StarRow>(&directory.join(STARS_FILE))? {
        link_star(&mut builder, row, &mut report);
    }

    info!(
        people = report.people,
        movies = report.movies,
        stars = report.stars,
        skipped = report.skipped_stars,
        "dataset loaded from {}",
        directory.display()
    );

    Ok((builder.build(), report))
}

fn link_star(builder: &mut DatasetBuilder, row: StarRow, report: &mut LoadReport) {
    match builder.add_star(row.person_id, row.movie_id) {
        Ok(_) => report.stars += 1,
        Err(skipped) => {
            debug!("skipping cast row: {}", skipped);
            report.skipped_stars += 1;
        }
    }
}

fn read_rows<T: DeserializeOwned>(file_path: &Path) -> Result<Vec<T>, LoadError> {
    let file = File::open(file_path).map_err(|source| LoadError::Io {
        path: file_path.to_path_buf(),
        source,
    })?;

    csv::Reader::from_reader(file)
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(|source| LoadError::Csv {
            path: file_path.to_path_buf(),
            source,
        })
}
