use degrees_core::{Dataset, MovieId, PathStep, PersonId, SearchOutcome, SearchResult};
use std::io::{self, Write};

use crate::args::Args;
use crate::colors::ColorScheme;
use crate::search::SearchRequest;
use crate::utils::format_number;

pub fn display_search_info<W: Write>(
    request: &SearchRequest,
    args: &Args,
    colors: &ColorScheme,
    output: &mut W,
) -> io::Result<()> {
    writeln!(
        output,
        "Finding path from {} to {} ({})",
        colors.person_name(&request.source_name),
        colors.person_name(&request.target_name),
        args.strategy.as_str()
    )?;

    if let Some(limit) = args.max_expansions {
        writeln!(
            output,
            "Expanding at most {} people",
            colors.number(&format_number(limit))
        )?;
    }

    Ok(())
}

pub fn display_search_results<W: Write>(
    result: &SearchResult,
    request: &SearchRequest,
    dataset: &Dataset,
    args: &Args,
    colors: &ColorScheme,
    output: &mut W,
) -> io::Result<()> {
    match &result.outcome {
        SearchOutcome::Found(path) => {
            writeln!(
                output,
                "{} degrees of separation.",
                colors.success(&path.len().to_string())
            )?;
            if !args.quiet {
                for line in format_colored_path(dataset, &request.source, path, colors) {
                    writeln!(output, "{}", line)?;
                }
            }
        }
        SearchOutcome::NotConnected => writeln!(output, "{}", colors.error("Not connected."))?,
        SearchOutcome::Aborted => writeln!(
            output,
            "{} {} expansions.",
            colors.error("Search aborted after"),
            colors.number(&format_number(result.stats.nodes_expanded))
        )?,
    }

    if args.verbose {
        display_search_statistics(result, colors, output)?;
    }

    Ok(())
}

/// Renders each hop as `<i>: <person1> and <person2> starred in <movie>`.
pub fn format_path_lines(dataset: &Dataset, source: &PersonId, path: &[PathStep]) -> Vec<String> {
    path_hops(dataset, source, path)
        .map(|(step, from, to, movie)| format!("{}: {} and {} starred in {}", step, from, to, movie))
        .collect()
}

fn format_colored_path(
    dataset: &Dataset,
    source: &PersonId,
    path: &[PathStep],
    colors: &ColorScheme,
) -> Vec<String> {
    path_hops(dataset, source, path)
        .map(|(step, from, to, movie)| {
            format!(
                "{}: {} and {} starred in {}",
                colors.step_number(&step.to_string()),
                colors.person_name(&from),
                colors.person_name(&to),
                colors.movie_title(&movie)
            )
        })
        .collect()
}

fn path_hops<'a>(
    dataset: &'a Dataset,
    source: &'a PersonId,
    path: &'a [PathStep],
) -> impl Iterator<Item = (usize, String, String, String)> + 'a {
    let previous_people = std::iter::once(source).chain(path.iter().map(|(_, person)| person));

    previous_people
        .zip(path.iter())
        .enumerate()
        .map(move |(index, (from, (movie, to)))| {
            (
                index + 1,
                person_name(dataset, from),
                person_name(dataset, to),
                movie_title(dataset, movie),
            )
        })
}

pub(crate) fn person_name(dataset: &Dataset, person_id: &PersonId) -> String {
    dataset
        .person(person_id)
        .map(|person| person.name.clone())
        .unwrap_or_else(|| person_id.to_string())
}

fn movie_title(dataset: &Dataset, movie_id: &MovieId) -> String {
    dataset
        .movie(movie_id)
        .map(|movie| movie.title.clone())
        .unwrap_or_else(|| movie_id.to_string())
}

fn display_search_statistics<W: Write>(
    result: &SearchResult,
    colors: &ColorScheme,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output, "\n---\n")?;
    writeln!(
        output,
        "{} Expanded {} people, generated {} nodes in {} sec",
        colors.stats("Stats:"),
        colors.number(&format_number(result.stats.nodes_expanded)),
        colors.number(&format_number(result.stats.nodes_generated)),
        colors.number(&format!("{:.3}", result.stats.duration.as_secs_f64()))
    )
}
