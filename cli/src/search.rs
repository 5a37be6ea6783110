use degrees_core::{Dataset, PersonId, ResolveError, choose_candidate, resolve_person};
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::debug;

use crate::display::person_name;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

pub struct SearchRequest {
    pub source: PersonId,
    pub target: PersonId,
    pub source_name: String,
    pub target_name: String,
}

/// Prompts for both names and resolves them to people.
pub fn create_search_request<R: BufRead, W: Write>(
    dataset: &Dataset,
    input: &mut R,
    output: &mut W,
) -> Result<SearchRequest, PromptError> {
    let source = prompt_for_person(dataset, input, output)?;
    let target = prompt_for_person(dataset, input, output)?;

    Ok(SearchRequest {
        source_name: person_name(dataset, &source),
        target_name: person_name(dataset, &target),
        source,
        target,
    })
}

/// Asks for a name, falling back to an id prompt when several people share it.
pub fn prompt_for_person<R: BufRead, W: Write>(
    dataset: &Dataset,
    input: &mut R,
    output: &mut W,
) -> Result<PersonId, PromptError> {
    let name = read_answer("Name: ", input, output)?;

    match resolve_person(dataset, &name) {
        Err(ResolveError::Ambiguous { name, candidates }) => {
            debug!(candidates = candidates.len(), "ambiguous name '{}'", name);
            writeln!(output, "Which '{}'?", name)?;
            for candidate in &candidates {
                if let Some(person) = dataset.person(candidate) {
                    writeln!(
                        output,
                        "ID: {}, Name: {}, Birth: {}",
                        candidate, person.name, person.birth
                    )?;
                }
            }

            let chosen_id = read_answer("Intended Person ID: ", input, output)?;
            Ok(choose_candidate(&candidates, &chosen_id)?)
        }
        resolved => Ok(resolved?),
    }
}

fn read_answer<R: BufRead, W: Write>(prompt: &str, input: &mut R, output: &mut W) -> io::Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }

    Ok(answer.trim_end_matches(['\r', '\n']).to_string())
}
