use clap::Parser;
use degrees::colors::ColorScheme;
use degrees::display::{display_search_info, display_search_results};
use degrees::logging::init_logging;
use degrees::*;
use degrees_core::{Dataset, PathFinder, SearchResult};
use std::io;

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    let colors = ColorScheme::new(!args.no_color);

    let app = match DegreesApp::new(args.directory.clone()) {
        Ok(app) => app,
        Err(error_message) => {
            eprintln!("{} {}", colors.error("Error:"), error_message);
            std::process::exit(1);
        }
    };

    println!("Loading data...");
    let (dataset, _report) = match app.load_data() {
        Ok(loaded) => loaded,
        Err(error_message) => {
            eprintln!("{} {}", colors.error("Error:"), error_message);
            std::process::exit(1);
        }
    };
    println!("Data loaded.");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let search_request = match create_search_request(&dataset, &mut input, &mut output) {
        Ok(request) => request,
        Err(PromptError::Resolve(_)) => {
            eprintln!("{}", colors.error("Person not found."));
            std::process::exit(1);
        }
        Err(error_message) => {
            eprintln!("{} {}", colors.error("Error:"), error_message);
            std::process::exit(1);
        }
    };

    let finder = PathFinder::new(&dataset, args.search_config());
    let search_result = finder.shortest_path(&search_request.source, &search_request.target);

    if let Err(error_message) = render(&search_result, &search_request, &dataset, &args, &colors) {
        eprintln!("{} {}", colors.error("Error:"), error_message);
        std::process::exit(1);
    }
}

fn render(
    result: &SearchResult,
    request: &SearchRequest,
    dataset: &Dataset,
    args: &Args,
    colors: &ColorScheme,
) -> io::Result<()> {
    let mut output = io::stdout().lock();

    if args.verbose {
        display_search_info(request, args, colors, &mut output)?;
    }
    display_search_results(result, request, dataset, args, colors, &mut output)
}
