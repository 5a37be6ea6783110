use clap::Parser;
use degrees::colors::ColorScheme;
use degrees::display::{display_search_results, format_path_lines};
use degrees::{Args, SearchRequest, format_number};
use degrees_core::{
    Dataset, MovieId, PathFinder, PersonId, SearchConfig, SearchOutcome, SearchResult, SearchStats,
};

fn costar_dataset() -> Dataset {
    let mut builder = Dataset::builder();
    builder
        .add_person("102", "Kevin Bacon", "1958")
        .add_person("158", "Tom Hanks", "1956")
        .add_person("200", "Sally Field", "1946")
        .add_movie("112384", "Apollo 13", "1995")
        .add_movie("109830", "Forrest Gump", "1994");
    builder.add_star("102", "112384").unwrap();
    builder.add_star("158", "112384").unwrap();
    builder.add_star("158", "109830").unwrap();
    builder.add_star("200", "109830").unwrap();
    builder.build()
}

#[test]
fn test_format_path_lines() {
    let dataset = costar_dataset();
    let path = vec![
        (MovieId::new("112384"), PersonId::new("158")),
        (MovieId::new("109830"), PersonId::new("200")),
    ];

    assert_eq!(
        format_path_lines(&dataset, &PersonId::new("102"), &path),
        vec![
            "1: Kevin Bacon and Tom Hanks starred in Apollo 13",
            "2: Tom Hanks and Sally Field starred in Forrest Gump",
        ]
    );
}

#[test]
fn test_format_path_lines_from_search() {
    let dataset = costar_dataset();
    let finder = PathFinder::new(&dataset, SearchConfig::default());
    let source = PersonId::new("200");

    let result = finder.shortest_path(&source, &PersonId::new("102"));
    let lines = format_path_lines(&dataset, &source, result.path().unwrap());

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "1: Sally Field and Tom Hanks starred in Forrest Gump");
    assert_eq!(lines[1], "2: Tom Hanks and Kevin Bacon starred in Apollo 13");
}

#[test]
fn test_format_path_lines_empty_path() {
    let dataset = costar_dataset();
    assert!(format_path_lines(&dataset, &PersonId::new("102"), &[]).is_empty());
}

#[test]
fn test_format_number_basic() {
    assert_eq!(format_number(123), "123");
    assert_eq!(format_number(1234), "1,234");
    assert_eq!(format_number(12345), "12,345");
}

#[test]
fn test_format_number_large() {
    assert_eq!(format_number(123456), "123,456");
    assert_eq!(format_number(1234567), "1,234,567");
}

#[test]
fn test_format_number_edge_cases() {
    assert_eq!(format_number(0), "0");
    assert_eq!(format_number(100), "100");
    assert_eq!(format_number(1000), "1,000");
}

fn request(source: &str, target: &str) -> SearchRequest {
    SearchRequest {
        source: PersonId::new(source),
        target: PersonId::new(target),
        source_name: source.to_string(),
        target_name: target.to_string(),
    }
}

fn render(outcome: SearchOutcome, nodes_expanded: usize, flags: &[&str]) -> String {
    let dataset = costar_dataset();
    let args = Args::try_parse_from(std::iter::once("degrees").chain(flags.iter().copied())).unwrap();
    let colors = ColorScheme::new(false);
    let result = SearchResult {
        outcome,
        stats: SearchStats {
            nodes_expanded,
            ..SearchStats::default()
        },
    };

    let mut output = Vec::new();
    display_search_results(&result, &request("102", "200"), &dataset, &args, &colors, &mut output)
        .unwrap();
    String::from_utf8(output).unwrap()
}

fn two_hop_path() -> Vec<(MovieId, PersonId)> {
    vec![
        (MovieId::new("112384"), PersonId::new("158")),
        (MovieId::new("109830"), PersonId::new("200")),
    ]
}

#[test]
fn test_display_found_path() {
    let output = render(SearchOutcome::Found(two_hop_path()), 2, &[]);

    assert_eq!(
        output,
        "2 degrees of separation.\n\
         1: Kevin Bacon and Tom Hanks starred in Apollo 13\n\
         2: Tom Hanks and Sally Field starred in Forrest Gump\n"
    );
}

#[test]
fn test_display_same_person_is_zero_degrees() {
    let output = render(SearchOutcome::Found(vec![]), 0, &[]);
    assert_eq!(output, "0 degrees of separation.\n");
}

#[test]
fn test_display_quiet_hides_hops() {
    let output = render(SearchOutcome::Found(two_hop_path()), 2, &["--quiet"]);
    assert_eq!(output, "2 degrees of separation.\n");
}

#[test]
fn test_display_not_connected() {
    let output = render(SearchOutcome::NotConnected, 3, &[]);
    assert_eq!(output, "Not connected.\n");
}

#[test]
fn test_display_aborted_search() {
    let output = render(SearchOutcome::Aborted, 1500, &[]);
    assert_eq!(output, "Search aborted after 1,500 expansions.\n");
}

#[test]
fn test_display_verbose_adds_statistics() {
    let output = render(SearchOutcome::NotConnected, 3, &["--verbose"]);

    assert!(output.starts_with("Not connected.\n"));
    assert!(output.contains("Stats: Expanded 3 people"));
}
