use clap::Parser;
use degrees::Args;
use degrees_core::Strategy;
use std::path::PathBuf;

#[test]
fn test_args_default_directory() {
    let args = Args::try_parse_from(["degrees"]).unwrap();

    assert_eq!(args.directory, PathBuf::from("large"));
    assert_eq!(args.strategy, Strategy::BreadthFirst);
    assert_eq!(args.max_expansions, None);
    assert!(!args.verbose && !args.quiet && !args.no_color);
}

#[test]
fn test_args_custom_directory_and_options() {
    let args =
        Args::try_parse_from(["degrees", "small", "--strategy", "dfs", "-x", "500", "--no-color"])
            .unwrap();

    assert_eq!(args.directory, PathBuf::from("small"));
    assert_eq!(args.strategy, Strategy::DepthFirst);

    let config = args.search_config();
    assert_eq!(config.strategy, Strategy::DepthFirst);
    assert_eq!(config.max_expansions, Some(500));
}

#[test]
fn test_args_rejects_second_directory() {
    assert!(Args::try_parse_from(["degrees", "small", "large"]).is_err());
}

#[test]
fn test_args_rejects_unknown_strategy() {
    assert!(Args::try_parse_from(["degrees", "--strategy", "dijkstra"]).is_err());
}
