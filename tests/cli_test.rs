//! 命令行解析测试

use clap::Parser;
use trash_sort::cli::{Cli, Commands, OutputFormat};
use trash_sort_common::{Category, Scorer};

#[test]
fn test_query_defaults() {
    let cli = Cli::try_parse_from(["trash-sort", "query", "电池"]).unwrap();
    match cli.command {
        Commands::Query { text, select, format, no_interactive, matching } => {
            assert_eq!(text, "电池");
            assert!(select.is_none());
            assert_eq!(format, OutputFormat::Text);
            assert!(!no_interactive);
            assert!(matching.threshold.is_none());
        }
        _ => panic!("query 以外"),
    }
}

#[test]
fn test_query_with_overrides() {
    let cli = Cli::try_parse_from([
        "trash-sort", "-v", "query", "塑料", "--select", "塑料瓶", "--format", "json",
        "--threshold", "60", "--limit", "3", "--scorer", "levenshtein",
    ])
    .unwrap();

    assert!(cli.verbose);
    match cli.command {
        Commands::Query { select, format, matching, .. } => {
            assert_eq!(select.as_deref(), Some("塑料瓶"));
            assert_eq!(format, OutputFormat::Json);
            assert_eq!(matching.threshold, Some(60.0));
            assert_eq!(matching.limit, Some(3));
            assert_eq!(matching.scorer, Some(Scorer::Levenshtein));
        }
        _ => panic!("query 以外"),
    }
}

#[test]
fn test_list_category() {
    let cli = Cli::try_parse_from(["trash-sort", "list", "--category", "有害"]).unwrap();
    match cli.command {
        Commands::List { category, .. } => assert_eq!(category, Some(Category::Hazardous)),
        _ => panic!("list 以外"),
    }
}

#[test]
fn test_invalid_values_are_rejected() {
    assert!(Cli::try_parse_from(["trash-sort", "list", "--category", "厨房"]).is_err());
    assert!(Cli::try_parse_from(["trash-sort", "query", "电池", "--format", "xml"]).is_err());
    assert!(Cli::try_parse_from(["trash-sort", "query"]).is_err());
}

#[test]
fn test_config_flags() {
    let cli = Cli::try_parse_from(["trash-sort", "config", "--limit", "8", "--show"]).unwrap();
    match cli.command {
        Commands::Config { show, limit, reset, .. } => {
            assert!(show);
            assert_eq!(limit, Some(8));
            assert!(!reset);
        }
        _ => panic!("config 以外"),
    }
}
