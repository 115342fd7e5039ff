use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["influfinder"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
    assert!(!cli.json);
}

#[test]
fn parses_tiers_without_reading_config() {
    // parsing never touches INFLUFINDER_* variables; config is loaded afterwards
    let cli = Cli::try_parse_from(["influfinder", "tiers"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Tiers)));
    assert!(cli.catalog.is_none());
}

#[test]
fn help_is_rendered_by_the_parser() {
    let err = Cli::try_parse_from(["influfinder", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}

#[test]
fn log_filter_falls_back_on_bad_level() {
    // an unparseable configured level must not abort startup
    let _filter = log_filter("info,[{bad");
    let _filter = log_filter("debug");
}

#[test]
fn parses_tier_level() {
    let cli = Cli::try_parse_from(["influfinder", "tier", "3"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Tier { level: 3 })));
}

#[test]
fn rejects_tier_above_legend() {
    assert!(Cli::try_parse_from(["influfinder", "tier", "6"]).is_err());
}

#[test]
fn progress_accepts_negative_count() {
    let cli = Cli::try_parse_from(["influfinder", "progress", "-4"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Progress { completed: -4 })
    ));
}

#[test]
fn global_json_flag_after_subcommand() {
    let cli = Cli::try_parse_from(["influfinder", "progress", "7", "--json"]).unwrap();
    assert!(cli.json);
}

#[test]
fn collabs_list_defaults_to_all_tab() {
    let cli = Cli::try_parse_from(["influfinder", "collabs", "list"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Collabs {
            command: CollabCommands::List {
                tab: TabFilter::All
            }
        })
    ));
}

#[test]
fn collabs_list_with_tab() {
    let cli =
        Cli::try_parse_from(["influfinder", "collabs", "list", "--tab", "in_review"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Collabs {
            command: CollabCommands::List {
                tab: TabFilter::Only(influfinder_core::CollabCategory::InReview)
            }
        })
    ));
}

#[test]
fn collabs_list_rejects_unknown_tab() {
    assert!(Cli::try_parse_from(["influfinder", "collabs", "list", "--tab", "archived"]).is_err());
}

#[test]
fn offers_check_takes_id_and_catalog() {
    let cli = Cli::try_parse_from([
        "influfinder",
        "--catalog",
        "/tmp/catalog.yaml",
        "offers",
        "check",
        "5",
    ])
    .unwrap();
    assert_eq!(cli.catalog.as_deref(), Some(Path::new("/tmp/catalog.yaml")));
    assert!(matches!(
        cli.command,
        Some(Commands::Offers {
            command: OfferCommands::Check { ref offer_id }
        }) if offer_id == "5"
    ));
}

#[test]
fn offers_list_category() {
    let cli = Cli::try_parse_from(["influfinder", "offers", "list", "--category", "food"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Offers {
            command: OfferCommands::List { ref category }
        }) if category == "food"
    ));
}

#[test]
fn progress_bar_fills_proportionally() {
    assert_eq!(output::progress_bar(0, 10), "[----------]");
    assert_eq!(output::progress_bar(57, 10), "[#####-----]");
    assert_eq!(output::progress_bar(100, 10), "[##########]");
}
