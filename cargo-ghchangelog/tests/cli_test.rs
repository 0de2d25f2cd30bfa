use cargo_ghchangelog::cli::{Args, CargoCli, Command, GhchangelogCli};
use clap::Parser;
use ghthanks::RepoName;
use std::path::PathBuf;

fn args() -> Args {
    Args {
        repository: None,
        api_url: "https://api.github.com".to_string(),
        github_token: None,
        no_thanks: false,
        config: PathBuf::from(".config/ghchangelog.toml"),
        verbose: false,
    }
}

#[test]
fn test_parse_as_cargo_subcommand() {
    let CargoCli::Ghchangelog(cli) =
        CargoCli::try_parse_from(["cargo", "ghchangelog", "--no-thanks", "entry", "HEAD", "HEAD~1"])
            .unwrap();

    assert!(cli.args.no_thanks);
    match cli.command {
        Command::Entry { revs } => assert_eq!(revs, vec!["HEAD", "HEAD~1"]),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_direct_invocation_with_trailing_globals() {
    let cli = GhchangelogCli::try_parse_from([
        "cargo-ghchangelog",
        "thanks",
        "abc123",
        "--repository",
        "my_gh_org/my_gh_repo",
        "--api-url",
        "http://127.0.0.1:8080",
    ])
    .unwrap();

    assert_eq!(cli.args.repository.as_deref(), Some("my_gh_org/my_gh_repo"));
    assert_eq!(cli.args.api_url, "http://127.0.0.1:8080");
    assert!(matches!(cli.command, Command::Thanks { .. }));
}

#[test]
fn test_defaults() {
    let cli = GhchangelogCli::try_parse_from(["cargo-ghchangelog", "repo"]).unwrap();
    assert_eq!(cli.args.api_url, "https://api.github.com");
    assert_eq!(cli.args.config, PathBuf::from(".config/ghchangelog.toml"));
    assert!(!cli.args.no_thanks);
    assert!(matches!(cli.command, Command::Repo));
}

#[test]
fn test_revs_are_required() {
    assert!(GhchangelogCli::try_parse_from(["cargo-ghchangelog", "thanks"]).is_err());
    assert!(GhchangelogCli::try_parse_from(["cargo-ghchangelog", "entry"]).is_err());
}

#[test]
fn test_repo_name_from_flag() {
    let mut args = args();
    args.repository = Some("meltano/meltano".to_string());
    assert_eq!(args.repo_name().unwrap(), RepoName::new("meltano", "meltano"));
}

#[test]
fn test_repo_name_invalid_flag() {
    let mut args = args();
    args.repository = Some("meltano".to_string());
    assert!(args.repo_name().is_err());
}

#[test]
fn test_github_token_from_flag() {
    let mut args = args();
    args.github_token = Some("flag_token".to_string());
    assert_eq!(args.github_token().as_deref(), Some("flag_token"));
}
