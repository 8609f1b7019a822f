use super::*;

fn parse_run(extra: &[&str]) -> RunArgs {
    let mut argv = vec!["evalreport", "run"];
    argv.extend_from_slice(extra);
    let cli = Cli::try_parse_from(argv).unwrap();
    let Command::Run(args) = cli.command;
    args
}

#[test]
fn test_cli_defaults() {
    let config = resolve_config(parse_run(&[])).unwrap();
    assert_eq!(config.results, PathBuf::from("../results/results_epoch_50.pkl"));
    assert_eq!(config.threshold, 0.5);
    assert_eq!(config.bins, 10);
    assert_eq!(config.format, ReportFormat::Text);
    assert_eq!(config.missing, MissingPolicy::Synthesize);
    assert!(config.out_dir.is_none());
}

#[test]
fn test_cli_overrides() {
    let config = resolve_config(parse_run(&[
        "--results",
        "r.json.gz",
        "--out",
        "out",
        "--threshold",
        "0.7",
        "--bins",
        "20",
        "--format",
        "json",
        "--strict",
    ]))
    .unwrap();
    assert_eq!(config.results, PathBuf::from("r.json.gz"));
    assert_eq!(config.out_dir, Some(PathBuf::from("out")));
    assert_eq!(config.threshold, 0.7);
    assert_eq!(config.bins, 20);
    assert_eq!(config.format, ReportFormat::Json);
    assert_eq!(config.missing, MissingPolicy::Fail);
}

#[test]
fn test_cli_rejects_invalid_values() {
    assert!(resolve_config(parse_run(&["--threshold", "1.5"])).is_err());
    assert!(resolve_config(parse_run(&["--threshold", "NaN"])).is_err());
    assert!(resolve_config(parse_run(&["--bins", "0"])).is_err());
    assert!(Cli::try_parse_from(["evalreport", "run", "--format", "xml"]).is_err());
    assert!(Cli::try_parse_from(["evalreport"]).is_err());
}

#[test]
fn test_run_missing_artifact_strict_fails() {
    let cli = Cli::try_parse_from([
        "evalreport",
        "run",
        "--results",
        "/nonexistent/evalreport/results.pkl",
        "--strict",
    ])
    .unwrap();
    let err = run(cli).unwrap_err();
    assert!(err.contains("not found"));
}
