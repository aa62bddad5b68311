use std::fs;

use clap::Parser;

use crate::Cli;

#[test]
fn test_cli_flags_override_config_file() {
    let path = std::env::temp_dir().join(format!("hunza-cli-{}.json", std::process::id()));
    fs::write(
        &path,
        r#"{"dictionary": {"use_embedded": false}, "translator": {"max_ngram": 0}}"#,
    )
    .unwrap();

    let cli = Cli::try_parse_from([
        "hunza",
        "--config",
        path.to_str().unwrap(),
        "--lexicon",
        "extra.json",
        "--max-ngram",
        "3",
        "stats",
    ])
    .unwrap();
    let result = cli.load_config();
    fs::remove_file(&path).ok();

    let config = result.unwrap();
    assert_eq!(config.translator.max_ngram, 3);
    assert!(!config.dictionary.use_embedded);
    assert_eq!(config.dictionary.additional_paths, vec!["extra.json".to_string()]);
}

#[test]
fn test_invalid_config_without_override_is_rejected() {
    let cli = Cli::try_parse_from(["hunza", "--no-embedded", "stats"]).unwrap();
    assert!(cli.load_config().is_err());
}
