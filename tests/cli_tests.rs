//! End-to-end runs of the command line front-end

use std::io::Cursor;

use cofactor::cli::{parse_args, run, CliConfig};
use cofactor::core::BigInt;

fn run_with_input(config: &CliConfig, input: &str) -> (anyhow::Result<BigInt>, String) {
    let mut out = Vec::new();
    let result = run(config, Cursor::new(input.as_bytes().to_vec()), &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_interactive_session() {
    let config = CliConfig::default();
    let (result, out) = run_with_input(&config, "3\n1\n2\n3\n4\n5\n6\n7\n8\n10\n");

    assert_eq!(result.unwrap(), BigInt::from(-3));
    assert!(out.contains("[1, 2, 3]\n[4, 5, 6]\n[7, 8, 10]"));
    assert!(out.contains("Determinant: -3"));
}

#[test]
fn test_interactive_session_recovers_from_bad_entries() {
    let config = CliConfig::default();
    let (result, out) = run_with_input(&config, "zero\n0\n2\n1\nx\n2\n3\n4\n");

    assert_eq!(result.unwrap(), BigInt::from(-2));
    assert!(out.contains("Please enter a positive integer!"));
    assert!(out.contains("Please enter a valid integer!"));
}

#[test]
fn test_truncated_input_fails() {
    let config = CliConfig::default();
    let (result, _) = run_with_input(&config, "2\n1\n2\n");
    assert!(result.is_err());
}

#[test]
fn test_json_file() {
    let path = std::env::temp_dir().join(format!("cofactor-cli-{}.json", std::process::id()));
    std::fs::write(&path, "[[2, 0, 1], [1, 3, 2], [1, 1, 1]]").unwrap();

    let args = vec!["--file".to_string(), path.display().to_string()];
    let config = parse_args(&args).unwrap();
    let (result, out) = run_with_input(&config, "");
    let _ = std::fs::remove_file(&path);

    // 2*(3-2) - 0 + 1*(1-3) = 0
    assert_eq!(result.unwrap(), BigInt::from(0));
    assert!(out.contains("Determinant: 0"));
}

#[test]
fn test_non_square_file_is_rejected() {
    let path = std::env::temp_dir().join(format!("cofactor-cli-ns-{}.json", std::process::id()));
    std::fs::write(&path, "[[1, 2], [3, 4], [5, 6]]").unwrap();

    let args = vec!["--file".to_string(), path.display().to_string()];
    let config = parse_args(&args).unwrap();
    let (result, _) = run_with_input(&config, "");
    let _ = std::fs::remove_file(&path);

    let err = result.unwrap_err();
    assert!(format!("{:#}", err).contains("not square"));
}

#[test]
fn test_max_order_flag_reprompts_for_order() {
    let config = parse_args(&["--max-order".to_string(), "2".to_string()]).unwrap();
    let (result, out) = run_with_input(&config, "100000000000000\n3\n2\n1\n2\n3\n4\n");

    assert_eq!(result.unwrap(), BigInt::from(-2));
    assert_eq!(out.matches("no larger than 2").count(), 2);
}

#[test]
fn test_max_order_flag_rejects_large_file() {
    let path = std::env::temp_dir().join(format!("cofactor-cli-big-{}.json", std::process::id()));
    std::fs::write(&path, "[[1, 0], [0, 1]]").unwrap();

    let args: Vec<String> = vec!["--file", &path.display().to_string(), "--max-order", "1"]
        .into_iter()
        .map(String::from)
        .collect();
    let config = parse_args(&args).unwrap();
    let (result, _) = run_with_input(&config, "");
    let _ = std::fs::remove_file(&path);

    let err = result.unwrap_err();
    assert!(format!("{:#}", err).contains("exceeds the configured maximum"));
}

#[test]
fn test_max_order_flag_off() {
    let config = parse_args(&["--max-order".to_string(), "off".to_string()]).unwrap();
    assert_eq!(config.engine_config().max_order, None);
}
