use std::collections::HashSet;
use std::io;

use tron::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let tron_err: Error = io_err.into();

    match tron_err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ConfigError("invalid config".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid config.");

    let err = Error::DestinationExists { destination: "/home/me/demo".to_string() };
    assert_eq!(
        err.to_string(),
        "Unable to create new project because directory '/home/me/demo' already exists."
    );
}

#[test]
fn test_exit_codes_are_distinct() {
    let errors = [
        Error::IoError(io::Error::other("io")),
        Error::ConfigError("config".to_string()),
        Error::SourceMissing { template_dir: "t".to_string() },
        Error::ArchiveCreation { archive: "a".to_string(), reason: "r".to_string() },
        Error::DestinationExists { destination: "d".to_string() },
        Error::Cleanup { staging_dir: "s".to_string(), source: io::Error::other("busy") },
        Error::WalkError { path: "p".to_string(), reason: "r".to_string() },
    ];

    let codes: HashSet<i32> = errors.iter().map(Error::exit_code).collect();
    assert_eq!(codes.len(), errors.len());
    assert!(!codes.contains(&0));
}
