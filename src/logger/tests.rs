use std::io::Write;
use std::path::PathBuf;

use tracing_subscriber::fmt::MakeWriter;

use crate::logger::config::*;
use crate::logger::writer::LogFileWriter;

fn file_config(path: PathBuf, append: bool) -> FileConfig {
    FileConfig {
        enabled: true,
        path,
        append,
        format: LogFormat::Json,
    }
}

mod config_tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = LoggerConfig::default();
        assert!(config.console.enabled);
        assert!(!config.file.enabled);
        assert_eq!(config.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_all_outputs_disabled_is_rejected() {
        let mut config = LoggerConfig::default();
        config.console.enabled = false;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_level_is_case_insensitive_and_checked() {
        let mut config = LoggerConfig::default();
        config.level = "DEBUG".to_string();
        assert!(config.validate().is_ok());

        config.level = "verbose".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_enabled_file_needs_a_path() {
        let config = file_config(PathBuf::new(), true);
        assert!(config.validate().is_err());

        let disabled = FileConfig {
            enabled: false,
            ..config
        };
        assert!(disabled.validate().is_ok());
    }

    #[test]
    fn test_log_format_parsing() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("Compact".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert_eq!("FULL".parse::<LogFormat>().unwrap(), LogFormat::Full);
        assert!("pretty".parse::<LogFormat>().is_err());
        assert_eq!(LogFormat::default().as_str(), "full");
    }
}

mod writer_tests {
    use super::*;

    #[test]
    fn test_writer_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/logs/app.log");

        let writer = LogFileWriter::new(&file_config(path.clone(), true)).unwrap();
        writer.make_writer().write_all(b"hello\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");
    }

    #[test]
    fn test_append_keeps_existing_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        std::fs::write(&path, "first\n").unwrap();

        let writer = LogFileWriter::new(&file_config(path.clone(), true)).unwrap();
        writer.make_writer().write_all(b"second\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_truncate_discards_existing_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        std::fs::write(&path, "stale\n").unwrap();

        let writer = LogFileWriter::new(&file_config(path.clone(), false)).unwrap();
        writer.make_writer().write_all(b"fresh\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh\n");
    }
}
