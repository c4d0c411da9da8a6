//! Tests for stage-dependent logging output

use lighthouse_core::{Error, Field, Level};
use lighthouse_logger::{ConfigError, Logger, LoggerConfig, Output, Stage};
use std::env::VarError;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Writer capturing everything into a shared buffer
#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn output(&self) -> Output {
        Box::new(self.clone())
    }

    fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().map(|buf| buf.clone()).unwrap_or_default();
        String::from_utf8_lossy(&bytes)
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn json_lines(&self) -> Vec<serde_json::Value> {
        self.lines()
            .iter()
            .map(|line| serde_json::from_str(line).expect("each line should be JSON"))
            .collect()
    }
}

impl Write for Capture {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| io::Error::other("poisoned"))?
            .extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn failure() -> Error {
    Error::builder("connection reset")
        .code(104)
        .msg("en", "Upstream went away")
        .msg("ru", "Сервер разорвал соединение")
        .build()
}

#[test]
fn test_dev_stage_writes_json_with_error_fields() {
    let capture = Capture::default();
    let log = Logger::new(Stage::Dev, "en", Some(capture.output()));

    let err = failure();
    log.error(err.clone());

    let lines = capture.json_lines();
    assert_eq!(lines.len(), 1);
    let line = &lines[0];
    assert_eq!(line["level"], "ERROR");
    assert_eq!(line["msg"], "Upstream went away");
    assert_eq!(line["error_id"], serde_json::json!(err.digest().to_hex()));
    assert_eq!(line["cause"], "connection reset");
    assert_eq!(line["code"], "104");
    assert!(line.get("time").is_some());
    assert!(line.get("origin").is_none());
}

#[test]
fn test_error_message_uses_logger_language() {
    let capture = Capture::default();
    let log = Logger::new(Stage::Dev, "ru", Some(capture.output()));

    log.error(failure());

    assert_eq!(capture.json_lines()[0]["msg"], "Сервер разорвал соединение");
}

#[test]
fn test_error_with_level_controls_detail() {
    let capture = Capture::default();
    let log = Logger::new(Stage::Dev, "en", Some(capture.output()));

    log.error_with_level(failure().wrap("retry exhausted"), Level::HighDebug);

    let line = &capture.json_lines()[0];
    assert_eq!(line["msg"], "retry exhausted");
    assert_eq!(line["depth"], "2");
    assert_eq!(line["chain"], "retry exhausted <- connection reset");
    assert!(line["origin"]
        .as_str()
        .is_some_and(|origin| origin.contains("logger_test.rs")));
}

#[test]
fn test_prod_stage_drops_below_error() {
    let capture = Capture::default();
    let log = Logger::new(Stage::Prod, "en", Some(capture.output()));

    log.debug("cache miss", &[]);
    log.info("started", &[]);
    log.warn("slow query", &[Field::new("ms", 1200)]);
    log.error("fatal");

    let lines = capture.json_lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["msg"], "fatal");
    assert!(!log.enabled(log::Level::Warn));
    assert!(log.enabled(log::Level::Error));
}

#[test]
fn test_local_stage_is_human_readable() {
    let capture = Capture::default();
    let log = Logger::new(Stage::Local, "en", Some(capture.output()));

    log.info("listening", &[Field::new("port", 8080)]);
    log.debug("tick", &[]);

    let lines = capture.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("INFO"));
    assert!(lines[0].contains("listening"));
    assert!(lines[0].ends_with("port=\"8080\""));
    assert!(lines[1].contains("DEBUG"));
    assert!(serde_json::from_str::<serde_json::Value>(&lines[0]).is_err());
}

#[test]
fn test_warn_err_attaches_error_fields() {
    let capture = Capture::default();
    let log = Logger::new(Stage::Dev, "en", Some(capture.output()));

    let io_err = io::Error::new(io::ErrorKind::TimedOut, "read timed out");
    log.warn_err("falling back to cache", io_err, &[Field::new("key", "user:1")]);

    let line = &capture.json_lines()[0];
    assert_eq!(line["level"], "WARN");
    assert_eq!(line["msg"], "falling back to cache");
    assert_eq!(line["cause"], "read timed out");
    assert_eq!(line["error_level"], "error");
    assert_eq!(line["key"], "user:1");
}

#[test]
fn test_filter_overrides_stage_minimum() {
    let capture = Capture::default();
    let config = LoggerConfig {
        filter: Some("warn".to_string()),
        ..LoggerConfig::for_stage(Stage::Dev)
    };
    let log = Logger::with_config(config, Some(capture.output()));

    log.info("hidden", &[]);
    log.warn("shown", &[]);

    let lines = capture.json_lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["msg"], "shown");
}

#[test]
fn test_noop_logger_does_nothing() {
    let log = Logger::noop();
    assert!(log.is_noop());
    assert_eq!(log.stage(), None);
    assert_eq!(log.lang(), None);
    assert!(!log.enabled(log::Level::Error));

    log.error("ignored");
    log.error_with_level("ignored", Level::HighDebug);
    log.warn_err("ignored", "ignored", &[]);
    log.info("ignored", &[]);
    log.debug("ignored", &[]);
}

#[test]
fn test_config_from_lookup() {
    let config = LoggerConfig::from_lookup(|key| match key {
        "LIGHTHOUSE_STAGE" => Ok("Prod".to_string()),
        "LIGHTHOUSE_LANG" => Ok("ru".to_string()),
        _ => Err(VarError::NotPresent),
    })
    .expect("config should parse");

    assert_eq!(config.stage, Stage::Prod);
    assert_eq!(config.lang, "ru");
    assert_eq!(config.filter, None);

    let defaults = LoggerConfig::from_lookup(|_| Err(VarError::NotPresent))
        .expect("defaults should parse");
    assert_eq!(defaults, LoggerConfig::default());
    assert_eq!(defaults.stage, Stage::Local);
    assert_eq!(defaults.lang, "en");
}

#[test]
fn test_config_rejects_unknown_stage() {
    let result = LoggerConfig::from_lookup(|key| match key {
        "LIGHTHOUSE_STAGE" => Ok("staging".to_string()),
        _ => Err(VarError::NotPresent),
    });
    assert!(matches!(result, Err(ConfigError::Stage(_))));
}

#[test]
fn test_config_deserializes_with_defaults() {
    let config: LoggerConfig =
        serde_json::from_str(r#"{"stage":"dev"}"#).expect("config should deserialize");
    assert_eq!(config.stage, Stage::Dev);
    assert_eq!(config.lang, "en");
}

#[test]
fn test_stage_parsing() {
    assert_eq!("local".parse::<Stage>(), Ok(Stage::Local));
    assert_eq!("DEV".parse::<Stage>(), Ok(Stage::Dev));
    assert!("qa".parse::<Stage>().is_err());
    assert_eq!(Stage::Prod.to_string(), "prod");
}
