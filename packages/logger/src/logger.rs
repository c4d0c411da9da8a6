//! Stage-aware logger for structured errors

use crate::config::{ConfigError, LoggerConfig};
use crate::format;
use crate::stage::Stage;
use env_logger::{Target, WriteStyle};
use lighthouse_core::sperror::BoxError;
use lighthouse_core::{ensure, hooks, Field, Level};
use log::{Log, Metadata, Record};
use std::fmt;
use std::io::Write;

/// Target attached to every record
pub const TARGET: &str = "lighthouse";

/// Destination for log lines
pub type Output = Box<dyn Write + Send + 'static>;

/// Logger that renders structured errors for one stage
///
/// Each logger owns its own sink, so several can live side by side without
/// touching the global `log` facade.
#[derive(Default)]
pub struct Logger {
    inner: Option<Inner>,
}

struct Inner {
    sink: env_logger::Logger,
    stage: Stage,
    lang: String,
}

impl Logger {
    /// Logger that drops everything
    ///
    /// ```
    /// use lighthouse_logger::Logger;
    ///
    /// let log = Logger::noop();
    /// log.error("test error");
    /// assert!(log.is_noop());
    /// ```
    #[must_use]
    pub fn noop() -> Self {
        Self { inner: None }
    }

    /// Create a logger for `stage` rendering messages in `lang`
    ///
    /// Writes to stdout when `out` is `None`. The language only selects
    /// which translation of an error's message is logged.
    #[must_use]
    pub fn new<L: Into<String>>(stage: Stage, lang: L, out: Option<Output>) -> Self {
        Self::with_config(
            LoggerConfig {
                stage,
                lang: lang.into(),
                filter: None,
            },
            out,
        )
    }

    /// Create a logger from explicit settings
    #[must_use]
    pub fn with_config(config: LoggerConfig, out: Option<Output>) -> Self {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(config.stage.min_level());
        if let Some(filter) = &config.filter {
            builder.parse_filters(filter);
        }

        match out {
            Some(out) => {
                builder.target(Target::Pipe(out)).write_style(WriteStyle::Never);
            }
            None => {
                builder.target(Target::Stdout);
            }
        }

        if config.stage.is_json() {
            builder.format(format::json);
        } else {
            builder.format(format::pretty);
        }

        Self {
            inner: Some(Inner {
                sink: builder.build(),
                stage: config.stage,
                lang: config.lang,
            }),
        }
    }

    /// Create a logger configured from the environment
    ///
    /// See [`LoggerConfig::from_env`] for the variables read.
    pub fn from_env(out: Option<Output>) -> Result<Self, ConfigError> {
        Ok(Self::with_config(LoggerConfig::from_env()?, out))
    }

    /// Whether this logger drops everything
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.inner.is_none()
    }

    /// Configured stage, `None` for the no-op logger
    #[must_use]
    pub fn stage(&self) -> Option<Stage> {
        self.inner.as_ref().map(|inner| inner.stage)
    }

    /// Configured language, `None` for the no-op logger
    #[must_use]
    pub fn lang(&self) -> Option<&str> {
        self.inner.as_ref().map(|inner| inner.lang.as_str())
    }

    /// Whether records at `level` would be written
    #[must_use]
    pub fn enabled(&self, level: log::Level) -> bool {
        self.inner.as_ref().is_some_and(|inner| {
            inner
                .sink
                .enabled(&Metadata::builder().level(level).target(TARGET).build())
        })
    }

    /// Log a warning
    pub fn warn(&self, msg: &str, fields: &[Field]) {
        self.emit(log::Level::Warn, msg, fields);
    }

    /// Log a warning together with an error rendered at [`Level::Error`]
    #[track_caller]
    pub fn warn_err<E: Into<BoxError>>(&self, msg: &str, err: E, fields: &[Field]) {
        if self.is_noop() {
            return;
        }
        let err = ensure(err);
        let mut all = hooks::fields(&err, Level::Error);
        all.extend_from_slice(fields);
        self.emit(log::Level::Warn, msg, &all);
    }

    /// Log an error with the default [`Level::Error`] detail
    #[track_caller]
    pub fn error<E: Into<BoxError>>(&self, err: E) {
        self.error_with_level(err, Level::Error);
    }

    /// Log an error with the detail selected by `lvl`
    ///
    /// The message is the error's text in the logger's language.
    #[track_caller]
    pub fn error_with_level<E: Into<BoxError>>(&self, err: E, lvl: Level) {
        let Some(inner) = &self.inner else {
            return;
        };
        let err = ensure(err);
        let fields = hooks::fields(&err, lvl);
        self.emit(log::Level::Error, &err.msg(&inner.lang), &fields);
    }

    /// Log additional debug information
    pub fn debug(&self, msg: &str, fields: &[Field]) {
        self.emit(log::Level::Debug, msg, fields);
    }

    /// Log additional information
    pub fn info(&self, msg: &str, fields: &[Field]) {
        self.emit(log::Level::Info, msg, fields);
    }

    fn emit(&self, level: log::Level, msg: &str, fields: &[Field]) {
        let Some(inner) = &self.inner else {
            return;
        };
        let kvs: Vec<(&str, &str)> = fields
            .iter()
            .map(|field| (field.key.as_ref(), field.value.as_str()))
            .collect();

        inner.sink.log(
            &Record::builder()
                .args(format_args!("{msg}"))
                .level(level)
                .target(TARGET)
                .key_values(&kvs)
                .build(),
        );
        inner.sink.flush();
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Some(inner) => f
                .debug_struct("Logger")
                .field("stage", &inner.stage)
                .field("lang", &inner.lang)
                .finish(),
            None => f.write_str("Logger(noop)"),
        }
    }
}
