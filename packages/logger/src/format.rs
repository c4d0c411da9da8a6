//! Record formatting for each stage

use env_logger::fmt::Formatter;
use log::kv::{self, Key, Value, VisitSource};
use log::Record;
use std::io::{self, Write};

struct Collect(Vec<(String, String)>);

impl<'kvs> VisitSource<'kvs> for Collect {
    fn visit_pair(&mut self, key: Key<'kvs>, value: Value<'kvs>) -> Result<(), kv::Error> {
        self.0.push((key.to_string(), value.to_string()));
        Ok(())
    }
}

/// Key-values attached to a record, in attachment order
pub(crate) fn key_values(record: &Record<'_>) -> Vec<(String, String)> {
    let mut collect = Collect(Vec::new());
    // Collecting into a Vec never fails
    let _ = record.key_values().visit(&mut collect);
    collect.0
}

/// `2026-01-02T03:04:05.000000Z ERROR message key="value" ...`
pub(crate) fn pretty(buf: &mut Formatter, record: &Record<'_>) -> io::Result<()> {
    let timestamp = buf.timestamp_micros();
    write!(buf, "{timestamp} {:<5} {}", record.level(), record.args())?;
    for (key, value) in key_values(record) {
        write!(buf, " {key}={value:?}")?;
    }
    writeln!(buf)
}

/// One JSON object per line
pub(crate) fn json(buf: &mut Formatter, record: &Record<'_>) -> io::Result<()> {
    let mut line = serde_json::Map::new();
    line.insert("time".into(), buf.timestamp_micros().to_string().into());
    line.insert("level".into(), record.level().as_str().into());
    line.insert("msg".into(), record.args().to_string().into());
    for (key, value) in key_values(record) {
        line.insert(key, value.into());
    }

    serde_json::to_writer(&mut *buf, &line)?;
    writeln!(buf)
}
