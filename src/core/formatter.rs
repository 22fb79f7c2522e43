//! Record formatters
//!
//! Provides the three interchangeable encodings for a log record:
//! - Line: `2024-01-02 03:04:05 INFO  [svc] started: port=8080`
//! - Tag: `time="2024-01-02 03:04:05" level="INFO" module="svc" msg="started" port=8080`
//! - Json: `{"level":"INFO","module":"svc","msg":"started","port":8080,"time":"2024-01-02 03:04:05"}`
//!
//! Every formatter writes exactly one newline-terminated line per record and
//! keeps no state between calls.

use super::record::Record;
use super::value::Value;
use std::borrow::Cow;
use std::io::{self, Write};

/// strftime pattern shared by record times and timestamp attributes
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Turns a record into bytes on a writer.
pub trait Formatter: Send + Sync {
    fn format(&self, w: &mut dyn Write, record: &Record<'_>) -> io::Result<()>;

    fn name(&self) -> &str {
        "custom"
    }
}

/// Format a record into a fresh buffer.
pub fn render(formatter: &dyn Formatter, record: &Record<'_>) -> io::Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(128);
    formatter.format(&mut buf, record)?;
    Ok(buf)
}

/// Adapter that lets a plain closure act as a [`Formatter`].
///
/// # Example
///
/// ```
/// use module_logger::core::formatter::{formatter_fn, render};
/// use module_logger::core::{LogLevel, Record};
///
/// let short = formatter_fn(|w, record| writeln!(w, "{} {}", record.level, record.message));
/// let record = Record::now(LogLevel::Info, "svc", "ready", &[]);
/// assert_eq!(render(&short, &record).unwrap(), b"INFO ready\n");
/// ```
pub struct FnFormatter<F> {
    func: F,
}

pub fn formatter_fn<F>(func: F) -> FnFormatter<F>
where
    F: Fn(&mut dyn Write, &Record<'_>) -> io::Result<()> + Send + Sync,
{
    FnFormatter { func }
}

impl<F> Formatter for FnFormatter<F>
where
    F: Fn(&mut dyn Write, &Record<'_>) -> io::Result<()> + Send + Sync,
{
    fn format(&self, w: &mut dyn Write, record: &Record<'_>) -> io::Result<()> {
        (self.func)(w, record)
    }
}

/// Human-readable `TIME LEVEL [MODULE] MESSAGE: key=value` lines
#[derive(Debug, Clone, Copy, Default)]
pub struct LineFormatter {
    #[cfg_attr(not(feature = "console"), allow(dead_code))]
    use_colors: bool,
}

impl LineFormatter {
    pub fn new() -> Self {
        Self { use_colors: false }
    }

    /// Colour the level column. Only has an effect with the `console` feature.
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    fn write_level(&self, w: &mut dyn Write, record: &Record<'_>) -> io::Result<()> {
        #[cfg(feature = "console")]
        if self.use_colors {
            use colored::Colorize;
            let padded = format!("{:<5}", record.level);
            return write!(w, "{}", padded.color(record.level.color_code()));
        }
        write!(w, "{:<5}", record.level)
    }

    fn write_value(w: &mut dyn Write, value: &Value) -> io::Result<()> {
        match value {
            Value::Str(s) => write!(w, "\"{}\"", single_line(s)),
            Value::Bytes(b) => write!(w, "\"{}\"", single_line(&String::from_utf8_lossy(b))),
            Value::Int(i) => write!(w, "{}", i),
            Value::Uint(u) => write!(w, "{}", u),
            Value::Float(f) => write!(w, "{:.6}", f),
            Value::Bool(b) => write!(w, "{}", b),
            Value::Time(t) => write!(w, "\"{}\"", t.format(TIME_FORMAT)),
            Value::Display(d) => write!(w, "\"{}\"", single_line(&d.to_string())),
            Value::Debug(d) => write!(w, "{}", single_line(&format!("{:?}", d))),
        }
    }
}

impl Formatter for LineFormatter {
    fn format(&self, w: &mut dyn Write, record: &Record<'_>) -> io::Result<()> {
        write!(w, "{} ", record.time.format(TIME_FORMAT))?;
        self.write_level(w, record)?;
        write!(
            w,
            " [{}] {}",
            single_line(record.module),
            single_line(record.message)
        )?;

        if !record.attrs.is_empty() {
            w.write_all(b":")?;
            for attr in record.attrs {
                write!(w, " {}=", single_line(&attr.key))?;
                Self::write_value(w, &attr.value)?;
            }
        }
        w.write_all(b"\n")
    }

    fn name(&self) -> &str {
        "line"
    }
}

/// `key="value"` tagged lines with escaped strings
#[derive(Debug, Clone, Copy, Default)]
pub struct TagFormatter;

impl TagFormatter {
    pub fn new() -> Self {
        Self
    }

    fn write_value(w: &mut dyn Write, value: &Value) -> io::Result<()> {
        match value {
            Value::Str(s) => w.write_all(quote(s).as_bytes()),
            Value::Bytes(b) => w.write_all(quote(&String::from_utf8_lossy(b)).as_bytes()),
            Value::Int(i) => write!(w, "{}", i),
            Value::Uint(u) => write!(w, "{}", u),
            Value::Float(f) => write!(w, "{:.6}", f),
            Value::Bool(b) => write!(w, "{}", b),
            Value::Time(t) => write!(w, "\"{}\"", t.format(TIME_FORMAT)),
            Value::Display(d) => w.write_all(quote(&d.to_string()).as_bytes()),
            Value::Debug(d) => w.write_all(quote(&format!("{:?}", d)).as_bytes()),
        }
    }
}

impl Formatter for TagFormatter {
    fn format(&self, w: &mut dyn Write, record: &Record<'_>) -> io::Result<()> {
        write!(
            w,
            "time=\"{}\" level=\"{}\" module={} msg={}",
            record.time.format(TIME_FORMAT),
            record.level,
            quote(record.module),
            quote(record.message)
        )?;
        for attr in record.attrs {
            write!(w, " {}=", tag_key(&attr.key))?;
            Self::write_value(w, &attr.value)?;
        }
        w.write_all(b"\n")
    }

    fn name(&self) -> &str {
        "tag"
    }
}

/// One JSON object per line
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Convert an attribute value to its JSON representation
    pub fn to_json_value(value: &Value) -> serde_json::Value {
        match value {
            Value::Str(s) => serde_json::Value::String(s.clone()),
            Value::Bytes(b) => serde_json::Value::String(String::from_utf8_lossy(b).into_owned()),
            Value::Int(i) => serde_json::Value::Number((*i).into()),
            Value::Uint(u) => serde_json::Value::Number((*u).into()),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Time(t) => serde_json::Value::String(t.format(TIME_FORMAT).to_string()),
            Value::Display(d) => serde_json::Value::String(d.to_string()),
            Value::Debug(d) => serde_json::Value::String(format!("{:?}", d)),
        }
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, w: &mut dyn Write, record: &Record<'_>) -> io::Result<()> {
        let mut json_obj = serde_json::Map::new();

        json_obj.insert(
            "time".to_string(),
            serde_json::Value::String(record.time.format(TIME_FORMAT).to_string()),
        );
        json_obj.insert(
            "level".to_string(),
            serde_json::Value::String(record.level.to_str().to_string()),
        );
        json_obj.insert(
            "module".to_string(),
            serde_json::Value::String(record.module.to_string()),
        );
        json_obj.insert(
            "msg".to_string(),
            serde_json::Value::String(record.message.to_string()),
        );

        // Attributes win over the fixed keys on collision
        for attr in record.attrs {
            json_obj.insert(attr.key.clone(), Self::to_json_value(&attr.value));
        }

        serde_json::to_writer(&mut *w, &serde_json::Value::Object(json_obj))?;
        w.write_all(b"\n")
    }

    fn name(&self) -> &str {
        "json"
    }
}

/// Escape CR/LF so a value cannot start a new log line.
fn single_line(s: &str) -> Cow<'_, str> {
    if s.contains(['\n', '\r']) {
        Cow::Owned(s.replace('\n', "\\n").replace('\r', "\\r"))
    } else {
        Cow::Borrowed(s)
    }
}

/// Keys are written bare unless they would break `key=value` parsing.
fn tag_key(key: &str) -> Cow<'_, str> {
    let needs_quoting = key.is_empty()
        || key
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || c == '=' || c == '"');
    if needs_quoting {
        Cow::Owned(quote(key))
    } else {
        Cow::Borrowed(key)
    }
}

/// Double-quote a string, escaping quotes, backslashes and control characters.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() && (c as u32) < 0x80 => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c if c.is_control() => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Attr, LogLevel};
    use chrono::{NaiveDate, NaiveDateTime};

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap()
    }

    fn render_str(formatter: &dyn Formatter, level: LogLevel, msg: &str, attrs: &[Attr]) -> String {
        let record = Record::new(fixed_time(), level, "svc", msg, attrs);
        String::from_utf8(render(formatter, &record).unwrap()).unwrap()
    }

    #[derive(Debug)]
    #[allow(dead_code)]
    struct Opaque {
        id: u32,
    }

    #[test]
    fn test_line_format() {
        let attrs = [Attr::new("port", 8080)];
        let out = render_str(&LineFormatter::new(), LogLevel::Info, "started", &attrs);
        assert_eq!(out, "2024-01-02 03:04:05 INFO  [svc] started: port=8080\n");
    }

    #[test]
    fn test_line_format_without_attrs() {
        let out = render_str(&LineFormatter::new(), LogLevel::Error, "boom", &[]);
        assert_eq!(out, "2024-01-02 03:04:05 ERROR [svc] boom\n");
    }

    #[test]
    fn test_line_format_value_types() {
        let attrs = [
            Attr::new("name", "api"),
            Attr::new("raw", b"bytes".as_slice()),
            Attr::new("ratio", 0.5),
            Attr::new("ok", true),
            Attr::new("at", fixed_time()),
            Attr::new("addr", Value::display(std::net::Ipv4Addr::LOCALHOST)),
            Attr::new("thing", Value::debug(Opaque { id: 7 })),
        ];
        let out = render_str(&LineFormatter::new(), LogLevel::Debug, "m", &attrs);
        assert_eq!(
            out,
            "2024-01-02 03:04:05 DEBUG [svc] m: name=\"api\" raw=\"bytes\" ratio=0.500000 ok=true \
             at=\"2024-01-02 03:04:05\" addr=\"127.0.0.1\" thing=Opaque { id: 7 }\n"
        );
    }

    #[test]
    fn test_line_format_stays_on_one_line() {
        let attrs = [Attr::new("note", "a\nb")];
        let out = render_str(&LineFormatter::new(), LogLevel::Info, "x\nFAKE entry", &attrs);
        assert_eq!(out.matches('\n').count(), 1);
        assert!(out.contains("x\\nFAKE entry"));
        assert!(out.contains("note=\"a\\nb\""));
    }

    #[test]
    fn test_line_format_keys_and_module_stay_on_one_line() {
        let attrs = [Attr::new("user\n2024-01-02 03:04:05 FATAL [auth] forged", "x")];
        let record = Record::new(fixed_time(), LogLevel::Info, "svc\r\nevil", "m", &attrs);
        let out = String::from_utf8(render(&LineFormatter::new(), &record).unwrap()).unwrap();

        assert_eq!(out.lines().count(), 1);
        assert_eq!(
            out,
            "2024-01-02 03:04:05 INFO  [svc\\r\\nevil] m: \
             user\\n2024-01-02 03:04:05 FATAL [auth] forged=\"x\"\n"
        );
    }

    #[test]
    fn test_tag_format_quotes_awkward_keys() {
        let attrs = [
            Attr::new("plain_key", 1),
            Attr::new("two words", 2),
            Attr::new("a=b", 3),
            Attr::new("line\nbreak", 4),
            Attr::new("", 5),
        ];
        let out = render_str(&TagFormatter::new(), LogLevel::Info, "m", &attrs);
        assert_eq!(out.lines().count(), 1);
        assert!(out.ends_with(
            " plain_key=1 \"two words\"=2 \"a=b\"=3 \"line\\nbreak\"=4 \"\"=5\n"
        ));
    }

    #[cfg(feature = "console")]
    #[test]
    fn test_line_format_colors_level_after_padding() {
        colored::control::set_override(true);
        let attrs = [Attr::new("port", 8080)];
        let out = render_str(&LineFormatter::new().with_colors(true), LogLevel::Info, "m", &attrs);
        colored::control::unset_override();

        assert_eq!(
            out,
            "2024-01-02 03:04:05 \u{1b}[32mINFO \u{1b}[0m [svc] m: port=8080\n"
        );
        assert_eq!(LogLevel::Info.color_code(), colored::Color::Green);
    }

    #[test]
    fn test_tag_format() {
        let attrs = [Attr::new("port", 8080)];
        let out = render_str(&TagFormatter::new(), LogLevel::Info, "started", &attrs);
        assert_eq!(
            out,
            "time=\"2024-01-02 03:04:05\" level=\"INFO\" module=\"svc\" msg=\"started\" port=8080\n"
        );
    }

    #[test]
    fn test_tag_format_escapes() {
        let attrs = [
            Attr::new("q", "say \"hi\"\tnow"),
            Attr::new("bell", "\u{7}"),
            Attr::new("thing", Value::debug("inner")),
            Attr::new("f", 2.25f64),
        ];
        let out = render_str(&TagFormatter::new(), LogLevel::Warning, "line1\nline2", &attrs);
        assert_eq!(
            out,
            "time=\"2024-01-02 03:04:05\" level=\"WARN\" module=\"svc\" msg=\"line1\\nline2\" \
             q=\"say \\\"hi\\\"\\tnow\" bell=\"\\x07\" thing=\"\\\"inner\\\"\" f=2.250000\n"
        );
    }

    #[test]
    fn test_json_format() {
        let attrs = [Attr::new("port", 8080)];
        let out = render_str(&JsonFormatter::new(), LogLevel::Info, "started", &attrs);
        assert!(out.ends_with('\n'));
        assert_eq!(out.matches('\n').count(), 1);

        let parsed: serde_json::Value = serde_json::from_str(out.trim_end()).unwrap();
        assert_eq!(parsed["time"], "2024-01-02 03:04:05");
        assert_eq!(parsed["level"], "INFO");
        assert_eq!(parsed["module"], "svc");
        assert_eq!(parsed["msg"], "started");
        assert_eq!(parsed["port"], 8080);
    }

    #[test]
    fn test_json_value_types() {
        let attrs = [
            Attr::new("raw", b"bytes".as_slice()),
            Attr::new("ratio", 0.5),
            Attr::new("nan", f64::NAN),
            Attr::new("ok", false),
            Attr::new("big", u64::MAX),
            Attr::new("at", fixed_time()),
            Attr::new("addr", Value::display(std::net::Ipv4Addr::LOCALHOST)),
            Attr::new("thing", Value::debug(Opaque { id: 7 })),
        ];
        let out = render_str(&JsonFormatter::new(), LogLevel::Trace, "m", &attrs);
        let parsed: serde_json::Value = serde_json::from_str(out.trim_end()).unwrap();

        assert_eq!(parsed["level"], "TRACE");
        assert_eq!(parsed["raw"], "bytes");
        assert_eq!(parsed["ratio"], 0.5);
        assert!(parsed["nan"].is_null());
        assert_eq!(parsed["ok"], false);
        assert_eq!(parsed["big"], u64::MAX);
        assert_eq!(parsed["at"], "2024-01-02 03:04:05");
        assert_eq!(parsed["addr"], "127.0.0.1");
        assert_eq!(parsed["thing"], "Opaque { id: 7 }");
    }

    #[test]
    fn test_json_attribute_overrides_fixed_key() {
        let attrs = [Attr::new("module", "override")];
        let out = render_str(&JsonFormatter::new(), LogLevel::Info, "m", &attrs);
        let parsed: serde_json::Value = serde_json::from_str(out.trim_end()).unwrap();
        assert_eq!(parsed["module"], "override");
    }

    #[test]
    fn test_custom_formatter() {
        let short = formatter_fn(|w, record| writeln!(w, "{}|{}", record.level, record.message));
        let out = render_str(&short, LogLevel::Fatal, "down", &[]);
        assert_eq!(out, "FATAL|down\n");
        assert_eq!(short.name(), "custom");
    }

    #[test]
    fn test_formatter_names() {
        assert_eq!(LineFormatter::new().name(), "line");
        assert_eq!(TagFormatter::new().name(), "tag");
        assert_eq!(JsonFormatter::new().name(), "json");
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote("plain"), "\"plain\"");
        assert_eq!(quote("back\\slash"), "\"back\\\\slash\"");
        assert_eq!(quote("\u{85}"), "\"\\u0085\"");
    }
}
