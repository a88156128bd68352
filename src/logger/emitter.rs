//! The logger context and its emit path.

use std::fmt::Write as _;
use std::path::Path;
use std::sync::Arc;

use arc_swap::ArcSwap;
use chrono::{DateTime, Local, Utc};

use crate::color::{Colorizer, ColorizerRegistry};
use crate::config::schema::{ConsoleTarget, LoggerConfig};
use crate::format::{printf, Arg, PrettyPrinter};
use crate::logger::level::Level;
use crate::logger::record::LogLine;
use crate::logger::sink::{ConsoleSink, JsonlSink};
use crate::logger::thread_id;

/// Registry, live configuration and sinks behind one handle.
///
/// Share it by reference or `Arc`; every method takes `&self`.
#[derive(Debug)]
pub struct Logger {
    config: ArcSwap<LoggerConfig>,
    registry: ColorizerRegistry,
    console: ConsoleSink,
    file: JsonlSink,
}

impl Logger {
    /// Logger writing to the console stream named in `config`.
    pub fn new(config: LoggerConfig) -> Self {
        let console = match config.console {
            ConsoleTarget::Stderr => ConsoleSink::stderr(),
            ConsoleTarget::Stdout => ConsoleSink::stdout(),
        };
        Self::build(config, console)
    }

    /// Logger writing console output to `writer` instead.
    pub fn with_console<W>(config: LoggerConfig, writer: W) -> Self
    where
        W: std::io::Write + Send + 'static,
    {
        Self::build(config, ConsoleSink::new(writer))
    }

    fn build(config: LoggerConfig, console: ConsoleSink) -> Self {
        let registry = ColorizerRegistry::with_defaults();
        register_configured(&registry, &config);
        Self {
            config: ArcSwap::from_pointee(config),
            registry,
            console,
            file: JsonlSink::new(),
        }
    }

    /// Swap in a new configuration. Custom colorizers it defines are
    /// registered first; the console stream changes only when the target does.
    pub fn reconfigure(&self, config: LoggerConfig) {
        register_configured(&self.registry, &config);
        let previous = self.config.load();
        if previous.console != config.console {
            match config.console {
                ConsoleTarget::Stderr => self.console.replace(std::io::stderr()),
                ConsoleTarget::Stdout => self.console.replace(std::io::stdout()),
            }
        }
        tracing::debug!(
            level = %config.level,
            file_path = %config.file_path,
            use_tid = config.use_tid,
            "Logger reconfigured"
        );
        let disable_file = config.file_path.is_empty();
        self.config.store(Arc::new(config));
        // Close only after the store; an in-flight emit may still reopen it before.
        if disable_file {
            self.file.close();
        }
    }

    /// Snapshot of the current configuration.
    pub fn config(&self) -> Arc<LoggerConfig> {
        self.config.load_full()
    }

    pub fn registry(&self) -> &ColorizerRegistry {
        &self.registry
    }

    /// Register a custom transform under `name`.
    pub fn register<F>(&self, name: &str, f: F) -> Colorizer
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.registry.register(name, f)
    }

    /// Look up a colorizer, falling back to `NoColor`.
    pub fn colorizer(&self, name: &str) -> Colorizer {
        self.registry.resolve(name)
    }

    /// Log one message.
    ///
    /// The JSONL record is appended whenever a file path is configured,
    /// regardless of level. The console line is written only when the
    /// configured level permits `level`. Failures are swallowed.
    pub fn emit(&self, level: Level, colorizer: &Colorizer, format: &str, args: &[Arg]) {
        let config = self.config.load();
        let now = Local::now();
        let tid = config.use_tid.then(thread_id::current);

        if !config.file_path.is_empty() {
            let record = LogLine::new(
                now.with_timezone(&Utc),
                tid,
                level,
                colorizer.name(),
                format,
                args,
            );
            self.persist(Path::new(&config.file_path), &record);
        }

        if config.level.permits(level) {
            let line = self.compose(&config, now, tid, level, colorizer, format, args);
            if let Err(e) = self.console.write_line(&line) {
                tracing::debug!(error = %e, "Console write failed");
            }
        }
    }

    /// [`emit`](Self::emit) with the colorizer looked up by name.
    pub fn emit_named(&self, level: Level, colorizer: &str, format: &str, args: &[Arg]) {
        let colorizer = self.registry.resolve(colorizer);
        self.emit(level, &colorizer, format, args);
    }

    /// The console line `emit` would write right now, ignoring the level gate.
    pub fn render_line(&self, level: Level, colorizer: &Colorizer, format: &str, args: &[Arg]) -> String {
        let config = self.config.load();
        let tid = config.use_tid.then(thread_id::current);
        self.compose(&config, Local::now(), tid, level, colorizer, format, args)
    }

    fn persist(&self, path: &Path, record: &LogLine) {
        let line = match record.to_json_line() {
            Ok(line) => line,
            Err(e) => {
                tracing::debug!(error = %e, "Log record serialization failed");
                return;
            }
        };
        if let Err(e) = self.file.append(path, &line) {
            tracing::debug!(path = %path.display(), error = %e, "Log file append failed");
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn compose(
        &self,
        config: &LoggerConfig,
        now: DateTime<Local>,
        tid: Option<u64>,
        level: Level,
        colorizer: &Colorizer,
        format: &str,
        args: &[Arg],
    ) -> String {
        let pretty = PrettyPrinter::new(config.max_pretty_bytes, config.max_hex_preview);
        let rendered: Vec<String> = args.iter().map(|arg| pretty.render(arg)).collect();

        let mut body = printf::expand_with(format, rendered.as_slice(), |text| colorizer.apply(text));
        if !body.ends_with('\n') {
            body.push('\n');
        }

        let mut line = String::with_capacity(body.len() + 64);
        if !config.time_format.trim().is_empty() {
            let mut stamp = String::new();
            // An invalid strftime pattern yields fmt::Error instead of a panic.
            if write!(stamp, "{}", now.format(&config.time_format)).is_ok() {
                line.push_str(&self.registry.resolve(&config.time_color).apply(&stamp));
                line.push(' ');
            }
        }

        line.push('[');
        line.push_str(&colorizer.apply(level.as_str()));
        line.push(']');
        if let Some(tid) = tid {
            line.push('[');
            line.push_str(&colorizer.apply(&tid.to_string()));
            line.push(']');
        }
        line.push(' ');
        line.push_str(&body);
        line
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LoggerConfig::default())
    }
}

fn register_configured(registry: &ColorizerRegistry, config: &LoggerConfig) {
    for def in &config.colorizers {
        match def.build() {
            Ok(colorizer) => {
                registry.register_colorizer(colorizer);
            }
            Err(e) => {
                tracing::warn!(name = %def.name, error = %e, "Skipping invalid colorizer definition");
            }
        }
    }
}
