//! Pipeline progress logging.
//!
//! Thin helpers over `tracing` so pipeline stages report progress with a
//! consistent `status` field. The binary installs the subscriber.

/// Log level for progress messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Success => "success",
            LogLevel::Warning => "warning",
        }
    }
}

/// A single progress message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Nesting depth, rendered as leading indentation
    pub indent: u8,
}

impl LogEntry {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Info, message: message.into(), indent: 0 }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Success, message: message.into(), indent: 0 }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Warning, message: message.into(), indent: 0 }
    }

    pub fn with_indent(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }

    /// Message with its indentation applied.
    pub fn rendered(&self) -> String {
        format!("{}{}", "   ".repeat(self.indent as usize), self.message)
    }

    /// Emit this entry as a `tracing` event.
    pub fn emit(&self) {
        let status = self.level.as_str();
        let message = self.rendered();
        match self.level {
            LogLevel::Info | LogLevel::Success => tracing::info!(status, "{}", message),
            LogLevel::Warning => tracing::warn!(status, "{}", message),
        }
    }
}

pub fn log_info(msg: impl Into<String>) {
    LogEntry::info(msg).emit();
}

pub fn log_success(msg: impl Into<String>) {
    LogEntry::success(msg).emit();
}

pub fn log_warning(msg: impl Into<String>) {
    LogEntry::warning(msg).emit();
}

pub fn log_info_indent(msg: impl Into<String>, indent: u8) {
    LogEntry::info(msg).with_indent(indent).emit();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rendered_indent() {
        let entry = LogEntry::info("Venue: Apollo Rooms").with_indent(2);
        assert_eq!(entry.rendered(), "      Venue: Apollo Rooms");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(LogEntry::success("done").level.as_str(), "success");
        assert_eq!(LogEntry::warning("no worksInfo").level.as_str(), "warning");
        assert_eq!(LogEntry::info("reading").indent, 0);
    }
}
