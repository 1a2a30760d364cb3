use crate::ui::console::ConsoleEventSink;
use crate::ui::json::JsonEventSink;
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use contentkit::domain::ports::ToolEventSink;

/// Output settings shared by every command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, no_color: bool) -> Self {
        Self::from_caps(json, verbose, no_color, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        no_color: bool,
        caps: TerminalCapabilities,
    ) -> Self {
        Self {
            json,
            verbose,
            color: !json && !no_color && caps.supports_color && !caps.is_ci,
            unicode: caps.supports_unicode,
        }
    }

    /// Sink that renders use case events for this context
    pub fn event_sink(&self) -> Box<dyn ToolEventSink> {
        if self.json {
            Box::new(JsonEventSink::stdout())
        } else {
            Box::new(ConsoleEventSink::new(self.verbose, self.color, self.unicode))
        }
    }
}
