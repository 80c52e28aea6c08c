/// Structured data attached to a [`CommandOutput::Component`] value.
///
/// Frontends render these specially instead of printing a plain line:
/// a banner is a preformatted block emitted verbatim, a table is laid out
/// in aligned columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Renderable {
    /// Preformatted multi-line block (e.g. ASCII art).
    Banner(String),
    /// Tabular data (header row + data rows).
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

/// Tagged result of one command invocation.
///
/// Produced fresh per invocation and handed to the frontend unchanged.
/// The frontend styles output by variant (conventionally red for
/// [`Error`](CommandOutput::Error), green for
/// [`Success`](CommandOutput::Success)); the processor itself never
/// interprets the payload. The only variant the processor produces on its
/// own is the "command not found" error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Plain text.
    Text(String),
    /// A failure message, either from dispatch or from the command itself.
    Error(String),
    /// A confirmation message.
    Success(String),
    /// Structured data the frontend renders specially.
    Component(Renderable),
}

impl CommandOutput {
    /// Convenience constructor for [`CommandOutput::Text`].
    pub fn text(content: impl Into<String>) -> Self {
        CommandOutput::Text(content.into())
    }

    /// Convenience constructor for [`CommandOutput::Error`].
    pub fn error(content: impl Into<String>) -> Self {
        CommandOutput::Error(content.into())
    }

    /// Convenience constructor for [`CommandOutput::Success`].
    pub fn success(content: impl Into<String>) -> Self {
        CommandOutput::Success(content.into())
    }

    /// Stable tag name of the variant, for frontends that key styling
    /// off a string rather than matching the enum.
    pub fn kind(&self) -> &'static str {
        match self {
            CommandOutput::Text(_) => "text",
            CommandOutput::Error(_) => "error",
            CommandOutput::Success(_) => "success",
            CommandOutput::Component(_) => "component",
        }
    }

    /// True for [`CommandOutput::Error`] values.
    pub fn is_error(&self) -> bool {
        matches!(self, CommandOutput::Error(_))
    }
}
