use crate::output::CommandOutput;
use std::fmt;

/// Boxed handler invoked when a command is dispatched.
///
/// Receives the whitespace-split arguments, everything after the command
/// token with order preserved. Handlers report failure by returning a
/// [`CommandOutput::Error`] value; nothing is propagated as a fault across
/// the dispatch boundary.
pub type CommandAction = Box<dyn Fn(&[String]) -> CommandOutput>;

/// A named, registered unit of behavior mapping an argument list to a
/// [`CommandOutput`].
///
/// Side effects in the hosting UI (clearing the screen, unlocking a hidden
/// feature) happen through closures captured in the action when the command
/// table is built, so the dispatch core never depends on UI internals.
/// Once registered, a command is owned by the registry and immutable.
pub struct Command {
    name: String,
    description: String,
    action: CommandAction,
}

impl Command {
    /// Create a command from its name, one-line description, and handler.
    ///
    /// The name is matched case-insensitively at dispatch time but stored
    /// as given, so listings show the registered casing.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        action: impl Fn(&[String]) -> CommandOutput + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            action: Box::new(action),
        }
    }

    /// Canonical name of the command, e.g. "echo" or "clear".
    pub fn name(&self) -> &str {
        &self.name
    }

    /// One-line description shown by `help`.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub(crate) fn run(&self, args: &[String]) -> CommandOutput {
        (self.action)(args)
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
