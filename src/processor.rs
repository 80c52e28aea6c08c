use crate::command::Command;
use crate::output::CommandOutput;
use std::collections::HashMap;

/// Registry of named commands with synchronous line dispatch.
///
/// The processor maintains the commands in registration order (for listings
/// and autocompletion sources) alongside a lowercased-name index for O(1)
/// lookup. It is written once at setup through [`register_commands`] and
/// thereafter only read by [`execute`], so no interior mutability or
/// locking is involved.
///
/// Example
/// ```
/// use terminal_commands::{Command, CommandOutput, CommandProcessor};
/// let mut processor = CommandProcessor::new();
/// processor.register_commands(vec![Command::new("ping", "reply with pong", |_| {
///     CommandOutput::text("pong")
/// })]);
/// assert_eq!(processor.execute("PING"), CommandOutput::text("pong"));
/// ```
///
/// [`register_commands`]: CommandProcessor::register_commands
/// [`execute`]: CommandProcessor::execute
#[derive(Debug, Default)]
pub struct CommandProcessor {
    commands: Vec<Command>,
    index: HashMap<String, usize>,
}

impl CommandProcessor {
    /// Create an empty processor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add each command to the registry keyed by its lowercased name.
    ///
    /// Duplicate names: the last registration wins. The replacement takes
    /// over the original registration slot, so listing order is unaffected
    /// by re-registration.
    pub fn register_commands(&mut self, commands: Vec<Command>) {
        for command in commands {
            let key = command.name().to_lowercase();
            match self.index.get(&key) {
                Some(&slot) => {
                    log::warn!("replacing registered command {key:?}");
                    self.commands[slot] = command;
                }
                None => {
                    self.index.insert(key, self.commands.len());
                    self.commands.push(command);
                }
            }
        }
    }

    /// Dispatch one input line to the matching command.
    ///
    /// The line is trimmed and split on whitespace; the first token,
    /// case-folded, selects the command and the rest become its arguments.
    /// Empty or whitespace-only input yields an empty [`CommandOutput::Text`]
    /// so the frontend can treat it as a no-op. An unrecognized name yields
    /// a "command not found" error value. Whatever the command returns is
    /// passed through verbatim; this method never fails any other way.
    pub fn execute(&self, input: &str) -> CommandOutput {
        let mut tokens = input.split_whitespace();
        let Some(name) = tokens.next() else {
            return CommandOutput::Text(String::new());
        };
        let args: Vec<String> = tokens.map(str::to_string).collect();
        match self.index.get(&name.to_lowercase()) {
            Some(&slot) => {
                log::debug!("dispatching {name:?} with {} argument(s)", args.len());
                self.commands[slot].run(&args)
            }
            None => CommandOutput::Error(format!("command not found: {name}")),
        }
    }

    /// All registered commands in registration order.
    ///
    /// Frontends use this to build autocomplete sources; the sequence is
    /// stable between calls to [`register_commands`](Self::register_commands).
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Formatted listing of all registered commands and their descriptions,
    /// one per line in registration order, names padded to a common width.
    pub fn help_text(&self) -> String {
        let longest = self
            .commands
            .iter()
            .map(|command| command.name().len())
            .max()
            .unwrap_or(0);
        self.commands
            .iter()
            .map(|command| {
                format!(
                    "{:<width$}  {}",
                    command.name(),
                    command.description(),
                    width = longest
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
