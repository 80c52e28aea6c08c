//! Stock command tables wired into the portfolio terminal.
//!
//! Two factories build the tables the UI registers at setup:
//! [`core_commands`] takes the clear-screen and help-text callbacks, and
//! [`easter_egg_commands`] takes the unlock callback. The dispatch core
//! never sees any of these callbacks; they live inside the command
//! closures.
//!
//! Flagged commands parse their arguments with the [`argh`] crate
//! (`FromArgs`) and surface usage problems as error output rather than
//! faults.

use crate::command::Command;
use crate::konami::SequenceDetector;
use crate::output::{CommandOutput, Renderable};
use argh::{EarlyExit, FromArgs};
use regex::RegexBuilder;
use std::rc::Rc;

/// Parse a flagged command's arguments, mapping argh's early exit to an
/// output value: a help request comes back as text, bad usage as an error.
fn parse_args<T: FromArgs>(name: &str, args: &[String]) -> Result<T, CommandOutput> {
    let argv: Vec<&str> = args.iter().map(String::as_str).collect();
    T::from_args(&[name], &argv).map_err(|EarlyExit { output, status }| match status {
        Ok(()) => CommandOutput::Text(output),
        Err(()) => CommandOutput::Error(output),
    })
}

struct Project {
    name: &'static str,
    stack: &'static str,
    summary: &'static str,
}

const PROJECTS: &[Project] = &[
    Project {
        name: "drift",
        stack: "rust, wasm",
        summary: "orbital mechanics sandbox that runs in the browser",
    },
    Project {
        name: "inkwell",
        stack: "typescript, react",
        summary: "markdown notebook with offline-first sync",
    },
    Project {
        name: "homelab-dash",
        stack: "rust, sqlite",
        summary: "single-binary status page for self-hosted services",
    },
    Project {
        name: "pocket-synth",
        stack: "c++, webaudio",
        summary: "four-voice chiptune synthesizer with a tracker UI",
    },
];

const ABOUT_BANNER: &str = r"
 ____            _    __       _ _
|  _ \ ___  _ __| |_ / _| ___ | (_) ___
| |_) / _ \| '__| __| |_ / _ \| | |/ _ \
|  __/ (_) | |  | |_|  _| (_) | | | (_) |
|_|   \___/|_|   \__|_|  \___/|_|_|\___/
";

const ABOUT_BLURB: &str = "\
Software engineer with a soft spot for systems programming, generative\n\
art, and tools that feel instant. This terminal is the guided tour:\n\
try 'projects', 'contact', or poke around for the hidden bits.";

#[derive(FromArgs)]
/// write the arguments back, separated by single spaces
struct EchoArgs {
    #[argh(positional, greedy)]
    /// values to print as-is
    args: Vec<String>,
}

#[derive(FromArgs)]
/// browse the project gallery, optionally filtered by a pattern
struct ProjectsArgs {
    #[argh(positional)]
    /// regular expression matched against project names and summaries
    pattern: Option<String>,

    #[argh(switch, short = 'i')]
    /// ignore case distinctions in the pattern
    ignore_case: bool,
}

fn echo_command() -> Command {
    Command::new("echo", "write arguments back to the terminal", |args| {
        match parse_args::<EchoArgs>("echo", args) {
            Ok(parsed) => CommandOutput::Text(parsed.args.join(" ")),
            Err(output) => output,
        }
    })
}

fn whoami_command() -> Command {
    Command::new("whoami", "who is typing here, anyway", |_args| {
        CommandOutput::text("guest (try 'sudo' if you think you deserve more)")
    })
}

fn about_command() -> Command {
    Command::new("about", "a short introduction", |_args| {
        CommandOutput::Component(Renderable::Banner(format!(
            "{}\n{}",
            ABOUT_BANNER.trim_matches('\n'),
            ABOUT_BLURB
        )))
    })
}

fn contact_command() -> Command {
    Command::new("contact", "where to reach me", |_args| {
        CommandOutput::Component(Renderable::Table {
            headers: vec!["channel".to_string(), "address".to_string()],
            rows: vec![
                vec!["email".to_string(), "hello@example.dev".to_string()],
                vec!["github".to_string(), "github.com/example".to_string()],
                vec!["mastodon".to_string(), "@example@hachyderm.io".to_string()],
            ],
        })
    })
}

fn projects_command() -> Command {
    Command::new("projects", "browse the project gallery", |args| {
        let parsed: ProjectsArgs = match parse_args("projects", args) {
            Ok(parsed) => parsed,
            Err(output) => return output,
        };
        let selected: Vec<&Project> = match &parsed.pattern {
            Some(pattern) => {
                let re = match RegexBuilder::new(pattern)
                    .case_insensitive(parsed.ignore_case)
                    .build()
                {
                    Ok(re) => re,
                    Err(e) => {
                        return CommandOutput::Error(format!("projects: invalid pattern: {e}"));
                    }
                };
                PROJECTS
                    .iter()
                    .filter(|project| re.is_match(project.name) || re.is_match(project.summary))
                    .collect()
            }
            None => PROJECTS.iter().collect(),
        };
        if selected.is_empty() {
            return CommandOutput::text("no projects match");
        }
        CommandOutput::Component(Renderable::Table {
            headers: vec![
                "project".to_string(),
                "stack".to_string(),
                "summary".to_string(),
            ],
            rows: selected
                .iter()
                .map(|project| {
                    vec![
                        project.name.to_string(),
                        project.stack.to_string(),
                        project.summary.to_string(),
                    ]
                })
                .collect(),
        })
    })
}

/// Build the core command table.
///
/// `clear` is invoked when the visitor runs `clear`; `help_text` supplies
/// the body of the `help` command (typically
/// [`CommandProcessor::help_text`](crate::CommandProcessor::help_text)
/// on the registry these commands end up in).
pub fn core_commands(
    clear: impl Fn() + 'static,
    help_text: impl Fn() -> String + 'static,
) -> Vec<Command> {
    vec![
        Command::new("help", "list available commands", move |_args| {
            CommandOutput::Text(help_text())
        }),
        Command::new("clear", "clear the terminal screen", move |_args| {
            clear();
            CommandOutput::success("cleared")
        }),
        echo_command(),
        whoami_command(),
        about_command(),
        contact_command(),
        projects_command(),
    ]
}

/// Build the easter-egg command table.
///
/// `unlock` fires when the visitor finds a way in, either by asking
/// (`sudo`) or by typing the classic code (`konami up up down down ...`).
pub fn easter_egg_commands(unlock: impl Fn() + 'static) -> Vec<Command> {
    let unlock = Rc::new(unlock);
    let sudo_unlock = unlock.clone();
    let konami_unlock = unlock;
    vec![
        Command::new("sudo", "ask for elevated visitor privileges", move |_args| {
            (*sudo_unlock)();
            CommandOutput::success("permission granted. enjoy the hidden bits.")
        }),
        Command::new(
            "konami",
            "enter the classic code, one key per word",
            move |args| {
                let mut detector = SequenceDetector::konami();
                let completed = args.iter().any(|key| detector.push(key));
                if completed {
                    (*konami_unlock)();
                    CommandOutput::success("the code still works. cheat mode unlocked.")
                } else {
                    CommandOutput::Text(format!(
                        "{} of {} keys matched, keep going",
                        detector.progress(),
                        detector.len()
                    ))
                }
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn find<'a>(commands: &'a [Command], name: &str) -> &'a Command {
        commands
            .iter()
            .find(|command| command.name() == name)
            .unwrap_or_else(|| panic!("no command named {name:?}"))
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    fn core() -> Vec<Command> {
        core_commands(|| (), || String::new())
    }

    #[test]
    fn test_core_table_names_and_order() {
        let names: Vec<String> = core().iter().map(|c| c.name().to_string()).collect();
        assert_eq!(
            names,
            vec!["help", "clear", "echo", "whoami", "about", "contact", "projects"]
        );
    }

    #[test]
    fn test_help_uses_injected_provider() {
        let commands = core_commands(|| (), || "THE LISTING".to_string());
        let out = find(&commands, "help").run(&[]);
        assert_eq!(out, CommandOutput::text("THE LISTING"));
    }

    #[test]
    fn test_clear_fires_callback_and_reports_success() {
        let calls = Rc::new(Cell::new(0u32));
        let counter = calls.clone();
        let commands = core_commands(move || counter.set(counter.get() + 1), String::new);

        let out = find(&commands, "clear").run(&[]);
        assert_eq!(out, CommandOutput::success("cleared"));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_echo_joins_arguments() {
        let out = find(&core(), "echo").run(&args(&["hello", "world"]));
        assert_eq!(out, CommandOutput::text("hello world"));
    }

    #[test]
    fn test_echo_help_request_is_text_not_error() {
        let out = find(&core(), "echo").run(&args(&["--help"]));
        assert!(matches!(out, CommandOutput::Text(_)), "got {out:?}");
    }

    #[test]
    fn test_about_is_a_banner_component() {
        let out = find(&core(), "about").run(&[]);
        assert!(
            matches!(out, CommandOutput::Component(Renderable::Banner(_))),
            "got {out:?}"
        );
    }

    #[test]
    fn test_contact_is_a_table_component() {
        let out = find(&core(), "contact").run(&[]);
        let CommandOutput::Component(Renderable::Table { headers, rows }) = out else {
            panic!("expected a table");
        };
        assert_eq!(headers, vec!["channel", "address"]);
        assert!(!rows.is_empty());
    }

    #[test]
    fn test_projects_without_pattern_lists_everything() {
        let out = find(&core(), "projects").run(&[]);
        let CommandOutput::Component(Renderable::Table { rows, .. }) = out else {
            panic!("expected a table");
        };
        assert_eq!(rows.len(), PROJECTS.len());
    }

    #[test]
    fn test_projects_filters_by_pattern() {
        let out = find(&core(), "projects").run(&args(&["drift"]));
        let CommandOutput::Component(Renderable::Table { rows, .. }) = out else {
            panic!("expected a table");
        };
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0], "drift");
    }

    #[test]
    fn test_projects_ignore_case_switch() {
        let out = find(&core(), "projects").run(&args(&["-i", "DRIFT"]));
        let CommandOutput::Component(Renderable::Table { rows, .. }) = out else {
            panic!("expected a table");
        };
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_projects_no_match_is_plain_text() {
        let out = find(&core(), "projects").run(&args(&["zzzzz"]));
        assert_eq!(out, CommandOutput::text("no projects match"));
    }

    #[test]
    fn test_projects_invalid_pattern_is_error() {
        let out = find(&core(), "projects").run(&args(&["("]));
        let CommandOutput::Error(message) = out else {
            panic!("expected an error");
        };
        assert!(message.contains("invalid pattern"));
    }

    #[test]
    fn test_projects_unknown_flag_is_error() {
        let out = find(&core(), "projects").run(&args(&["-q"]));
        assert!(out.is_error(), "got {out:?}");
    }

    #[test]
    fn test_sudo_fires_unlock() {
        let unlocked = Rc::new(Cell::new(false));
        let flag = unlocked.clone();
        let commands = easter_egg_commands(move || flag.set(true));

        let out = find(&commands, "sudo").run(&[]);
        assert!(matches!(out, CommandOutput::Success(_)));
        assert!(unlocked.get());
    }

    #[test]
    fn test_konami_full_code_unlocks() {
        let unlocked = Rc::new(Cell::new(false));
        let flag = unlocked.clone();
        let commands = easter_egg_commands(move || flag.set(true));

        let code = args(&[
            "up", "up", "down", "down", "left", "right", "left", "right", "b", "a",
        ]);
        let out = find(&commands, "konami").run(&code);
        assert!(matches!(out, CommandOutput::Success(_)));
        assert!(unlocked.get());
    }

    #[test]
    fn test_konami_partial_code_reports_progress() {
        let unlocked = Rc::new(Cell::new(false));
        let flag = unlocked.clone();
        let commands = easter_egg_commands(move || flag.set(true));

        let out = find(&commands, "konami").run(&args(&["up", "up"]));
        assert_eq!(out, CommandOutput::text("2 of 10 keys matched, keep going"));
        assert!(!unlocked.get());
    }
}
