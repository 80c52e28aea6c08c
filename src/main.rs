use std::cell::{Cell, RefCell};
use std::io::{self, Write};
use std::rc::Rc;

use anyhow::Result;
use argh::FromArgs;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use terminal_commands::{CommandOutput, CommandProcessor, Renderable, autocomplete, builtin};

#[derive(FromArgs)]
/// Interactive portfolio terminal.
struct TerminalArgs {
    /// print the registered commands and exit
    #[argh(switch)]
    list: bool,

    /// execute a single command line and exit
    #[argh(option, short = 'c')]
    command: Option<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args: TerminalArgs = argh::from_env();

    let unlocked = Rc::new(Cell::new(false));
    let processor = build_processor(unlocked.clone());

    if args.list {
        println!("{}", processor.borrow().help_text());
        return Ok(());
    }
    if let Some(line) = args.command {
        let output = processor.borrow().execute(&line);
        render(&output);
        if output.is_error() {
            std::process::exit(1);
        }
        return Ok(());
    }

    repl(&processor.borrow(), &unlocked)
}

/// Wire the stock command tables to this frontend's callbacks.
///
/// The `help` command reads the registry it lives in, so the provider
/// holds a weak handle back to the processor.
fn build_processor(unlocked: Rc<Cell<bool>>) -> Rc<RefCell<CommandProcessor>> {
    let processor = Rc::new(RefCell::new(CommandProcessor::new()));

    let clear = || {
        // ANSI erase-display + cursor home.
        print!("\x1b[2J\x1b[H");
        let _ = io::stdout().flush();
    };
    let help_source = Rc::downgrade(&processor);
    let help_text = move || {
        help_source
            .upgrade()
            .map(|registry| registry.borrow().help_text())
            .unwrap_or_default()
    };
    let unlock = move || unlocked.set(true);

    processor
        .borrow_mut()
        .register_commands(builtin::core_commands(clear, help_text));
    processor
        .borrow_mut()
        .register_commands(builtin::easter_egg_commands(unlock));
    processor
}

fn repl(processor: &CommandProcessor, unlocked: &Cell<bool>) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut announced = false;
    println!(
        "portfolio terminal v{} — type 'help' to look around",
        env!("CARGO_PKG_VERSION")
    );

    loop {
        match rl.readline("guest@portfolio:~$ ") {
            Ok(line) => {
                rl.add_history_entry(line.as_str())?;
                let output = processor.execute(&line);
                render(&output);
                if output.is_error() {
                    suggest(processor, &line);
                }
                if unlocked.get() && !announced {
                    announced = true;
                    println!("\x1b[33m* easter egg unlocked *\x1b[0m");
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

/// Print "did you mean" candidates after an unknown-command error.
fn suggest(processor: &CommandProcessor, line: &str) {
    let Some(token) = line.split_whitespace().next() else {
        return;
    };
    let names: Vec<&str> = processor
        .commands()
        .iter()
        .map(|command| command.name())
        .collect();
    if names.iter().any(|name| name.eq_ignore_ascii_case(token)) {
        // The command exists; the error came from its own logic.
        return;
    }
    let matches = autocomplete::suggestions(&names, token);
    if !matches.is_empty() {
        println!("did you mean: {}?", matches.join(", "));
    }
}

/// Render one output value, styled by kind: red for errors, green for
/// success, plain text otherwise.
fn render(output: &CommandOutput) {
    match output {
        CommandOutput::Text(content) => {
            if !content.is_empty() {
                println!("{content}");
            }
        }
        CommandOutput::Success(content) => println!("\x1b[32m{content}\x1b[0m"),
        CommandOutput::Error(content) => println!("\x1b[31m{content}\x1b[0m"),
        CommandOutput::Component(renderable) => render_component(renderable),
    }
}

fn render_component(renderable: &Renderable) {
    match renderable {
        Renderable::Banner(block) => println!("{}", block.trim_end()),
        Renderable::Table { headers, rows } => {
            let mut widths: Vec<usize> = headers.iter().map(String::len).collect();
            for row in rows {
                for (cell, width) in row.iter().zip(widths.iter_mut()) {
                    *width = (*width).max(cell.len());
                }
            }
            println!("{}", format_row(headers, &widths));
            for row in rows {
                println!("{}", format_row(row, &widths));
            }
        }
    }
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let columns: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    columns.join("  ").trim_end().to_string()
}
