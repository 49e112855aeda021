use std::io::{BufRead, Write};

use crossbeam_channel::Receiver;
use itertools::Itertools;

use crate::actions::{ActionRegistry, Prompter};
use crate::model::{ModelEvent, ScanModel};
use crate::results::{ResultStore, ScanResult};
use crate::search::{BrowseSignal, MatchPosition};

/// Line-oriented host: reads commands and answers from `input`, prints to `output`.
pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Trimmed answer, `None` at the end of input.
    fn ask(&mut self, prompt: &str) -> Option<String> {
        self.ask_verbatim(prompt).map(|answer| answer.trim().to_string())
    }

    /// Answer as typed, without the line terminator.
    fn ask_verbatim(&mut self, prompt: &str) -> Option<String> {
        self.print(format_args!("{}", prompt));
        if let Err(e) = self.output.flush() {
            log::warn!("Failed to flush output: {}", e);
        }
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                let len = line.trim_end_matches(['\n', '\r']).len();
                line.truncate(len);
                Some(line)
            }
            Err(e) => {
                log::error!("Failed to read input: {}", e);
                None
            }
        }
    }

    fn say(&mut self, msg: std::fmt::Arguments) {
        self.print(msg);
        self.print(format_args!("\n"));
    }

    fn print(&mut self, msg: std::fmt::Arguments) {
        if let Err(e) = self.output.write_fmt(msg) {
            log::warn!("Failed to write output: {}", e);
        }
    }
}

impl<R: BufRead, W: Write> Prompter for Console<R, W> {
    fn ask_query(&mut self, last_query: &str) -> Option<String> {
        let prompt = if last_query.is_empty() {
            "Find: ".to_string()
        } else {
            format!("Find [{}]: ", last_query)
        };
        match self.ask_verbatim(&prompt)? {
            q if q.is_empty() && last_query.is_empty() => None,
            q if q.is_empty() => Some(last_query.to_string()),
            q => Some(q),
        }
    }

    fn browse(&mut self, position: MatchPosition, result: Option<&ScanResult>) -> BrowseSignal {
        if let Some(result) = result {
            self.say(format_args!("{}", format_result(position.index, result)));
        }
        loop {
            let prompt = format!("Match {} - [p]revious, [n]ext, [d]ismiss: ", position);
            let Some(answer) = self.ask(&prompt) else {
                return BrowseSignal::Dismiss;
            };
            match answer.to_lowercase().as_str() {
                "p" | "prev" | "previous" => return BrowseSignal::Previous,
                "" | "n" | "next" => return BrowseSignal::Next,
                "d" | "dismiss" | "q" => return BrowseSignal::Dismiss,
                other => self.say(format_args!("Unknown answer {:?}", other)),
            }
        }
    }

    fn notify_no_matches(&mut self, query: &str) {
        self.say(format_args!("Nothing found for {:?}", query));
    }

    fn notify_found(&mut self, _query: &str, total: usize) {
        self.say(format_args!("{} hosts found", total));
    }

    fn confirm_restart(&mut self, query: &str) -> bool {
        let prompt = format!("{:?} not found below the selection. Search from the top? [y/N]: ", query);
        self.ask(&prompt)
            .map(|a| matches!(a.to_lowercase().as_str(), "y" | "yes"))
            .unwrap_or(false)
    }
}

pub fn format_result(index: usize, result: &ScanResult) -> String {
    let mut line = format!("#{} {} [{}]", index, result.address(), result.result_type());
    if !result.values().is_empty() {
        line.push(' ');
        line.push_str(&result.values().join(", "));
    }
    line
}

/// Runs the command loop until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    mut model: ScanModel,
    registry: &ActionRegistry,
    mut console: Console<R, W>,
    receiver: Receiver<ModelEvent>,
) -> anyhow::Result<()> {
    console.say(format_args!("{} results loaded, type ? for help", model.results().count()));
    loop {
        let Some(command) = console.ask("> ") else {
            break;
        };
        if command.is_empty() {
            continue;
        }
        match registry.lookup(&command) {
            Some(action) => {
                if let Err(e) = action.perform_action(&mut model, &mut console) {
                    log::error!("Action {} failed: {:?}", action.id(), e);
                    console.say(format_args!("Error: {}", e));
                }
            }
            None => console.say(format_args!("Unknown command {:?}, type ? for help", command)),
        }

        let events = receiver.try_iter().collect_vec();
        let quit = handle_model_events(&model, registry, &mut console, events);
        profiling::finish_frame!();
        if quit {
            break;
        }
    }
    log::info!("Console closed");
    Ok(())
}

/// Prints what changed. Only the last selection change of a batch is shown.
/// Returns `true` if quit was requested.
fn handle_model_events<R: BufRead, W: Write>(
    model: &ScanModel,
    registry: &ActionRegistry,
    console: &mut Console<R, W>,
    events: Vec<ModelEvent>,
) -> bool {
    let last_selection_change = events.iter()
        .rposition(|e| matches!(e, ModelEvent::SelectionChanged(_)));
    for (i, event) in events.into_iter().enumerate() {
        log::trace!("Model event: {:?}", event);
        match event {
            ModelEvent::SelectionChanged(selection) if Some(i) == last_selection_change => {
                show_selection(model, console, selection)
            }
            ModelEvent::SelectionChanged(_) | ModelEvent::SearchPosition { .. } => (),
            ModelEvent::SelectionShown(selection) => show_selection(model, console, selection),
            ModelEvent::NoMatch(msg) => console.say(format_args!("{}", msg)),
            ModelEvent::Help => {
                for action in registry.actions() {
                    console.say(format_args!("  {:<16} {}", action.print_commands(), action.description()));
                }
            }
            ModelEvent::Quit => return true,
        }
    }
    false
}

fn show_selection<R: BufRead, W: Write>(model: &ScanModel, console: &mut Console<R, W>, selection: Option<usize>) {
    match selection.and_then(|i| model.results().get(i).map(|r| (i, r))) {
        Some((i, result)) => console.say(format_args!("{}", format_result(i, result))),
        None => console.say(format_args!("Nothing selected")),
    }
}
