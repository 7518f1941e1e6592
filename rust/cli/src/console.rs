//! The console side of a session: humans answer on the input stream, bots
//! answer through `parlor-ai`, and table events are printed as they happen.

use std::collections::HashMap;
use std::io::{self, BufRead, Write};

use parlor_ai::AIOpponent;
use parlor_engine::controller::{ActionPrompt, Controller, DiscardPrompt, TableEvent};
use parlor_engine::cards::format_cards;
use parlor_engine::player::PlayerAction;
use parlor_engine::rules::{validate_action, validate_discards, ActionOptions};

use crate::formatters::{format_options, render_event};
use crate::io_utils::prompt_line;
use crate::validation::{parse_discards, parse_player_action, ParseResult};

/// Routes each decision to a bot (by seat name) or to the human at the keyboard.
///
/// Human answers are checked against the prompt's options before they are
/// returned, so a typo re-prompts instead of aborting the round. Once the
/// human quits, or input runs out, every remaining human decision is the
/// passive one: check when nothing is owed, fold otherwise, keep all cards.
pub struct Console<'a> {
    input: Option<&'a mut dyn BufRead>,
    out: &'a mut dyn Write,
    err: &'a mut dyn Write,
    bots: HashMap<String, Box<dyn AIOpponent>>,
    quiet: bool,
    quit_requested: bool,
    io_error: Option<io::Error>,
}

impl<'a> Console<'a> {
    pub fn new(input: &'a mut dyn BufRead, out: &'a mut dyn Write, err: &'a mut dyn Write) -> Self {
        Self {
            input: Some(input),
            out,
            err,
            bots: HashMap::new(),
            quiet: false,
            quit_requested: false,
            io_error: None,
        }
    }

    /// A console with no keyboard that prints nothing; every seat must be a bot.
    pub fn bots_only(out: &'a mut dyn Write, err: &'a mut dyn Write) -> Self {
        Self {
            input: None,
            out,
            err,
            bots: HashMap::new(),
            quiet: true,
            quit_requested: false,
            io_error: None,
        }
    }

    pub fn add_bot(&mut self, name: &str, ai: Box<dyn AIOpponent>) {
        self.bots.insert(name.to_string(), ai);
    }

    pub fn remove_bot(&mut self, name: &str) -> bool {
        self.bots.remove(name).is_some()
    }

    pub fn is_bot(&self, name: &str) -> bool {
        self.bots.contains_key(name)
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    /// First write failure since the last call, if any.
    pub fn take_io_error(&mut self) -> Option<io::Error> {
        self.io_error.take()
    }

    /// Asks the human a question. `None` on EOF, after a quit, or without input.
    pub fn ask(&mut self, question: &str) -> Option<String> {
        if self.quit_requested {
            return None;
        }
        let input = self.input.as_deref_mut()?;
        match prompt_line(&mut *self.out, input, question) {
            Ok(Some(line)) => Some(line),
            Ok(None) => {
                self.quit_requested = true;
                None
            }
            Err(e) => {
                self.io_error.get_or_insert(e);
                None
            }
        }
    }

    pub fn say(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{}", line) {
            self.io_error.get_or_insert(e);
        }
    }

    fn complain(&mut self, msg: &str) {
        if let Err(e) = crate::ui::write_error(&mut *self.err, msg) {
            self.io_error.get_or_insert(e);
        }
    }

    fn human_action(&mut self, prompt: &ActionPrompt<'_>) -> PlayerAction {
        let mut header = format!(
            "{}: hand {}  chips {}  pot {}",
            prompt.name, prompt.hand, prompt.chips, prompt.pot
        );
        if !prompt.community.is_empty() {
            header.push_str(&format!("  community {}", format_cards(prompt.community)));
        }
        self.say(&header);

        let question = format!("Action ({}, q): ", format_options(&prompt.options));
        loop {
            let Some(line) = self.ask(&question) else {
                return passive_action(&prompt.options);
            };
            match parse_player_action(&line) {
                ParseResult::Action(action) => match validate_action(&prompt.options, action.clone()) {
                    Ok(_) => return action,
                    Err(e) => self.complain(&e.to_string()),
                },
                ParseResult::Quit => {
                    self.say("Quitting after this round.");
                    self.quit_requested = true;
                    return passive_action(&prompt.options);
                }
                ParseResult::Invalid(msg) => self.complain(&msg),
            }
        }
    }

    fn human_discards(&mut self, prompt: &DiscardPrompt<'_>) -> Vec<usize> {
        let numbered: Vec<String> = prompt
            .hand
            .cards()
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{}:{}", i + 1, c))
            .collect();
        self.say(&format!("{}: hand {}", prompt.name, numbered.join(" ")));

        let question = format!(
            "Discard which cards? (positions 1-{}, blank keeps all): ",
            prompt.hand.len()
        );
        loop {
            let Some(line) = self.ask(&question) else {
                return Vec::new();
            };
            if matches!(line.to_lowercase().as_str(), "q" | "quit") {
                self.say("Quitting after this round.");
                self.quit_requested = true;
                return Vec::new();
            }
            let positions = match parse_discards(&line) {
                Ok(p) => p,
                Err(msg) => {
                    self.complain(&msg);
                    continue;
                }
            };
            match validate_discards(&positions, prompt.hand.len()) {
                Ok(_) => return positions,
                Err(e) => self.complain(&e.to_string()),
            }
        }
    }
}

/// The decision taken for a human who is no longer answering.
pub fn passive_action(options: &ActionOptions) -> PlayerAction {
    match options {
        ActionOptions::Opening { .. } => PlayerAction::Check,
        ActionOptions::Facing { .. } | ActionOptions::ShortStack { .. } => PlayerAction::Fold,
    }
}

impl Controller for Console<'_> {
    fn choose_action(&mut self, prompt: &ActionPrompt<'_>) -> PlayerAction {
        match self.bots.get_mut(prompt.name) {
            Some(bot) => bot.choose_action(prompt),
            None => self.human_action(prompt),
        }
    }

    fn choose_discards(&mut self, prompt: &DiscardPrompt<'_>) -> Vec<usize> {
        match self.bots.get_mut(prompt.name) {
            Some(bot) => bot.choose_discards(prompt),
            None => self.human_discards(prompt),
        }
    }

    fn notify(&mut self, event: &TableEvent) {
        if self.quiet {
            return;
        }
        for line in render_event(event) {
            self.say(&line);
        }
    }
}
