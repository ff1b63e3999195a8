use std::borrow::Cow::{self, Borrowed, Owned};

use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use strum::IntoEnumIterator;

use medicare_core::forms::{AppointmentDraft, Draft, PatientDraft};
use medicare_core::navigation::ViewId;

use crate::command::{COMMAND_WORDS, FILTER_KINDS};

/// Completion, highlighting and hints for the REPL.
#[derive(Clone)]
pub struct CliHelper {
    commands: Vec<String>,
    views: Vec<String>,
    fields: Vec<String>,
    filters: Vec<String>,
}

impl CliHelper {
    pub fn new() -> Self {
        let mut fields: Vec<String> = PatientDraft::fields()
            .iter()
            .chain(AppointmentDraft::fields())
            .map(|f| f.name.to_string())
            .collect();
        fields.sort();
        fields.dedup();

        Self {
            commands: COMMAND_WORDS.iter().map(|c| c.to_string()).collect(),
            views: ViewId::iter().map(|v| v.to_string()).collect(),
            fields,
            filters: FILTER_KINDS.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Candidates for the word under the cursor, plus where that word starts.
    fn candidates<'a>(&'a self, line: &str) -> (usize, &'a [String], String) {
        let start = line.rfind(' ').map(|i| i + 1).unwrap_or(0);
        let word = line[start..].to_string();
        let head = line.split_whitespace().next().unwrap_or_default();

        let pool: &[String] = if start == 0 {
            &self.commands
        } else {
            match head {
                "go" => &self.views,
                "set" => &self.fields,
                "filter" => &self.filters,
                _ => &[],
            }
        };
        (start, pool, word)
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, pool, word) = self.candidates(&line[..pos]);
        let candidates = pool
            .iter()
            .filter(|c| c.starts_with(&word))
            .map(|c| Pair {
                display: c.clone(),
                replacement: c.clone(),
            })
            .collect();
        Ok((start, candidates))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        match line.split_once(' ') {
            Some((head, rest)) if self.commands.iter().any(|c| c == head) => {
                Owned(format!("{} {}", head.bright_cyan(), rest))
            }
            None if self.commands.iter().any(|c| c == line) => Owned(line.bright_cyan().to_string()),
            _ => Borrowed(line),
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let (_, pool, word) = self.candidates(&line[..pos]);
        if word.is_empty() {
            return None;
        }
        pool.iter()
            .find(|c| c.starts_with(&word) && c.len() > word.len())
            .map(|c| c[word.len()..].to_string())
    }
}

impl Validator for CliHelper {}
