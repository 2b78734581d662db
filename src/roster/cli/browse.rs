//! The interactive session behind `roster browse`.
//!
//! Each input line is one user action. After every action the gallery is
//! printed again, followed by the overlay when one is open.

use super::print::{print_gallery, print_message, print_overlay, MessageLevel};
use roster::page::{ClickOutcome, Page};
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  /TEXT, search TEXT   filter by name (empty clears)
  open N, N            open the N-th visible person
  next, n              next person in the overlay
  prev, p              previous person in the overlay
  close, c             close the overlay
  help, ?              this help
  quit, q              leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Search(String),
    Open(usize),
    Next,
    Prev,
    Close,
    Help,
    Quit,
}

pub fn parse_action(line: &str) -> Option<Action> {
    let line = line.trim_end_matches(['\r', '\n']);
    if let Some(query) = line.strip_prefix('/') {
        return Some(Action::Search(query.to_string()));
    }

    let trimmed = line.trim();
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };

    match word {
        "search" | "s" => Some(Action::Search(rest.to_string())),
        "open" | "o" => rest.parse().ok().map(Action::Open),
        "next" | "n" => Some(Action::Next),
        "prev" | "p" => Some(Action::Prev),
        "close" | "c" => Some(Action::Close),
        "help" | "?" => Some(Action::Help),
        "quit" | "q" | "exit" => Some(Action::Quit),
        other => other.parse().ok().map(Action::Open),
    }
}

pub fn run<R: BufRead, W: Write>(page: &mut Page, input: R, out: &mut W) -> io::Result<()> {
    render(page, out)?;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let Some(action) = parse_action(&line) else {
            print_message(
                out,
                MessageLevel::Warning,
                &format!("Unknown command: {}", line.trim()),
            )?;
            continue;
        };
        tracing::debug!(?action, "browse action");

        match action {
            Action::Quit => break,
            Action::Help => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            Action::Search(query) => {
                page.type_query(&query);
            }
            Action::Open(position) => {
                if page.overlay().is_open() {
                    print_message(out, MessageLevel::Info, "Close the current person first.")?;
                    continue;
                }
                if page.open_visible(position) == ClickOutcome::Ignored {
                    print_message(
                        out,
                        MessageLevel::Warning,
                        &format!("No person at {}", position),
                    )?;
                    continue;
                }
            }
            Action::Next | Action::Prev | Action::Close => {
                let was_open = page.overlay().is_open();
                if action == Action::Next {
                    page.next();
                } else if action == Action::Prev {
                    page.prev();
                } else {
                    page.close();
                }
                if !was_open {
                    print_message(out, MessageLevel::Info, "Nothing is open.")?;
                    continue;
                }
            }
        }
        render(page, out)?;
    }
    Ok(())
}

fn render<W: Write>(page: &Page, out: &mut W) -> io::Result<()> {
    if !page.query().is_empty() {
        print_message(out, MessageLevel::Info, &format!("Search: {}", page.query()))?;
    }
    print_gallery(out, page)?;
    if let Some(view) = page.overlay_view() {
        writeln!(out)?;
        print_overlay(out, &view)?;
    }
    writeln!(out)
}
