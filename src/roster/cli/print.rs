use colored::Colorize;
use roster::page::{CardView, Line, OverlayView, Page};
use std::io::{self, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 24;
const EMAIL_WIDTH: usize = 34;
const CELL_WIDTH: usize = 16;
const ACTIVE_MARKER: &str = "▸";

#[derive(Debug, Clone, Copy)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

pub fn print_message(out: &mut dyn Write, level: MessageLevel, message: &str) -> io::Result<()> {
    match level {
        MessageLevel::Info => writeln!(out, "{}", message.dimmed()),
        MessageLevel::Success => writeln!(out, "{}", message.green()),
        MessageLevel::Warning => writeln!(out, "{}", message.yellow()),
    }
}

/// The gallery: visible cards in render order, or the no-results line.
pub fn print_gallery(out: &mut dyn Write, page: &Page) -> io::Result<()> {
    if let Some(message) = page.no_results_message() {
        return print_message(out, MessageLevel::Warning, &message);
    }
    let cards = page.card_views();
    if cards.is_empty() {
        return print_message(out, MessageLevel::Info, "No people loaded.");
    }
    for card in &cards {
        print_card(out, card)?;
    }
    Ok(())
}

fn print_card(out: &mut dyn Write, card: &CardView) -> io::Result<()> {
    let marker = if card.active { ACTIVE_MARKER } else { " " };
    let idx = format!("{:>3}. ", card.position);
    let widths = [NAME_WIDTH, EMAIL_WIDTH, CELL_WIDTH, 0];

    let mut row = String::new();
    for (i, line) in card.lines.iter().enumerate() {
        let text = display_text(line);
        let width = widths.get(i).copied().unwrap_or(0);
        let cell = if width == 0 {
            text
        } else {
            pad_to_width(&truncate_to_width(&text, width), width)
        };
        let cell = match i {
            0 => cell.bold().to_string(),
            1 => cell.cyan().to_string(),
            _ => cell,
        };
        row.push_str(&cell);
        row.push(' ');
    }

    let idx = if card.active {
        idx.yellow().to_string()
    } else {
        idx
    };
    writeln!(out, "{} {}{}", marker.yellow(), idx, row.trim_end())
}

/// The detail overlay for the record on display.
pub fn print_overlay(out: &mut dyn Write, view: &OverlayView) -> io::Result<()> {
    let mut lines = view.lines.iter();
    writeln!(out, "================================")?;
    if let Some(name) = lines.next() {
        writeln!(out, "{}", display_text(name).bold())?;
    }
    writeln!(out, "--------------------------------")?;
    for line in lines {
        writeln!(out, "{}", display_text(line))?;
    }
    writeln!(out, "{}", format!("Portrait: {}", view.image).dimmed())?;
    writeln!(out, "{}", "[p]rev  [n]ext  [c]lose".dimmed())
}

fn display_text(line: &Line) -> String {
    if line.cap {
        capitalize_words(&line.text)
    } else {
        line.text.clone()
    }
}

/// Upper-cases the first letter of every whitespace-separated word.
pub fn capitalize_words(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if at_word_start && c.is_alphabetic() {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        at_word_start = c.is_whitespace();
    }
    result
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_each_word() {
        assert_eq!(capitalize_words("port elizabeth"), "Port Elizabeth");
        assert_eq!(capitalize_words("(555) 010-2030"), "(555) 010-2030");
        assert_eq!(capitalize_words("émile  zola"), "Émile  Zola");
    }

    #[test]
    fn truncates_with_ellipsis() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
        assert_eq!(pad_to_width("ab", 4), "ab  ");
    }
}
