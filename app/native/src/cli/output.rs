//! CLI output formatting utilities.
//!
//! - JSON syntax highlighting for `--json` output
//! - Tables for layout results

use colored::Colorize;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::grid::TileFrame;

/// Maximum number of characters of a tile identifier shown in tables.
const MAX_ID_CHARS: usize = 32;

/// Prints JSON with syntax highlighting.
///
/// Keys are cyan, strings green, numbers yellow, booleans and null magenta.
pub fn print_highlighted_json(value: &serde_json::Value) {
    println!("{}", highlight_json(value));
}

/// Renders pretty-printed JSON with syntax highlighting.
#[must_use]
pub fn highlight_json(value: &serde_json::Value) -> String {
    let json = serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string());
    let mut out = String::with_capacity(json.len());
    let mut chars = json.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                let mut literal = String::from('"');
                let mut escaped = false;
                for next in chars.by_ref() {
                    literal.push(next);
                    if escaped {
                        escaped = false;
                    } else if next == '\\' {
                        escaped = true;
                    } else if next == '"' {
                        break;
                    }
                }

                // Pretty-printed keys are immediately followed by ':'
                let is_key = chars.peek() == Some(&':');
                let colored = if is_key { literal.cyan() } else { literal.green() };
                out.push_str(&colored.to_string());
            }
            ':' => out.push(':'),
            ',' | '{' | '}' | '[' | ']' => out.push_str(&ch.to_string().white().to_string()),
            c if c.is_whitespace() => out.push(c),
            c => {
                let mut token = String::from(c);
                while let Some(&next) = chars.peek() {
                    if matches!(next, ',' | '}' | ']') || next.is_whitespace() {
                        break;
                    }
                    token.push(next);
                    chars.next();
                }

                let colored = match token.as_str() {
                    "true" | "false" | "null" => token.magenta(),
                    _ => token.yellow(),
                };
                out.push_str(&colored.to_string());
            }
        }
    }

    out
}

/// Truncates a string to a maximum number of characters, adding ellipsis if needed.
#[must_use]
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars <= 1 {
        "…".to_string()
    } else {
        let truncate_at = s.char_indices().nth(max_chars - 1).map_or(s.len(), |(idx, _)| idx);
        format!("{}…", &s[..truncate_at])
    }
}

/// A row of the tile layout table.
#[derive(Tabled)]
struct TileRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Tile")]
    id: String,
    #[tabled(rename = "X")]
    x: u32,
    #[tabled(rename = "Y")]
    y: u32,
    #[tabled(rename = "Width")]
    width: u32,
    #[tabled(rename = "Height")]
    height: u32,
}

/// Renders tile frames as a table.
#[must_use]
pub fn frames_table(frames: &[TileFrame]) -> String {
    let rows = frames.iter().map(|frame| TileRow {
        index: frame.geometry.index,
        id: truncate(frame.id.as_str(), MAX_ID_CHARS),
        x: frame.geometry.x,
        y: frame.geometry.y,
        width: frame.geometry.width,
        height: frame.geometry.height,
    });

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::right()))
        .with(Modify::new(Columns::new(2..6)).with(Alignment::right()))
        .to_string()
}
