//! Decorative ID-card panel.
//!
//! A framed badge hanging from a lanyard, drawn beside the terminal when
//! the window is wide enough. It consumes no session state and emits no
//! events; hiding it (config, CLI flag, or a narrow window) changes
//! nothing about the terminal's behavior.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    execute,
    style::{Attribute, ResetColor, SetAttribute, SetForegroundColor},
};
use unicode_width::UnicodeWidthStr;

use crate::config::ColorScheme;

/// Inner text width of the badge, borders excluded.
const BADGE_INNER_WIDTH: usize = 28;

/// Lanyard strand rows drawn above the badge clip.
const LANYARD_ROWS: u16 = 3;

/// One row of the badge.
enum BadgeRow {
    /// Top or bottom border, drawn in the border color.
    Border(String),
    /// Content row: centered inner text between side borders.
    Text { inner: String, accent: bool },
}

/// Badge rows, top border to bottom border.
fn badge_rows() -> Vec<BadgeRow> {
    let rule = "─".repeat(BADGE_INNER_WIDTH - 4);
    let content: Vec<(&str, bool)> = vec![
        ("", false),
        ("RADIN MOKARI", true),
        ("", false),
        ("Computer Science Student", false),
        ("Data Analyst", false),
        (rule.as_str(), false),
        ("University of Bradford", false),
        ("Bradford, United Kingdom", false),
        ("", false),
        ("radinmokariii@gmail.com", false),
        ("github.com/Radin-Mokari", false),
        ("", false),
    ];

    let mut rows = vec![BadgeRow::Border(format!(
        "╭{}╮",
        "─".repeat(BADGE_INNER_WIDTH)
    ))];
    for (text, accent) in content {
        rows.push(BadgeRow::Text {
            inner: center(text, BADGE_INNER_WIDTH),
            accent,
        });
    }
    rows.push(BadgeRow::Border(format!(
        "╰{}╯",
        "─".repeat(BADGE_INNER_WIDTH)
    )));
    rows
}

/// Center `text` in a field of `width` display columns.
fn center(text: &str, width: usize) -> String {
    let text_width = UnicodeWidthStr::width(text);
    if text_width >= width {
        return text.to_string();
    }
    let left = (width - text_width) / 2;
    let right = width - text_width - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Draw the panel into the region at `(x, 0)` of `width` x `height` cells.
pub fn render<W: Write>(
    out: &mut W,
    scheme: &ColorScheme,
    x: u16,
    width: u16,
    height: u16,
) -> io::Result<()> {
    let rows = badge_rows();
    let badge_width = BADGE_INNER_WIDTH as u16 + 2;
    if width < badge_width + 2 || height < rows.len() as u16 + LANYARD_ROWS + 4 {
        return Ok(());
    }

    let badge_x = x + (width - badge_width) / 2;
    let center_x = x + width / 2;
    let block_height = LANYARD_ROWS + 1 + rows.len() as u16 + 2;
    let top = (height - block_height) / 3;

    let border = scheme.card_border.to_crossterm();

    // Lanyard strands and clip.
    execute!(out, SetForegroundColor(border))?;
    for row in 0..LANYARD_ROWS {
        execute!(out, MoveTo(center_x - 2, top + row))?;
        write!(out, "│  │")?;
    }
    execute!(out, MoveTo(center_x - 2, top + LANYARD_ROWS))?;
    write!(out, "╘══╛")?;

    // Badge body.
    let badge_top = top + LANYARD_ROWS + 1;
    for (i, row) in rows.iter().enumerate() {
        execute!(out, MoveTo(badge_x, badge_top + i as u16))?;
        match row {
            BadgeRow::Border(text) => {
                execute!(out, SetForegroundColor(border))?;
                write!(out, "{}", text)?;
            }
            BadgeRow::Text { inner, accent } => {
                execute!(out, SetForegroundColor(border))?;
                write!(out, "│")?;
                if *accent {
                    execute!(
                        out,
                        SetForegroundColor(scheme.card_accent.to_crossterm()),
                        SetAttribute(Attribute::Bold)
                    )?;
                    write!(out, "{}", inner)?;
                    execute!(out, SetAttribute(Attribute::Reset))?;
                } else {
                    execute!(out, SetForegroundColor(scheme.card_fg.to_crossterm()))?;
                    write!(out, "{}", inner)?;
                }
                execute!(out, SetForegroundColor(border))?;
                write!(out, "│")?;
            }
        }
    }

    // Caption.
    let caption = "[ Portfolio ID Card ]";
    let caption_x = x + (width.saturating_sub(UnicodeWidthStr::width(caption) as u16)) / 2;
    execute!(
        out,
        MoveTo(caption_x, badge_top + rows.len() as u16 + 1),
        SetForegroundColor(scheme.card_accent.to_crossterm())
    )?;
    write!(out, "{}", caption)?;

    execute!(out, ResetColor)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_rows_have_uniform_width() {
        for row in badge_rows() {
            match row {
                BadgeRow::Border(text) => {
                    assert_eq!(
                        UnicodeWidthStr::width(text.as_str()),
                        BADGE_INNER_WIDTH + 2
                    );
                }
                BadgeRow::Text { inner, .. } => {
                    assert_eq!(UnicodeWidthStr::width(inner.as_str()), BADGE_INNER_WIDTH);
                }
            }
        }
    }

    #[test]
    fn test_badge_contains_identity() {
        let all: String = badge_rows()
            .iter()
            .map(|row| match row {
                BadgeRow::Border(text) => text.as_str(),
                BadgeRow::Text { inner, .. } => inner.as_str(),
            })
            .collect();
        assert!(all.contains("RADIN MOKARI"));
        assert!(all.contains("University of Bradford"));
    }

    #[test]
    fn test_center_pads_both_sides() {
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(center("abc", 6), " abc  ");
        assert_eq!(center("toolong", 4), "toolong");
    }
}
