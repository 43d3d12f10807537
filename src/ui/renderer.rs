//! Full-screen terminal renderer using crossterm.
//!
//! Repaints the whole layout after every state transition: header bar,
//! available-commands banner, transcript viewport, input line with a
//! block caret, and the status bar. Frames are wrapped in synchronized
//! update markers to avoid tearing.
//!
//! Layout:
//!
//! ```text
//! ┌ card ┐┌──────────────── terminal ───────────────┐
//! │      ││ header bar                              │
//! │  ID  ││ Available: help | about | ...           │
//! │ card ││ transcript rows (scrollable)            │
//! │      ││ user@host:~$ input█                     │
//! │      ││ status bar                      hh:mm:ss│
//! └──────┘└─────────────────────────────────────────┘
//! ```
//!
//! The card panel appears only when the window is wide enough and is
//! drawn by [`super::card`]; it shares nothing with the session.

use std::io::{self, Write};

use chrono::Local;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::{Attribute, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{
        self, Clear, ClearType, DisableLineWrap, EnableLineWrap, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::card;
use crate::commands::CommandTable;
use crate::config::{ColorScheme, Config};
use crate::session::{LineKind, Session};

/// Minimum window width for the side-by-side card layout.
const MIN_CARD_LAYOUT_WIDTH: u16 = 96;

/// Width of the card panel, separator column included.
const CARD_PANEL_WIDTH: u16 = 37;

/// Rows consumed by chrome above the transcript (header + banner).
const TOP_CHROME_ROWS: u16 = 2;

/// One display row of the scrollable flow.
#[derive(Debug, PartialEq, Eq)]
enum Row {
    /// Wrapped fragment of a transcript line.
    Text { text: String, kind: LineKind },
    /// Separator between transcript entries.
    Blank,
    /// The prompt + input line, always last.
    Input,
}

/// Full-screen renderer.
pub struct Renderer {
    color_scheme: ColorScheme,
    username: String,
    hostname: String,
    show_card: bool,
    show_status_bar: bool,
    show_clock: bool,
    /// Caret blink phase, toggled by the event-loop tick.
    caret_on: bool,
    initialized: bool,
}

impl Renderer {
    pub fn new(config: &Config) -> Self {
        Self {
            color_scheme: config.get_color_scheme(),
            username: config.username.clone(),
            hostname: config.hostname.clone(),
            show_card: config.card.visible,
            show_status_bar: config.status_bar.visible,
            show_clock: config.status_bar.show_time,
            caret_on: true,
            initialized: false,
        }
    }

    /// Current terminal size
    pub fn size() -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Initialize the terminal for rendering
    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            crossterm::event::EnableMouseCapture,
            crossterm::event::EnableBracketedPaste,
            DisableLineWrap,
            Hide,
            Clear(ClearType::All),
            MoveTo(0, 0)
        )?;
        stdout.flush()?;
        self.initialized = true;
        Ok(())
    }

    /// Cleanup the terminal
    pub fn cleanup(&mut self) -> io::Result<()> {
        if !self.initialized {
            return Ok(());
        }
        self.initialized = false;

        let mut stdout = io::stdout();
        execute!(
            stdout,
            crossterm::event::DisableBracketedPaste,
            crossterm::event::DisableMouseCapture,
            EnableLineWrap,
            LeaveAlternateScreen,
            Show,
            ResetColor
        )?;
        stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Flip the caret blink phase (idle tick).
    pub fn toggle_caret(&mut self) {
        self.caret_on = !self.caret_on;
    }

    /// Force the caret visible, so it never blinks away mid-typing.
    pub fn show_caret(&mut self) {
        self.caret_on = true;
    }

    /// Repaint everything from the current session state.
    pub fn render(&mut self, session: &mut Session, table: &CommandTable) -> io::Result<()> {
        let (width, height) = Self::size()?;
        if width < 24 || height < 6 {
            return Ok(());
        }

        let card_visible = self.show_card && width >= MIN_CARD_LAYOUT_WIDTH;
        let term_x = if card_visible { CARD_PANEL_WIDTH } else { 0 };
        let term_width = width - term_x;

        let mut stdout = io::stdout().lock();

        // Begin synchronized update
        write!(stdout, "\x1b[?2026h")?;
        execute!(stdout, Clear(ClearType::All))?;

        if card_visible {
            card::render(
                &mut stdout,
                &self.color_scheme,
                0,
                CARD_PANEL_WIDTH - 1,
                height,
            )?;
            self.draw_separator(&mut stdout, CARD_PANEL_WIDTH - 1, height)?;
        }

        self.draw_header(&mut stdout, term_x, term_width)?;
        self.draw_banner(&mut stdout, table, term_x, term_width)?;
        self.draw_flow(&mut stdout, session, term_x, term_width, height)?;
        if self.show_status_bar {
            self.draw_status_bar(&mut stdout, session, term_x, term_width, height)?;
        }

        execute!(stdout, ResetColor)?;

        // End synchronized update
        write!(stdout, "\x1b[?2026l")?;
        stdout.flush()?;
        Ok(())
    }

    fn draw_separator<W: Write>(&self, out: &mut W, x: u16, height: u16) -> io::Result<()> {
        execute!(
            out,
            SetForegroundColor(self.color_scheme.header_bg.to_crossterm())
        )?;
        for y in 0..height {
            execute!(out, MoveTo(x, y))?;
            write!(out, "│")?;
        }
        execute!(out, ResetColor)?;
        Ok(())
    }

    /// Header bar: traffic lights, identity, version.
    fn draw_header<W: Write>(&self, out: &mut W, x: u16, width: u16) -> io::Result<()> {
        let cs = &self.color_scheme;
        execute!(
            out,
            MoveTo(x, 0),
            SetBackgroundColor(cs.header_bg.to_crossterm()),
            SetForegroundColor(cs.header_fg.to_crossterm())
        )?;
        write!(out, "{:width$}", "", width = width as usize)?;

        execute!(out, MoveTo(x + 1, 0))?;
        for dot in [(255u8, 95u8, 86u8), (255, 189, 46), (39, 201, 63)] {
            execute!(
                out,
                SetForegroundColor(crossterm::style::Color::Rgb {
                    r: dot.0,
                    g: dot.1,
                    b: dot.2
                })
            )?;
            write!(out, "● ")?;
        }

        let identity = format!("{}@{}: ~", self.username, self.hostname);
        execute!(
            out,
            SetForegroundColor(cs.header_fg.to_crossterm()),
            SetAttribute(Attribute::Bold)
        )?;
        write!(out, " {}", identity)?;
        execute!(out, SetAttribute(Attribute::Reset))?;

        let version = format!("Terminal v{}", env!("CARGO_PKG_VERSION"));
        let version_x = x + width.saturating_sub(version.len() as u16 + 1);
        execute!(
            out,
            SetBackgroundColor(cs.header_bg.to_crossterm()),
            MoveTo(version_x, 0),
            SetForegroundColor(cs.header_fg.to_crossterm())
        )?;
        write!(out, "{}", version)?;
        execute!(out, ResetColor)?;
        Ok(())
    }

    /// Dimmed one-line list of every command, from the table.
    fn draw_banner<W: Write>(
        &self,
        out: &mut W,
        table: &CommandTable,
        x: u16,
        width: u16,
    ) -> io::Result<()> {
        let names: Vec<&str> = table.names().collect();
        let banner = format!("Available: {}", names.join(" | "));
        execute!(
            out,
            MoveTo(x + 1, 1),
            SetForegroundColor(self.color_scheme.banner_fg.to_crossterm())
        )?;
        write!(
            out,
            "{}",
            truncate_width(&banner, width.saturating_sub(2) as usize)
        )?;
        execute!(out, ResetColor)?;
        Ok(())
    }

    /// The scrollable flow: wrapped transcript rows plus the input line.
    fn draw_flow<W: Write>(
        &self,
        out: &mut W,
        session: &mut Session,
        x: u16,
        width: u16,
        height: u16,
    ) -> io::Result<()> {
        let cs = &self.color_scheme;
        let text_width = width.saturating_sub(2) as usize;
        let bottom_chrome = if self.show_status_bar { 1 } else { 0 };
        let viewport = height.saturating_sub(TOP_CHROME_ROWS + bottom_chrome) as usize;

        let rows = build_rows(session, text_width);
        let max_scroll = rows.len().saturating_sub(viewport);
        session.clamp_scroll(max_scroll);
        let (start, len) = visible_range(rows.len(), viewport, session.scroll_offset());

        for (i, row) in rows[start..start + len].iter().enumerate() {
            let y = TOP_CHROME_ROWS + i as u16;
            execute!(out, MoveTo(x + 1, y))?;
            match row {
                Row::Blank => {}
                Row::Text { text, kind } => {
                    let color = match kind {
                        LineKind::Command => cs.command_fg,
                        LineKind::Output => cs.output_fg,
                        LineKind::Welcome => cs.welcome_fg,
                        LineKind::Error => cs.error_fg,
                    };
                    execute!(out, SetForegroundColor(color.to_crossterm()))?;
                    write!(out, "{}", text)?;
                }
                Row::Input => {
                    self.draw_input_line(out, session, text_width)?;
                }
            }
        }
        execute!(out, ResetColor)?;
        Ok(())
    }

    /// Prompt, input text, and the block caret.
    fn draw_input_line<W: Write>(
        &self,
        out: &mut W,
        session: &Session,
        text_width: usize,
    ) -> io::Result<()> {
        let cs = &self.color_scheme;
        let prompt = session.prompt();
        let prompt_width = UnicodeWidthStr::width(prompt) + 1;

        execute!(
            out,
            SetForegroundColor(cs.prompt_fg.to_crossterm()),
            SetAttribute(Attribute::Bold)
        )?;
        write!(out, "{} ", prompt)?;
        execute!(out, SetAttribute(Attribute::Reset))?;

        // Keep the tail visible when the input outgrows the row.
        let max_width = text_width.saturating_sub(prompt_width + 1);
        let shown = tail_width(&session.input, max_width);
        execute!(out, SetForegroundColor(cs.input_fg.to_crossterm()))?;
        write!(out, "{}", shown)?;
        if self.caret_on {
            write!(out, "█")?;
        }
        Ok(())
    }

    /// Status bar: key hints left, clock right.
    fn draw_status_bar<W: Write>(
        &self,
        out: &mut W,
        session: &Session,
        x: u16,
        width: u16,
        height: u16,
    ) -> io::Result<()> {
        let cs = &self.color_scheme;
        execute!(
            out,
            MoveTo(x, height - 1),
            SetBackgroundColor(cs.status_bar_bg.to_crossterm()),
            SetForegroundColor(cs.status_bar_fg.to_crossterm())
        )?;

        let hints = if session.scroll_offset() > 0 {
            "[scrolled] PgDn/wheel: back to prompt"
        } else {
            "Tab: autocomplete • ↑↓: history • Ctrl+L: clear • Ctrl+C: quit"
        };
        let clock = if self.show_clock {
            Local::now().format("%d/%m/%Y %H:%M:%S").to_string()
        } else {
            String::new()
        };

        let right_width = UnicodeWidthStr::width(clock.as_str());
        let left = truncate_width(hints, (width as usize).saturating_sub(right_width + 3));
        let left_width = UnicodeWidthStr::width(left.as_str());
        let padding = (width as usize).saturating_sub(left_width + right_width + 2);
        write!(out, " {}{:padding$}{} ", left, "", clock, padding = padding)?;
        execute!(out, ResetColor)?;
        Ok(())
    }
}

/// Wrap `text` (no newlines) into rows of at most `width` display columns.
fn wrap_width(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + ch_width > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            used = 0;
        }
        current.push(ch);
        used += ch_width;
    }
    lines.push(current);
    lines
}

/// Truncate `text` to at most `width` display columns.
fn truncate_width(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + ch_width > width {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out
}

/// Last portion of `text` fitting in `width` display columns.
fn tail_width(text: &str, width: usize) -> &str {
    let mut used = 0usize;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + ch_width > width {
            break;
        }
        used += ch_width;
        start = idx;
    }
    &text[start..]
}

/// Flatten the transcript and input line into display rows.
fn build_rows(session: &Session, width: usize) -> Vec<Row> {
    let mut rows = Vec::new();
    for line in &session.transcript {
        for logical in line.text.split('\n') {
            if logical.is_empty() {
                rows.push(Row::Blank);
            } else {
                for piece in wrap_width(logical, width) {
                    rows.push(Row::Text {
                        text: piece,
                        kind: line.kind,
                    });
                }
            }
        }
        rows.push(Row::Blank);
    }
    rows.push(Row::Input);
    rows
}

/// Window of `viewport` rows over `total`, `offset` rows up from the end.
/// Returns (start, length).
fn visible_range(total: usize, viewport: usize, offset: usize) -> (usize, usize) {
    if total <= viewport {
        return (0, total);
    }
    let max_offset = total - viewport;
    let offset = offset.min(max_offset);
    (max_offset - offset, viewport)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;

    #[test]
    fn test_wrap_width_splits_on_display_width() {
        assert_eq!(wrap_width("abcdef", 3), vec!["abc", "def"]);
        assert_eq!(wrap_width("abcd", 3), vec!["abc", "d"]);
        assert_eq!(wrap_width("ab", 3), vec!["ab"]);
        assert_eq!(wrap_width("", 3), vec![""]);
    }

    #[test]
    fn test_wrap_width_handles_wide_chars() {
        // Each CJK character is two columns wide.
        assert_eq!(wrap_width("日本語", 4), vec!["日本", "語"]);
    }

    #[test]
    fn test_truncate_width() {
        assert_eq!(truncate_width("abcdef", 4), "abcd");
        assert_eq!(truncate_width("日本語", 4), "日本");
        assert_eq!(truncate_width("ab", 10), "ab");
    }

    #[test]
    fn test_tail_width() {
        assert_eq!(tail_width("abcdef", 3), "def");
        assert_eq!(tail_width("ab", 3), "ab");
        assert_eq!(tail_width("日本語", 4), "本語");
    }

    #[test]
    fn test_visible_range() {
        // Everything fits.
        assert_eq!(visible_range(5, 10, 0), (0, 5));
        // Pinned to the latest rows.
        assert_eq!(visible_range(20, 10, 0), (10, 10));
        // Scrolled up.
        assert_eq!(visible_range(20, 10, 4), (6, 10));
        // Offset clamped at the top.
        assert_eq!(visible_range(20, 10, 99), (0, 10));
    }

    #[test]
    fn test_build_rows_ends_with_input() {
        let session = Session::new("radin", "portfolio");
        let rows = build_rows(&session, 80);
        assert_eq!(rows.last(), Some(&Row::Input));
        // Welcome banner and intro are present and separated by blanks.
        assert!(rows
            .iter()
            .any(|row| matches!(row, Row::Text { kind, .. } if *kind == LineKind::Welcome)));
        assert!(rows.iter().any(|row| matches!(row, Row::Blank)));
    }

    #[test]
    fn test_build_rows_wraps_long_transcript_lines() {
        let mut session = Session::new("radin", "portfolio");
        let table = crate::commands::CommandTable::new("radin", "portfolio");
        session.input = "x".repeat(50);
        session.submit_input(&table);

        let rows = build_rows(&session, 10);
        let overwide = rows.iter().any(|row| match row {
            Row::Text { text, .. } => UnicodeWidthStr::width(text.as_str()) > 10,
            _ => false,
        });
        assert!(!overwide);
    }
}
