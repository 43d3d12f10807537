//! Terminal session state and the command resolver.
//!
//! A [`Session`] owns everything the terminal panel displays and reacts
//! to: the transcript, the uncommitted input buffer, the command history
//! with its recall cursor, and the viewport scroll offset. All
//! transitions happen synchronously on the event thread; nothing else
//! reads or writes this state.
//!
//! The transcript is append-only with one exception: resolving `clear`
//! replaces it with a single fresh welcome-style line.

use chrono::Local;

use crate::commands::{CommandAction, CommandTable};
use crate::history::{recall, CommandHistory};

/// Display class of a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Echo of a submitted command, prompt included.
    Command,
    /// Response text from the command table.
    Output,
    /// Session banner lines (startup greeting, clear announcement).
    Welcome,
    /// The "command not found" message.
    Error,
}

/// One entry in the transcript. `text` may span multiple lines.
#[derive(Debug, Clone)]
pub struct TranscriptLine {
    pub kind: LineKind,
    pub text: String,
    /// Informational wall-clock stamp, set on command echoes only.
    pub timestamp: Option<String>,
}

impl TranscriptLine {
    fn new(kind: LineKind, text: String) -> Self {
        Self {
            kind,
            text,
            timestamp: None,
        }
    }

    fn stamped(kind: LineKind, text: String) -> Self {
        Self {
            kind,
            text,
            timestamp: Some(Local::now().format("%H:%M:%S").to_string()),
        }
    }
}

const INTRO_TEXT: &str = "Hi, I'm Radin Mokari, a Computer Science student and Data Analyst.

Currently Bradford-based but flexible on location.
Welcome to my interactive portfolio terminal!

Type 'help' to see available commands or start exploring with 'about'.";

/// Session state for one terminal panel.
///
/// Created once at startup, seeded with the welcome transcript, and
/// dropped when the application exits. Never persisted.
pub struct Session {
    /// Ordered transcript, oldest first.
    pub transcript: Vec<TranscriptLine>,
    /// Current uncommitted input. The caret always sits at the end.
    pub input: String,
    /// Fixed prompt prefix, e.g. `radin@portfolio:~$`.
    prompt: String,
    history: CommandHistory,
    /// Recall cursor into `history`; `None` while not navigating.
    history_cursor: Option<usize>,
    /// Display rows scrolled up from the latest line. Clamped by the
    /// renderer, which knows the wrapped transcript height.
    scroll_offset: usize,
}

impl Session {
    /// Create a session seeded with the welcome banner and introduction.
    pub fn new(username: &str, hostname: &str) -> Self {
        let prompt = format!("{}@{}:~$", username, hostname);
        let last_login = Local::now().format("%a %b %d %Y %H:%M:%S");
        let banner = format!(
            "Welcome to Radin Mokari's Portfolio Terminal v{}\n\nLast login: {} from {}.local\n\n{} welcome",
            env!("CARGO_PKG_VERSION"),
            last_login,
            hostname,
            prompt
        );

        Self {
            transcript: vec![
                TranscriptLine::new(LineKind::Welcome, banner),
                TranscriptLine::new(LineKind::Output, INTRO_TEXT.to_string()),
            ],
            input: String::new(),
            prompt,
            history: CommandHistory::new(),
            history_cursor: None,
            scroll_offset: 0,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[allow(dead_code)]
    pub fn history_cursor(&self) -> Option<usize> {
        self.history_cursor
    }

    /// Submit the current input buffer. The buffer is cleared whatever
    /// the resolver does with it.
    pub fn submit_input(&mut self, table: &CommandTable) {
        let raw = std::mem::take(&mut self.input);
        self.resolve(&raw, table);
    }

    /// The clear shortcut (Ctrl+L): submit the literal `clear`, then
    /// reset the input buffer.
    pub fn clear_shortcut(&mut self, table: &CommandTable) {
        self.resolve("clear", table);
        self.input.clear();
    }

    /// The command resolver. Trims, records history, echoes, and resolves
    /// against the table. An all-whitespace submission is the only silent
    /// no-op.
    fn resolve(&mut self, raw: &str, table: &CommandTable) {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return;
        }

        // Recorded before interception, so `clear` recalls like anything else.
        self.history.push(trimmed.to_string());
        self.history_cursor = None;

        // The echo keeps original casing; only the lookup key is lowercased.
        let echo = TranscriptLine::stamped(
            LineKind::Command,
            format!("{} {}", self.prompt, trimmed),
        );
        let key = trimmed.to_lowercase();

        match table.lookup(&key) {
            Some(CommandAction::Clear) => {
                self.transcript = vec![TranscriptLine::new(
                    LineKind::Welcome,
                    format!("{} clear\n\nTerminal cleared.", self.prompt),
                )];
            }
            Some(CommandAction::StaticText(body)) | Some(CommandAction::Exit(body)) => {
                self.transcript.push(echo);
                self.transcript
                    .push(TranscriptLine::new(LineKind::Output, body.clone()));
            }
            None => {
                self.transcript.push(echo);
                self.transcript.push(TranscriptLine::new(
                    LineKind::Error,
                    format!(
                        "bash: {}: command not found\n\nType 'help' to see available commands.",
                        trimmed
                    ),
                ));
            }
        }

        self.scroll_offset = 0;
    }

    /// Recall-previous (ArrowUp): step toward the oldest entry and load
    /// it into the input buffer. No-op when the history is empty.
    pub fn recall_previous(&mut self) {
        if let Some(index) = recall::previous(self.history_cursor, self.history.len()) {
            self.history_cursor = Some(index);
            if let Some(command) = self.history.get(index) {
                self.input = command.to_string();
            }
        }
    }

    /// Recall-next (ArrowDown): step toward the newest entry; stepping
    /// past it leaves navigation and empties the input buffer. No-op
    /// when not navigating.
    pub fn recall_next(&mut self) {
        if self.history_cursor.is_none() {
            return;
        }
        match recall::next(self.history_cursor, self.history.len()) {
            Some(index) => {
                self.history_cursor = Some(index);
                if let Some(command) = self.history.get(index) {
                    self.input = command.to_string();
                }
            }
            None => {
                self.history_cursor = None;
                self.input.clear();
            }
        }
    }

    /// Tab completion: replace the input buffer when exactly one command
    /// name starts with it (case-insensitive). Zero or several matches
    /// change nothing and show no error.
    pub fn complete(&mut self, table: &CommandTable) {
        let matches = table.completions(&self.input.to_lowercase());
        if let [only] = matches.as_slice() {
            self.input = only.to_string();
        }
    }

    pub fn insert_char(&mut self, ch: char) {
        self.input.push(ch);
    }

    /// Insert pasted text. Line breaks are stripped; paste never submits.
    pub fn insert_str(&mut self, text: &str) {
        self.input
            .extend(text.chars().filter(|ch| *ch != '\n' && *ch != '\r'));
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    /// Snap the viewport back to the latest line.
    pub fn scroll_to_latest(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Clamp the offset against the wrapped transcript height, which only
    /// the renderer knows.
    pub fn clamp_scroll(&mut self, max: usize) {
        if self.scroll_offset > max {
            self.scroll_offset = max;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> (Session, CommandTable) {
        (
            Session::new("radin", "portfolio"),
            CommandTable::new("radin", "portfolio"),
        )
    }

    fn submit(session: &mut Session, table: &CommandTable, text: &str) {
        session.input = text.to_string();
        session.submit_input(table);
    }

    #[test]
    fn test_seeded_with_welcome_and_intro() {
        let (session, _) = session();
        assert_eq!(session.transcript.len(), 2);
        assert_eq!(session.transcript[0].kind, LineKind::Welcome);
        assert!(session.transcript[0]
            .text
            .starts_with("Welcome to Radin Mokari's Portfolio Terminal"));
        assert!(session.transcript[0].text.contains("Last login:"));
        assert_eq!(session.transcript[1].kind, LineKind::Output);
        assert!(session.history.is_empty());
    }

    #[test]
    fn test_submit_appends_echo_and_output_pair() {
        let (mut session, table) = session();
        let before = session.transcript.len();
        submit(&mut session, &table, "help");

        assert_eq!(session.transcript.len(), before + 2);
        let echo = &session.transcript[before];
        let result = &session.transcript[before + 1];
        assert_eq!(echo.kind, LineKind::Command);
        assert_eq!(echo.text, "radin@portfolio:~$ help");
        assert_eq!(result.kind, LineKind::Output);
        assert!(result.text.starts_with("Available commands:"));

        assert_eq!(session.history.len(), 1);
        assert_eq!(session.history.get(0), Some("help"));
        assert!(session.input.is_empty());
    }

    #[test]
    fn test_submit_trims_but_echoes_original_casing() {
        let (mut session, table) = session();
        submit(&mut session, &table, "  HELP  ");

        let echo = session.transcript.iter().rev().nth(1).unwrap();
        assert_eq!(echo.text, "radin@portfolio:~$ HELP");
        assert_eq!(session.history.get(0), Some("HELP"));
    }

    #[test]
    fn test_mixed_case_resolves_identically() {
        let (mut session, table) = session();
        submit(&mut session, &table, "HELP");
        let upper = session.transcript.last().unwrap().text.clone();

        let (mut session, table) = self::session();
        submit(&mut session, &table, "help");
        let lower = session.transcript.last().unwrap().text.clone();

        assert_eq!(upper, lower);
    }

    #[test]
    fn test_whitespace_submission_is_silent_noop() {
        let (mut session, table) = session();
        let before = session.transcript.len();
        submit(&mut session, &table, "   ");
        submit(&mut session, &table, "");

        assert_eq!(session.transcript.len(), before);
        assert!(session.history.is_empty());
    }

    #[test]
    fn test_unknown_command_produces_error_line() {
        let (mut session, table) = session();
        submit(&mut session, &table, "foobar");

        let result = session.transcript.last().unwrap();
        assert_eq!(result.kind, LineKind::Error);
        assert!(result.text.contains("foobar"));
        assert!(result.text.contains("command not found"));
        assert!(result.text.contains("help"));
    }

    #[test]
    fn test_clear_replaces_transcript_with_single_line() {
        let (mut session, table) = session();
        submit(&mut session, &table, "about");
        submit(&mut session, &table, "CLEAR");

        assert_eq!(session.transcript.len(), 1);
        assert_eq!(session.transcript[0].kind, LineKind::Welcome);
        assert!(session.transcript[0].text.contains("Terminal cleared."));
        // Recorded in history before interception.
        assert_eq!(session.history.get(1), Some("CLEAR"));
    }

    #[test]
    fn test_exit_prints_without_clearing() {
        let (mut session, table) = session();
        let before = session.transcript.len();
        submit(&mut session, &table, "exit");

        assert_eq!(session.transcript.len(), before + 2);
        let result = session.transcript.last().unwrap();
        assert_eq!(result.kind, LineKind::Output);
        assert!(result.text.starts_with("Session terminated."));
        assert!(result.text.contains("Connection to radin@portfolio closed."));
    }

    #[test]
    fn test_echo_lines_are_stamped_results_are_not() {
        let (mut session, table) = session();
        submit(&mut session, &table, "contact");

        let echo = session.transcript.iter().rev().nth(1).unwrap();
        let result = session.transcript.last().unwrap();
        assert!(echo.timestamp.is_some());
        assert!(result.timestamp.is_none());
    }

    #[test]
    fn test_recall_previous_walks_back_and_clamps() {
        let (mut session, table) = session();
        submit(&mut session, &table, "help");
        submit(&mut session, &table, "about");
        submit(&mut session, &table, "contact");

        session.recall_previous();
        assert_eq!(session.input, "contact");
        session.recall_previous();
        assert_eq!(session.input, "about");
        session.recall_previous();
        assert_eq!(session.input, "help");
        // Clamped at the oldest entry.
        session.recall_previous();
        assert_eq!(session.input, "help");
        assert_eq!(session.history_cursor(), Some(0));
    }

    #[test]
    fn test_recall_round_trip_lands_on_second_most_recent() {
        let (mut session, table) = session();
        submit(&mut session, &table, "help");
        submit(&mut session, &table, "about");
        submit(&mut session, &table, "contact");

        session.recall_previous();
        session.recall_previous();
        session.recall_previous();
        session.recall_next();
        assert_eq!(session.input, "about");
    }

    #[test]
    fn test_recall_next_past_newest_resets() {
        let (mut session, table) = session();
        submit(&mut session, &table, "help");

        session.recall_previous();
        assert_eq!(session.input, "help");
        session.recall_next();
        assert!(session.input.is_empty());
        assert_eq!(session.history_cursor(), None);
        // Still not navigating: another recall-next changes nothing.
        session.recall_next();
        assert!(session.input.is_empty());
    }

    #[test]
    fn test_recall_on_empty_history_is_noop() {
        let (mut session, _) = session();
        session.input = "typed".to_string();
        session.recall_previous();
        assert_eq!(session.input, "typed");
        session.recall_next();
        assert_eq!(session.input, "typed");
    }

    #[test]
    fn test_submit_resets_recall_cursor() {
        let (mut session, table) = session();
        submit(&mut session, &table, "help");
        session.recall_previous();
        assert_eq!(session.history_cursor(), Some(0));

        submit(&mut session, &table, "about");
        assert_eq!(session.history_cursor(), None);
    }

    #[test]
    fn test_completion_single_match() {
        let (mut session, table) = session();
        session.input = "ab".to_string();
        session.complete(&table);
        assert_eq!(session.input, "about");
    }

    #[test]
    fn test_completion_is_case_insensitive() {
        let (mut session, table) = session();
        session.input = "AB".to_string();
        session.complete(&table);
        assert_eq!(session.input, "about");
    }

    #[test]
    fn test_completion_ambiguous_leaves_input() {
        let (mut session, table) = session();
        session.input = "e".to_string();
        session.complete(&table);
        assert_eq!(session.input, "e");
    }

    #[test]
    fn test_completion_no_match_leaves_input() {
        let (mut session, table) = session();
        session.input = "zz".to_string();
        session.complete(&table);
        assert_eq!(session.input, "zz");

        // `clear` is excluded from completion entirely.
        session.input = "cl".to_string();
        session.complete(&table);
        assert_eq!(session.input, "cl");
    }

    #[test]
    fn test_clear_shortcut_matches_submitting_clear() {
        let (mut session, table) = session();
        submit(&mut session, &table, "about");
        session.input = "half-typed".to_string();
        session.clear_shortcut(&table);

        assert_eq!(session.transcript.len(), 1);
        assert!(session.transcript[0].text.contains("Terminal cleared."));
        assert!(session.input.is_empty());
        assert_eq!(session.history.get(1), Some("clear"));
    }

    #[test]
    fn test_paste_strips_line_breaks() {
        let (mut session, _) = session();
        session.insert_str("ab\nout\r\n");
        assert_eq!(session.input, "about");
    }

    #[test]
    fn test_submit_snaps_scroll_to_latest() {
        let (mut session, table) = session();
        session.scroll_up(12);
        assert!(session.scroll_offset() > 0);
        submit(&mut session, &table, "help");
        assert_eq!(session.scroll_offset(), 0);
    }

    #[test]
    fn test_scroll_clamping() {
        let (mut session, _) = session();
        session.scroll_up(100);
        session.clamp_scroll(40);
        assert_eq!(session.scroll_offset(), 40);
        session.scroll_down(50);
        assert_eq!(session.scroll_offset(), 0);
    }
}
