//! Terminal front end for the controller hooks: line prompts, the delete
//! confirmation and route handling.

use std::borrow::Cow::{self, Borrowed, Owned};
use std::sync::Mutex;

use anyhow::{Context, Result};
use colored::Colorize;
use loom_core::navigation::{Confirm, Navigator, Route};
use rustyline::completion::Completer;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{DefaultEditor, Editor, Helper};

/// Draws every typed character as `*`.
struct MaskingHelper {
    masking: bool,
}

impl Helper for MaskingHelper {}

impl Completer for MaskingHelper {
    type Candidate = String;
}

impl Hinter for MaskingHelper {
    type Hint = String;
}

impl Validator for MaskingHelper {}

impl Highlighter for MaskingHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if self.masking {
            Owned("*".repeat(line.chars().count()))
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        self.masking
    }
}

/// Reads one line, trimmed.
pub fn read_line(prompt: &str) -> Result<String> {
    let mut rl = DefaultEditor::new().context("Failed to open the terminal")?;
    let line = rl
        .readline(prompt)
        .with_context(|| format!("No input for {:?}", prompt.trim()))?;
    Ok(line.trim().to_string())
}

/// Reads a password, masked unless `visible`.
pub fn read_password(prompt: &str, visible: bool) -> Result<String> {
    let mut rl: Editor<MaskingHelper, DefaultHistory> =
        Editor::new().context("Failed to open the terminal")?;
    rl.set_helper(Some(MaskingHelper { masking: !visible }));
    let line = rl
        .readline(prompt)
        .with_context(|| format!("No input for {:?}", prompt.trim()))?;
    Ok(line)
}

/// Asks on the terminal before destructive actions; `--yes` answers for the
/// user.
pub struct PromptConfirm {
    assume_yes: bool,
}

impl PromptConfirm {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Confirm for PromptConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        match read_line(&format!("{} [y/N] ", prompt.yellow())) {
            Ok(answer) => matches!(answer.to_lowercase().as_str(), "y" | "yes"),
            Err(e) => {
                tracing::debug!("[Prompt] Confirmation aborted: {:#}", e);
                false
            }
        }
    }
}

/// A CLI has no screens to switch; it remembers where the controller wanted
/// to go and lets the command render that.
#[derive(Default)]
pub struct TerminalNavigator {
    last: Mutex<Option<Route>>,
}

impl TerminalNavigator {
    pub fn last_route(&self) -> Option<Route> {
        self.last.lock().ok().and_then(|last| last.clone())
    }
}

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: Route) {
        tracing::debug!("[Navigator] -> {}", route.path());
        if let Ok(mut last) = self.last.lock() {
            *last = Some(route);
        }
    }
}

/// The command that shows `route` in this CLI.
pub fn route_hint(route: &Route) -> String {
    match route {
        Route::Home => "loom projects list".to_string(),
        Route::Login => "loom login".to_string(),
        Route::Register => "loom register".to_string(),
        Route::Project(project) => format!("loom projects open {}", project.id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loom_core::project::Project;

    #[test]
    fn test_assume_yes_confirms_without_prompt() {
        assert!(PromptConfirm::new(true).confirm("Delete?"));
    }

    #[test]
    fn test_navigator_keeps_last_route() {
        let navigator = TerminalNavigator::default();
        assert_eq!(navigator.last_route(), None);

        navigator.navigate(Route::Login);
        navigator.navigate(Route::Home);

        assert_eq!(navigator.last_route(), Some(Route::Home));
    }

    #[test]
    fn test_route_hints() {
        let project = Project {
            id: "p1".to_string(),
            name: "Alpha".to_string(),
            users: vec![],
        };
        assert_eq!(route_hint(&Route::Register), "loom register");
        assert_eq!(route_hint(&Route::Project(project)), "loom projects open p1");
    }

    #[test]
    fn test_masking_highlighter() {
        let masked = MaskingHelper { masking: true };
        assert_eq!(masked.highlight("s3cret", 6), "******");

        let plain = MaskingHelper { masking: false };
        assert_eq!(plain.highlight("s3cret", 6), "s3cret");
    }
}
