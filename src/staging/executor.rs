use std::io::{self, BufRead, Write};

use crate::error::{Error, Result};
use crate::report::Reporter;
use crate::tags::TagStore;

use super::change::Change;

pub const PROMPT: &str = "if these changes should be committed type yes: ";

/// Exact answer that commits a batch.
pub const AFFIRMATIVE: &str = "yes";

/// Source of the operator's single yes/no answer.
pub trait Confirm {
    /// Show `prompt` and return the raw answer line.
    fn read_answer(&mut self, prompt: &str) -> io::Result<String>;

    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        let answer = self.read_answer(prompt)?;
        Ok(answer.trim_end_matches(['\r', '\n']) == AFFIRMATIVE)
    }
}

/// Prompts on stdout and reads one line from stdin.
#[derive(Debug, Default)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn read_answer(&mut self, prompt: &str) -> io::Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    NothingToChange,
    Declined { pending: usize },
    Applied(usize),
}

/// List every staged change, ask once, and apply them all on "yes".
///
/// Changes run in the order they were planned. The first failing change
/// stops the batch; the error says how many were already applied.
pub fn stage_and_run(
    changes: Vec<Change>,
    confirm: &mut dyn Confirm,
    store: &dyn TagStore,
    reporter: &dyn Reporter,
) -> Result<Outcome> {
    if changes.is_empty() {
        reporter.info("nothing to change");
        return Ok(Outcome::NothingToChange);
    }

    let total = changes.len();
    for (i, change) in changes.iter().enumerate() {
        reporter.info(&format!("[{}/{total}] {change}", i + 1));
    }
    reporter.info(&format!("{total} change(s) staged"));

    let confirmed = confirm
        .confirm(PROMPT)
        .map_err(|e| Error::io("<stdin>", e))?;
    if !confirmed {
        reporter.info("aborted, nothing was changed");
        return Ok(Outcome::Declined { pending: total });
    }

    for (i, change) in changes.iter().enumerate() {
        reporter.info(&format!("applying change {}/{total}", i + 1));
        if let Err(e) = change.apply(store) {
            reporter.warn(&format!(
                "change {}/{total} failed, {} remaining change(s) skipped: {e}",
                i + 1,
                total - i - 1
            ));
            return Err(Error::Apply {
                index: i + 1,
                applied: i,
                source: Box::new(e),
            });
        }
    }

    Ok(Outcome::Applied(total))
}
