//! Operator prompts and collision-safe destination naming

use crate::io::configuration::MAX_RENAME_ATTEMPTS;
use crate::io::error::{PackError, Result, invalid_parameter};
use rand::Rng;
use std::io::{BufRead, StdinLock, Stdout, Write};
use std::path::{Path, PathBuf};

/// Line-oriented operator interaction
pub trait Prompter {
    /// Show `message` and return the operator's answer with surrounding whitespace trimmed
    ///
    /// # Errors
    ///
    /// Returns [`PackError::Prompt`] if the console cannot be written or read
    fn ask(&mut self, message: &str) -> Result<String>;

    /// Show `message` without waiting for an answer
    ///
    /// # Errors
    ///
    /// Returns [`PackError::Prompt`] if the console cannot be written
    fn notify(&mut self, message: &str) -> Result<()>;
}

/// Prompter over any buffered reader and writer
pub struct ConsolePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    /// Wrap an input and output stream
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl ConsolePrompter<StdinLock<'static>, Stdout> {
    /// Prompter bound to the process's standard input and output
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter for ConsolePrompter<R, W> {
    fn ask(&mut self, message: &str) -> Result<String> {
        self.notify(message)?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|source| PackError::Prompt {
                operation: "read answer",
                source,
            })?;
        if read == 0 {
            return Err(PackError::Prompt {
                operation: "read answer",
                source: std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    "input closed before an answer was given",
                ),
            });
        }
        Ok(line.trim().to_string())
    }

    fn notify(&mut self, message: &str) -> Result<()> {
        write!(self.output, "{message}")
            .and_then(|()| self.output.flush())
            .map_err(|source| PackError::Prompt {
                operation: "write prompt",
                source,
            })
    }
}

/// Progress of destination naming
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NamingState {
    /// A name is about to be tried
    Proposed(String),
    /// A renamed candidate the operator accepted
    ConfirmedRename(String),
    /// The operator declined a renamed candidate
    Aborted {
        /// Name that was proposed
        proposed: String,
        /// Answer given, empty when none
        answer: String,
    },
}

/// Behaviour of [`resolve_destination`] on name collisions
#[derive(Clone, Copy, Debug)]
pub struct NamingOptions {
    /// Accept renamed candidates without asking
    pub auto_confirm: bool,
    /// Candidates tried before giving up
    pub max_attempts: usize,
}

impl Default for NamingOptions {
    fn default() -> Self {
        Self {
            auto_confirm: false,
            max_attempts: MAX_RENAME_ATTEMPTS,
        }
    }
}

/// Whether an answer counts as "yes": first non-blank character is `y` in either case
pub fn is_affirmative(answer: &str) -> bool {
    answer
        .trim()
        .chars()
        .next()
        .is_some_and(|c| c.eq_ignore_ascii_case(&'y'))
}

/// Reject names that are blank or would escape the output root
///
/// # Errors
///
/// Returns [`PackError::InvalidParameter`] for unusable names
pub fn validate_pack_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(invalid_parameter("name", &name, &"must not be empty"));
    }
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(invalid_parameter(
            "name",
            &name,
            &"must be a single directory name",
        ));
    }
    Ok(())
}

/// Derive a collision candidate by appending a random numeric suffix
pub fn renamed_candidate<G: Rng>(name: &str, rng: &mut G) -> String {
    format!("{name}_{}", rng.random::<u32>())
}

/// Create a fresh directory for the pack under `parent`
///
/// Tries `requested` first. When a name is taken, a suffixed candidate is
/// proposed and, unless auto-confirmed, the operator must accept it before
/// it is tried in turn.
///
/// # Errors
///
/// Returns an error if:
/// - `requested` is not a usable directory name
/// - The operator declines ([`PackError::UserAborted`]) or gives no answer
///   ([`PackError::DestinationUnconfirmed`])
/// - No free name is found within `options.max_attempts`
/// - The directory cannot be created for a reason other than collision
pub fn resolve_destination<P, G>(
    parent: &Path,
    requested: &str,
    options: NamingOptions,
    prompter: &mut P,
    rng: &mut G,
) -> Result<PathBuf>
where
    P: Prompter + ?Sized,
    G: Rng,
{
    validate_pack_name(requested)?;

    let mut state = NamingState::Proposed(requested.to_string());
    let mut attempts = 0;
    loop {
        state = match state {
            NamingState::Proposed(name) | NamingState::ConfirmedRename(name) => {
                if attempts == options.max_attempts {
                    return Err(PackError::RenameAttemptsExhausted { attempts });
                }
                attempts += 1;

                let candidate = parent.join(&name);
                match std::fs::create_dir(&candidate) {
                    Ok(()) => {
                        log::info!("Created pack directory {}", candidate.display());
                        return Ok(candidate);
                    }
                    Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                        let renamed = renamed_candidate(&name, rng);
                        confirm_rename(renamed, options.auto_confirm, prompter)?
                    }
                    Err(source) => {
                        return Err(PackError::FileSystem {
                            path: candidate,
                            operation: "create directory",
                            source,
                        });
                    }
                }
            }
            NamingState::Aborted { proposed, answer } => {
                return Err(if answer.is_empty() {
                    PackError::DestinationUnconfirmed { proposed }
                } else {
                    PackError::UserAborted { proposed, answer }
                });
            }
        };
    }
}

fn confirm_rename<P>(renamed: String, auto_confirm: bool, prompter: &mut P) -> Result<NamingState>
where
    P: Prompter + ?Sized,
{
    prompter.notify(&format!(
        "Pack name is already in use. Pack will be renamed to: {renamed}\n"
    ))?;

    if auto_confirm {
        return Ok(NamingState::ConfirmedRename(renamed));
    }

    let answer = prompter.ask("Proceed? (y/n): ")?;
    if is_affirmative(&answer) {
        Ok(NamingState::ConfirmedRename(renamed))
    } else {
        Ok(NamingState::Aborted {
            proposed: renamed,
            answer,
        })
    }
}
