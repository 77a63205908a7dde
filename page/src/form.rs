#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Milliseconds the simulated send takes before completing.
pub const SEND_DELAY_MS: u64 = 850;

/// The three text fields of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    /// Check the draft the way the submit path does: every field must be
    /// non-empty after trimming, and the email must look like an address.
    ///
    /// # Errors
    ///
    /// `MissingFields` when any trimmed field is empty, checked before
    /// `InvalidEmail` for a malformed address.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        if !email_is_plausible(email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

/// Permissive shape check: something@something.something, no whitespace
/// anywhere. Some `@` must have at least one character before it, and
/// somewhere after it a `.` with at least one character on each side.
/// Extra `@`s and dots around that skeleton are tolerated.
fn email_is_plausible(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    // Only a leading `@` cannot anchor the shape; search past it.
    let at = match email.find('@') {
        Some(0) => match email[1..].find('@') {
            Some(i) => i + 1,
            None => return false,
        },
        Some(i) => i,
        None => return false,
    };
    let rest = &email[at + 1..];
    rest.match_indices('.')
        .any(|(dot, _)| dot > 0 && dot + 1 < rest.len())
}

/// Why a submit was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty (or whitespace-only).
    MissingFields,
    /// The email field does not look like an address.
    InvalidEmail,
}

impl ValidationError {
    /// The user-facing status-line text for this rejection.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingFields => "Please fill all required fields.",
            Self::InvalidEmail => "Please enter a valid email address.",
        }
    }
}

/// One submission attempt's identity. Tokens strictly increase, so a later
/// attempt always outranks an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SendToken(u64);

/// Where the form is in its send lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SendPhase {
    #[default]
    Idle,
    Sending(SendToken),
}

/// Contact form machine: draft, status line, and send lifecycle.
///
/// The view layer owns the delay timer; this type decides everything else.
/// A submit either rejects (status message, nothing else changes) or hands
/// back a token the caller completes once the simulated delay elapses.
/// Only the latest token's completion takes effect, so overlapping
/// submissions resolve last-wins.
#[derive(Debug, Clone, Default)]
pub struct ContactFlow {
    pub draft: ContactDraft,
    status: String,
    phase: SendPhase,
    issued: u64,
}

impl ContactFlow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current status-line text. Empty means no message is shown.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// True while a send is in flight; the submit button is disabled.
    #[must_use]
    pub fn button_disabled(&self) -> bool {
        matches!(self.phase, SendPhase::Sending(_))
    }

    /// Submit-button label for the current phase.
    #[must_use]
    pub fn button_label(&self) -> &'static str {
        match self.phase {
            SendPhase::Sending(_) => "Sending...",
            SendPhase::Idle => "Send message",
        }
    }

    /// Attempt a submit. Clears the status line and validates the draft:
    /// a rejection writes its message to the status line and returns
    /// `None`, leaving the fields untouched; an accepted submit enters
    /// `Sending` and returns the token to pass to [`Self::complete`] after
    /// the simulated delay. Submitting while already sending issues a
    /// fresh token that supersedes the one in flight.
    pub fn submit(&mut self) -> Option<SendToken> {
        self.status.clear();
        if let Err(err) = self.draft.validate() {
            self.status = err.message().to_owned();
            return None;
        }
        self.issued += 1;
        let token = SendToken(self.issued);
        self.phase = SendPhase::Sending(token);
        Some(token)
    }

    /// Finish the send identified by `token`. On the latest token: clears
    /// the draft, returns to idle, reports the simulated success, and
    /// returns `true`. A stale token (superseded, or already completed)
    /// changes nothing and returns `false`.
    pub fn complete(&mut self, token: SendToken) -> bool {
        if self.phase != SendPhase::Sending(token) {
            return false;
        }
        self.draft = ContactDraft::default();
        self.phase = SendPhase::Idle;
        self.status = "Thanks! Your message has been sent (simulated).".to_owned();
        true
    }
}
