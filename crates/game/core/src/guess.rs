//! Number-guessing game rules.
//!
//! A secret of 3 to 6 unique decimal digits is guessed within a fixed number
//! of attempts. Each miss reports which guess digits sit at the right position
//! and which occur in the secret elsewhere.

use core::fmt;

use arrayvec::ArrayVec;

use crate::error::{ErrorSeverity, GameError};

/// Fewest digits a secret may have.
pub const MIN_DIGITS: usize = 3;
/// Most digits a secret may have.
pub const MAX_DIGITS: usize = 6;
/// Attempts granted per session.
pub const ATTEMPTS: u32 = 5;

/// Digits stored in order, most significant first.
pub type Digits = ArrayVec<u8, MAX_DIGITS>;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GuessError {
    #[error("secret must have {} to {} digits, got {count}", MIN_DIGITS, MAX_DIGITS)]
    DigitCount { count: usize },

    #[error("{digit} is not a decimal digit")]
    InvalidDigit { digit: u8 },

    #[error("secret repeats digit {digit}")]
    RepeatedDigit { digit: u8 },

    #[error("guess '{guess}' is not a number")]
    NotANumber { guess: String },

    #[error("guess has {actual} digits, expected {expected}")]
    WrongLength { expected: usize, actual: usize },

    #[error("no attempts left in this session")]
    SessionOver,
}

impl GameError for GuessError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DigitCount { .. } => "GUESS_DIGIT_COUNT",
            Self::InvalidDigit { .. } => "GUESS_INVALID_DIGIT",
            Self::RepeatedDigit { .. } => "GUESS_REPEATED_DIGIT",
            Self::NotANumber { .. } => "GUESS_NOT_A_NUMBER",
            Self::WrongLength { .. } => "GUESS_WRONG_LENGTH",
            Self::SessionOver => "GUESS_SESSION_OVER",
        }
    }
}

// ============================================================================
// Secret
// ============================================================================

/// A secret number with unique digits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SecretNumber {
    digits: Digits,
}

impl SecretNumber {
    pub fn new(digits: &[u8]) -> Result<Self, GuessError> {
        if !(MIN_DIGITS..=MAX_DIGITS).contains(&digits.len()) {
            return Err(GuessError::DigitCount {
                count: digits.len(),
            });
        }

        let mut seen = [false; 10];
        for &digit in digits {
            let slot = seen
                .get_mut(usize::from(digit))
                .ok_or(GuessError::InvalidDigit { digit })?;
            if *slot {
                return Err(GuessError::RepeatedDigit { digit });
            }
            *slot = true;
        }

        Ok(Self {
            digits: digits.iter().copied().collect(),
        })
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Compare a guess against the secret.
    ///
    /// Each guess position counts once: as *placed* if it matches the secret
    /// digit at that position, otherwise as *misplaced* if the secret contains
    /// the digit anywhere. Guesses may repeat digits.
    pub fn score(&self, guess: &str) -> Result<Feedback, GuessError> {
        let guess = parse_guess(guess, self.len())?;

        let mut feedback = Feedback::default();
        for (&digit, &secret) in guess.iter().zip(self.digits.iter()) {
            if digit == secret {
                feedback.placed.push(digit);
            } else if self.digits.contains(&digit) {
                feedback.misplaced.push(digit);
            }
        }
        Ok(feedback)
    }
}

impl fmt::Display for SecretNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.digits
            .iter()
            .try_for_each(|digit| write!(f, "{digit}"))
    }
}

fn parse_guess(guess: &str, expected: usize) -> Result<Digits, GuessError> {
    let guess = guess.trim();
    if guess.is_empty() || !guess.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(GuessError::NotANumber {
            guess: guess.to_owned(),
        });
    }
    if guess.len() != expected {
        return Err(GuessError::WrongLength {
            expected,
            actual: guess.len(),
        });
    }
    Ok(guess.bytes().map(|byte| byte - b'0').collect())
}

// ============================================================================
// Feedback & Session
// ============================================================================

/// Digits of a guess, split by how they relate to the secret.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Feedback {
    pub placed: Digits,
    pub misplaced: Digits,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuessResult {
    /// The guess matched; `attempts_used` includes the winning attempt.
    Solved { attempts_used: u32 },
    /// The guess missed.
    Miss {
        feedback: Feedback,
        attempts_left: u32,
    },
}

/// One round of the guessing game.
#[derive(Clone, Debug)]
pub struct GuessSession {
    secret: SecretNumber,
    attempts: u32,
    attempts_left: u32,
    solved: bool,
}

impl GuessSession {
    pub fn new(secret: SecretNumber) -> Self {
        Self::with_attempts(secret, ATTEMPTS)
    }

    pub fn with_attempts(secret: SecretNumber, attempts: u32) -> Self {
        Self {
            secret,
            attempts,
            attempts_left: attempts,
            solved: false,
        }
    }

    pub fn secret(&self) -> &SecretNumber {
        &self.secret
    }

    pub fn attempts_left(&self) -> u32 {
        self.attempts_left
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Returns true once the secret was found or no attempts remain.
    pub fn is_over(&self) -> bool {
        self.solved || self.attempts_left == 0
    }

    /// Submit a guess.
    ///
    /// Malformed guesses are rejected without consuming an attempt.
    pub fn submit(&mut self, guess: &str) -> Result<GuessResult, GuessError> {
        if self.is_over() {
            return Err(GuessError::SessionOver);
        }

        let feedback = self.secret.score(guess)?;
        self.attempts_left -= 1;

        if feedback.placed.len() == self.secret.len() {
            self.solved = true;
            return Ok(GuessResult::Solved {
                attempts_used: self.attempts - self.attempts_left,
            });
        }

        Ok(GuessResult::Miss {
            feedback,
            attempts_left: self.attempts_left,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(values: &[u8]) -> Digits {
        values.iter().copied().collect()
    }

    #[test]
    fn secret_requires_unique_digits_in_range() {
        assert!(SecretNumber::new(&[1, 2, 3]).is_ok());
        assert_eq!(
            SecretNumber::new(&[1, 2]),
            Err(GuessError::DigitCount { count: 2 })
        );
        assert_eq!(
            SecretNumber::new(&[1, 2, 3, 4, 5, 6, 7]),
            Err(GuessError::DigitCount { count: 7 })
        );
        assert_eq!(
            SecretNumber::new(&[1, 2, 1]),
            Err(GuessError::RepeatedDigit { digit: 1 })
        );
        assert_eq!(
            SecretNumber::new(&[1, 12, 3]),
            Err(GuessError::InvalidDigit { digit: 12 })
        );
    }

    #[test]
    fn secret_displays_leading_zero() {
        let secret = SecretNumber::new(&[0, 4, 7, 1]).unwrap();
        assert_eq!(secret.to_string(), "0471");
    }

    #[test]
    fn score_splits_placed_and_misplaced() {
        let secret = SecretNumber::new(&[1, 2, 3, 4]).unwrap();

        let feedback = secret.score("1435").unwrap();
        assert_eq!(feedback.placed, digits(&[1, 3]));
        assert_eq!(feedback.misplaced, digits(&[4]));
    }

    #[test]
    fn repeated_guess_digits_count_per_position() {
        let secret = SecretNumber::new(&[5, 6, 7]).unwrap();

        let feedback = secret.score("775").unwrap();
        assert_eq!(feedback.placed, digits(&[]));
        assert_eq!(feedback.misplaced, digits(&[7, 7, 5]));

        let feedback = secret.score("577").unwrap();
        assert_eq!(feedback.placed, digits(&[5, 7]));
        assert_eq!(feedback.misplaced, digits(&[7]));
    }

    #[test]
    fn score_rejects_malformed_guesses() {
        let secret = SecretNumber::new(&[9, 8, 7]).unwrap();
        assert!(matches!(secret.score("98a"), Err(GuessError::NotANumber { .. })));
        assert!(matches!(secret.score(""), Err(GuessError::NotANumber { .. })));
        assert_eq!(
            secret.score("9876"),
            Err(GuessError::WrongLength {
                expected: 3,
                actual: 4
            })
        );
    }

    #[test]
    fn session_solves_and_then_closes() {
        let mut session = GuessSession::new(SecretNumber::new(&[3, 1, 4]).unwrap());

        assert!(matches!(
            session.submit("413").unwrap(),
            GuessResult::Miss { attempts_left: 4, .. }
        ));
        assert_eq!(
            session.submit(" 314\n").unwrap(),
            GuessResult::Solved { attempts_used: 2 }
        );
        assert!(session.is_solved());
        assert_eq!(session.submit("314"), Err(GuessError::SessionOver));
    }

    #[test]
    fn session_runs_out_of_attempts() {
        let mut session = GuessSession::with_attempts(SecretNumber::new(&[3, 1, 4]).unwrap(), 2);

        assert!(session.submit("12").is_err());
        assert_eq!(session.attempts_left(), 2);

        session.submit("000").unwrap();
        let last = session.submit("999").unwrap();
        assert_eq!(
            last,
            GuessResult::Miss {
                feedback: Feedback::default(),
                attempts_left: 0
            }
        );
        assert!(session.is_over());
        assert!(!session.is_solved());
        assert_eq!(session.submit("314"), Err(GuessError::SessionOver));
    }
}
