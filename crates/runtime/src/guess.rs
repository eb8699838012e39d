//! Random secrets and automatic play for the number-guessing game.

use arena_core::guess::{MAX_DIGITS, MIN_DIGITS};
use arena_core::{GuessError, GuessResult, GuessSession, SecretNumber};
use rand::Rng;
use rand::seq::SliceRandom;

/// Draw a secret of random length with unique digits.
pub fn generate_secret<R: Rng + ?Sized>(rng: &mut R) -> Result<SecretNumber, GuessError> {
    let len = rng.gen_range(MIN_DIGITS..=MAX_DIGITS);
    generate_secret_with_len(rng, len)
}

/// Draw a secret of exactly `len` unique digits.
///
/// A leading zero is allowed.
pub fn generate_secret_with_len<R: Rng + ?Sized>(
    rng: &mut R,
    len: usize,
) -> Result<SecretNumber, GuessError> {
    let mut pool: [u8; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
    pool.shuffle(rng);
    let digits = pool.get(..len).ok_or(GuessError::DigitCount { count: len })?;
    SecretNumber::new(digits)
}

/// Start a session with a fresh secret and the standard attempt budget.
pub fn new_session<R: Rng + ?Sized>(rng: &mut R) -> Result<GuessSession, GuessError> {
    let secret = generate_secret(rng)?;
    tracing::debug!("Guessing session started with a {}-digit secret", secret.len());
    Ok(GuessSession::new(secret))
}

/// Play a session to the end with random guesses of the secret's length.
///
/// Returns the result of the final attempt.
pub fn auto_play<R: Rng + ?Sized>(
    session: &mut GuessSession,
    rng: &mut R,
) -> Result<GuessResult, GuessError> {
    let len = session.secret().len();
    loop {
        let guess = generate_secret_with_len(rng, len)?.to_string();
        let result = session.submit(&guess)?;
        match &result {
            GuessResult::Solved { attempts_used } => {
                tracing::info!("Guessed {} in {} attempts", guess, attempts_used);
            }
            GuessResult::Miss {
                feedback,
                attempts_left,
            } => {
                tracing::debug!(
                    guess = %guess,
                    placed = ?feedback.placed.as_slice(),
                    misplaced = ?feedback.misplaced.as_slice(),
                    attempts_left,
                    "guess missed"
                );
            }
        }
        if session.is_over() {
            return Ok(result);
        }
    }
}

#[cfg(test)]
mod tests {
    use arena_core::guess::ATTEMPTS;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn secrets_have_unique_digits_and_valid_length() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let secret = generate_secret(&mut rng).unwrap();
            assert!((MIN_DIGITS..=MAX_DIGITS).contains(&secret.len()));

            let mut digits = secret.digits().to_vec();
            digits.sort_unstable();
            digits.dedup();
            assert_eq!(digits.len(), secret.len());
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = generate_secret(&mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate_secret(&mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_lengths_out_of_range() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            generate_secret_with_len(&mut rng, 2),
            Err(GuessError::DigitCount { count: 2 })
        );
        assert_eq!(
            generate_secret_with_len(&mut rng, 11),
            Err(GuessError::DigitCount { count: 11 })
        );
    }

    #[test]
    fn auto_play_runs_session_to_the_end() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut session = new_session(&mut rng).unwrap();

        let last = auto_play(&mut session, &mut rng).unwrap();

        assert!(session.is_over());
        match last {
            GuessResult::Solved { attempts_used } => {
                assert!(session.is_solved());
                assert!((1..=ATTEMPTS).contains(&attempts_used));
            }
            GuessResult::Miss { attempts_left, .. } => {
                assert_eq!(attempts_left, 0);
                assert!(!session.is_solved());
            }
        }
        assert_eq!(session.submit("123"), Err(GuessError::SessionOver));
    }

    #[test]
    fn new_session_grants_standard_attempts() {
        let session = new_session(&mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(session.attempts_left(), ATTEMPTS);
        assert!(!session.is_over());
    }
}
