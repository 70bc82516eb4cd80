//! Password strength evaluator - rule orchestration and pluggable validators.

use std::fmt;

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{
    SectionResult, case_section, digit_section, length_section, punctuation_section,
};

/// Highest score the default rules can produce.
pub const MAX_SCORE: usize = 4;

/// Outcome of running the default rules.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Evaluation {
    /// Number of satisfied rules, `None` if evaluation was cancelled.
    pub score: Option<usize>,
    /// Hints for every rule that was not met.
    pub reasons: Vec<String>,
}

/// Scores a password. Implement this to replace the default rules.
pub trait StrengthValidator {
    fn score(&self, password: &SecretString) -> usize;
}

impl<F> StrengthValidator for F
where
    F: Fn(&SecretString) -> usize,
{
    fn score(&self, password: &SecretString) -> usize {
        self(password)
    }
}

/// Counts satisfied rules: mixed case, digit, punctuation, length >= 8.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultValidator;

impl StrengthValidator for DefaultValidator {
    fn score(&self, password: &SecretString) -> usize {
        run_sections(password, || false).score.unwrap_or(0)
    }
}

/// Which validator, if any, drives the strength label.
#[derive(Default)]
pub enum ValidatorMode {
    /// No label is ever shown.
    #[default]
    None,
    Default,
    Custom(Box<dyn StrengthValidator>),
}

impl ValidatorMode {
    pub fn custom<V: StrengthValidator + 'static>(validator: V) -> Self {
        ValidatorMode::Custom(Box::new(validator))
    }

    /// Raw score for `password`, or `None` when validation is disabled.
    pub fn score(&self, password: &SecretString) -> Option<usize> {
        match self {
            ValidatorMode::None => None,
            ValidatorMode::Default => Some(DefaultValidator.score(password)),
            ValidatorMode::Custom(validator) => Some(validator.score(password)),
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, ValidatorMode::None)
    }
}

impl fmt::Debug for ValidatorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidatorMode::None => f.write_str("None"),
            ValidatorMode::Default => f.write_str("Default"),
            ValidatorMode::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

fn run_sections(password: &SecretString, is_cancelled: impl Fn() -> bool) -> Evaluation {
    let sections: [(&str, fn(&SecretString) -> SectionResult); 4] = [
        ("case", case_section),
        ("digit", digit_section),
        ("punctuation", punctuation_section),
        ("length", length_section),
    ];

    let mut reasons = Vec::new();
    let mut score = 0;

    for (_section_name, section_fn) in sections {
        if is_cancelled() {
            reasons.push("Evaluation cancelled".to_string());
            return Evaluation { score: None, reasons };
        }

        match section_fn(password) {
            Some(reason) => {
                #[cfg(feature = "tracing")]
                tracing::trace!("rule not met: {}", _section_name);
                reasons.push(reason);
            }
            None => score += 1,
        }
    }

    Evaluation {
        score: Some(score),
        reasons,
    }
}

/// Evaluates password strength with the default rules.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `token` - Optional cancellation token (async feature only), checked
///   before each rule
pub fn evaluate_password_strength(
    password: &SecretString,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> Evaluation {
    #[cfg(feature = "async")]
    {
        run_sections(password, || token.as_ref().is_some_and(|t| t.is_cancelled()))
    }

    #[cfg(not(feature = "async"))]
    {
        run_sections(password, || false)
    }
}

/// Delay before a background evaluation starts, so fast typing collapses
/// into a single result.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Async version that waits [`DEBOUNCE`], evaluates and sends the result.
///
/// Nothing is sent if `token` is cancelled during the wait.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<Evaluation>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("strength evaluation scheduled");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("strength evaluation cancelled before start");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let evaluation = evaluate_password_strength(password, Some(token));

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[tokio::test]
    async fn test_evaluate_with_cancellation() {
        let token = CancellationToken::new();
        token.cancel();

        let evaluation = evaluate_password_strength(&secret("SomePassword123!"), Some(token));

        assert!(evaluation.score.is_none());
        assert_eq!(evaluation.reasons, vec!["Evaluation cancelled".to_string()]);
    }

    #[tokio::test]
    async fn test_evaluate_without_cancellation() {
        let token = CancellationToken::new();
        let evaluation = evaluate_password_strength(&secret("TestPass123!"), Some(token));
        assert_eq!(evaluation.score, Some(4));
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_password_strength_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        evaluate_password_strength_tx(&secret("TestPass123!"), token, tx).await;

        let evaluation = rx.recv().await.expect("Should receive evaluation");
        assert_eq!(evaluation.score, Some(4));
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_password_strength_tx_cancelled_sends_nothing() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        evaluate_password_strength_tx(&secret("TestPass123!"), token, tx).await;

        assert!(rx.recv().await.is_none());
    }
}
