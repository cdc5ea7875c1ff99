//! # Validation Entry Points
//!
//! Single and batch validation over a [`crate::Scheme`] selected by
//! [`IdentifierKind`].
//!
//! The batch form keys its result by the masked identifier, so inputs that
//! mask to the same string collapse into one entry and the last occurrence
//! wins. [`inspect_batch`] keeps one entry per input instead, with the
//! rejection reason attached.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::mask;
use crate::scheme::IdentifierKind;

/// Masked identifier → validity.
///
/// Ordered by key so rendered output is deterministic.
pub type ValidityMap = BTreeMap<String, bool>;

/// Returns `true` if `input` is a valid identifier of `kind`.
///
/// Accepts masked, unmasked, or partially punctuated input. Never panics.
pub fn validate_one(kind: IdentifierKind, input: &str) -> bool {
    kind.scheme().is_valid(input)
}

/// Validate a collection of raw identifiers.
///
/// Each entry is keyed by [`mask::add_mask`] of the input (the raw input
/// itself when masking does not apply) and valued by [`validate_one`] of the
/// raw input. Duplicate keys collapse; the last occurrence wins.
pub fn validate_batch<I, S>(kind: IdentifierKind, inputs: I) -> ValidityMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut validity = ValidityMap::new();
    let mut processed = 0usize;
    for input in inputs {
        let raw = input.as_ref();
        let key = mask::add_mask(kind, raw);
        let valid = validate_one(kind, raw);
        tracing::debug!(%kind, key = %key, valid, "validated identifier");
        validity.insert(key, valid);
        processed += 1;
    }
    tracing::debug!(
        %kind,
        processed,
        distinct = validity.len(),
        "batch validation complete"
    );
    validity
}

/// Per-input outcome of [`inspect_batch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchEntry {
    /// Input exactly as supplied.
    pub input: String,
    /// Kind the input was validated as.
    pub kind: IdentifierKind,
    /// Masked form, or the input unchanged when masking does not apply.
    pub masked: String,
    /// Whether the input passed validation.
    pub valid: bool,
    /// Rejection reason for invalid inputs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl BatchEntry {
    /// Validate one input and record the outcome.
    pub fn evaluate(kind: IdentifierKind, input: &str) -> Self {
        let outcome = kind.scheme().inspect(input);
        Self {
            input: input.to_string(),
            kind,
            masked: mask::add_mask(kind, input),
            valid: outcome.is_ok(),
            reason: outcome.err().map(|e| e.to_string()),
        }
    }
}

/// Validate every input and keep one entry per input, in input order.
///
/// Unlike [`validate_batch`], duplicates are not collapsed.
pub fn inspect_batch<I, S>(kind: IdentifierKind, inputs: I) -> Vec<BatchEntry>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    inputs
        .into_iter()
        .map(|input| BatchEntry::evaluate(kind, input.as_ref()))
        .collect()
}
