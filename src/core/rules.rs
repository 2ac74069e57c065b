//! Validation primitives shared by every composite.
//!
//! Composites are finalized in a fixed order:
//! 1. unknown member rejection ([`reject_unknown_fields`])
//! 2. per-member coercion
//! 3. the delete short-circuit
//! 4. required members ([`require`])
//! 5. type checks such as [`exactly_one_of`], [`at_least_one_of`] and the
//!    reference count checks
//!
//! Steps 4 and 5 are skipped for deleted composites.

use serde_json::{Map, Value};
use smallvec::SmallVec;

use crate::util::{Error, Result};

/// Fail on the first member of `fields` not listed in `allowed`.
pub fn reject_unknown_fields(
    object: &'static str,
    allowed: &[&str],
    fields: &Map<String, Value>,
) -> Result<()> {
    match fields.keys().find(|k| !allowed.contains(&k.as_str())) {
        Some(unknown) => Err(Error::SchemaViolation {
            object,
            field: unknown.clone(),
        }),
        None => Ok(()),
    }
}

/// Fail if a required member is absent.
pub fn require(object: &'static str, field: &'static str, present: bool) -> Result<()> {
    if present {
        Ok(())
    } else {
        Err(Error::MissingField { object, field })
    }
}

/// Exactly one of `members` must be present.
///
/// Presence means "not null": a `false` flag still counts.
pub fn exactly_one_of(object: &'static str, members: &[(&'static str, bool)]) -> Result<()> {
    let provided: SmallVec<[&str; 4]> = members
        .iter()
        .filter(|(_, present)| *present)
        .map(|(name, _)| *name)
        .collect();

    if provided.len() == 1 {
        return Ok(());
    }

    tracing::debug!(object, ?provided, "alternative representations conflict");
    Err(Error::ExactlyOneOf {
        object,
        fields: join_alternatives(members.iter().map(|(name, _)| *name)),
        provided: provided.len(),
    })
}

/// At least one of `members` must be present.
pub fn at_least_one_of(object: &'static str, members: &[(&'static str, bool)]) -> Result<()> {
    if members.iter().any(|(_, present)| *present) {
        Ok(())
    } else {
        Err(Error::MissingAlternative {
            object,
            fields: join_alternatives(members.iter().map(|(name, _)| *name)),
        })
    }
}

/// Join names as `a, b or c`.
pub fn join_alternatives<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let names: SmallVec<[&str; 8]> = names.into_iter().collect();
    match names.split_last() {
        None => String::new(),
        Some((last, [])) => last.to_string(),
        Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
    }
}

/// A flat reference list must have one entry per position.
pub fn check_reference_count(object: &'static str, positions: usize, references: usize) -> Result<()> {
    if positions == references {
        Ok(())
    } else {
        Err(Error::ReferenceCountMismatch {
            object,
            ring: None,
            expected: positions,
            actual: references,
        })
    }
}

/// A nested reference list must have one list per ring, and one entry per
/// position within each ring.
pub fn check_nested_reference_counts(
    object: &'static str,
    ring_positions: &[usize],
    ring_references: &[usize],
) -> Result<()> {
    if ring_positions.len() != ring_references.len() {
        return Err(Error::ReferenceCountMismatch {
            object,
            ring: None,
            expected: ring_positions.len(),
            actual: ring_references.len(),
        });
    }

    for (i, (&positions, &references)) in ring_positions.iter().zip(ring_references).enumerate() {
        if positions != references {
            return Err(Error::ReferenceCountMismatch {
                object,
                ring: Some(i),
                expected: positions,
                actual: references,
            });
        }
    }
    Ok(())
}
