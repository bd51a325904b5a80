//! Winner selection over one token's binding record.
//!
//! Specificity is fixed: a consumer-identity condition beats any tag
//! condition, and a tag condition beats the default provider. Within a kind,
//! the condition appearing earliest in the active-condition list wins. For
//! automatic contexts that list is the consumer followed by its tags in
//! declaration order, so the first-declared tag is the tag tie-break.
//!
//! Overlap between matching entries is never an error: it is reported
//! through the [`DiagnosticSink`] and selection proceeds.

use smallvec::SmallVec;
use strand_primitives::{Condition, TokenId};

use crate::diagnostics::{AmbiguityEvent, DiagnosticSink};
use crate::error::ResolveError;
use crate::record::BindingRecord;


/// Active conditions for one resolution, most significant first.
pub type ConditionList = SmallVec<[Condition; 4]>;

/// A conditional entry whose condition is active, paired with the earliest
/// position of that condition in the active list.
struct Match<'r, P> {
	condition: Condition,
	position: usize,
	provider: &'r P,
}

/// Selects the winning provider for `token` from `record` under
/// `conditions`.
///
/// When two or more conditional entries match, an [`AmbiguityEvent`] is
/// emitted through `sink` (suppressed when `quiet` is set) before selection;
/// the event never changes the outcome. Fails with
/// [`ResolveError::NoMatchingBinding`] if nothing matches and the record has
/// no default.
pub fn select<'r, P>(
	token: TokenId,
	record: &'r BindingRecord<P>,
	conditions: &[Condition],
	sink: &dyn DiagnosticSink,
	quiet: bool,
) -> Result<&'r P, ResolveError> {
	let matches = collect_matches(record, conditions);

	if matches.len() > 1 && !quiet {
		sink.ambiguous_binding(&AmbiguityEvent {
			token,
			matched: matches.iter().map(|m| m.condition).collect(),
		});
	}

	if let Some(winner) = pick_winner(&matches) {
		return Ok(winner);
	}
	record
		.default
		.as_ref()
		.ok_or(ResolveError::NoMatchingBinding { token })
}

/// Pairs each conditional entry with the earliest position of its condition
/// in the active list, in registration order.
///
/// Entries whose condition is absent are dropped, and active conditions with
/// no registry entry never appear here, so neither contributes to ambiguity
/// counting.
fn collect_matches<'r, P>(
	record: &'r BindingRecord<P>,
	conditions: &[Condition],
) -> SmallVec<[Match<'r, P>; 4]> {
	record
		.conditional
		.iter()
		.filter_map(|entry| {
			let position = conditions.iter().position(|c| *c == entry.condition)?;
			Some(Match {
				condition: entry.condition,
				position,
				provider: &entry.provider,
			})
		})
		.collect()
}

/// Kind priority first, then earliest position within the winning kind.
///
/// Position never promotes a tag over a consumer-identity match: a
/// target-kind entry wins even when a tag-kind condition appears earlier in
/// the list.
fn pick_winner<'r, P>(matches: &[Match<'r, P>]) -> Option<&'r P> {
	let best_of_kind = |target_kind: bool| {
		matches
			.iter()
			.filter(|m| m.condition.is_target() == target_kind)
			.min_by_key(|m| m.position)
	};
	best_of_kind(true)
		.or_else(|| best_of_kind(false))
		.map(|m| m.provider)
}
