use rustc_hash::FxHashMap as HashMap;
use strand_primitives::{Condition, TokenId};

/// One conditional registration: the provider applies only when `condition`
/// appears among the active conditions of a resolution.
#[derive(Debug, Clone)]
pub struct ConditionalEntry<P> {
	/// Predicate gating this provider.
	pub condition: Condition,
	/// Opaque provider payload; the engine never inspects it.
	pub provider: P,
}

/// Everything registered against a single token.
#[derive(Debug, Clone)]
pub struct BindingRecord<P> {
	/// Fallback provider used when no conditional entry matches.
	pub default: Option<P>,
	/// Conditional entries in first-registration order. A condition appears
	/// at most once; re-registration replaces its provider in place.
	pub conditional: Vec<ConditionalEntry<P>>,
}

impl<P> Default for BindingRecord<P> {
	fn default() -> Self {
		Self {
			default: None,
			conditional: Vec::new(),
		}
	}
}

/// Token-keyed store of binding records.
///
/// Ordering is meaningful only within one token's conditional list; there is
/// no ordering guarantee across tokens.
#[derive(Debug)]
pub struct BindingTable<P> {
	records: HashMap<TokenId, BindingRecord<P>>,
}

impl<P> Default for BindingTable<P> {
	fn default() -> Self {
		Self {
			records: HashMap::default(),
		}
	}
}

impl<P> BindingTable<P> {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets or overwrites the token's default provider.
	pub fn set_default(&mut self, token: TokenId, provider: P) {
		self.records.entry(token).or_default().default = Some(provider);
	}

	/// Registers a conditional provider.
	///
	/// If the condition already has an entry for this token, the provider is
	/// replaced in place and the entry keeps its first-registration
	/// position; otherwise a new entry is appended.
	pub fn set_conditional(&mut self, token: TokenId, condition: Condition, provider: P) {
		let record = self.records.entry(token).or_default();
		if let Some(entry) = record
			.conditional
			.iter_mut()
			.find(|entry| entry.condition == condition)
		{
			entry.provider = provider;
		} else {
			record.conditional.push(ConditionalEntry {
				condition,
				provider,
			});
		}
	}

	/// The record for `token`, if any registration has touched it.
	#[inline]
	pub fn get(&self, token: TokenId) -> Option<&BindingRecord<P>> {
		self.records.get(&token)
	}

	/// True if the token has any record (default or conditional).
	#[inline]
	pub fn contains(&self, token: TokenId) -> bool {
		self.records.contains_key(&token)
	}
}

#[cfg(test)]
mod tests {
	use strand_primitives::{Tag, Token};

	use super::*;

	fn token() -> TokenId {
		Token::<String>::new("t").erase()
	}

	#[test]
	fn test_set_default_overwrites() {
		let mut table = BindingTable::new();
		let t = token();
		table.set_default(t, "first");
		table.set_default(t, "second");

		let record = table.get(t).unwrap();
		assert_eq!(record.default, Some("second"));
	}

	#[test]
	fn test_reregistration_replaces_in_place() {
		let mut table = BindingTable::new();
		let t = token();
		let a = Condition::from(Tag::new("a"));
		let b = Condition::from(Tag::new("b"));

		table.set_conditional(t, a, "a1");
		table.set_conditional(t, b, "b1");
		table.set_conditional(t, a, "a2");

		let record = table.get(t).unwrap();
		let entries: Vec<_> = record
			.conditional
			.iter()
			.map(|e| (e.condition, e.provider))
			.collect();
		// `a` keeps its first-registration position with the new provider.
		assert_eq!(entries, vec![(a, "a2"), (b, "b1")]);
	}

	#[test]
	fn test_missing_token_has_no_record() {
		let table: BindingTable<&str> = BindingTable::new();
		assert!(table.get(token()).is_none());
		assert!(!table.contains(token()));
	}
}
