use rustc_hash::FxHashMap as HashMap;
use strand_primitives::{RawId, Tag, Target, TokenId};

/// Per-consumer declaration state: which tokens a target's constructor
/// consumes, and which tags it carries.
///
/// Keyed on target identity, never on label text. Populated during wiring
/// and read-only during resolution; no validation against the binding table
/// happens here (a target may carry tags no binding ever uses).
#[derive(Debug, Default)]
pub struct MetadataStore {
	dependencies: HashMap<RawId, Vec<TokenId>>,
	tags: HashMap<RawId, Vec<Tag>>,
}

impl MetadataStore {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the ordered injection list for `target`.
	///
	/// A second declaration replaces the previous list rather than
	/// appending to it.
	pub fn declare_dependencies<I>(&mut self, target: Target, tokens: I)
	where
		I: IntoIterator,
		I::Item: Into<TokenId>,
	{
		self.dependencies
			.insert(target.id(), tokens.into_iter().map(Into::into).collect());
	}

	/// Appends tags to `target`'s tag list.
	///
	/// Repeated calls accumulate, preserving chronological and within-call
	/// order. The list is never deduplicated or sorted: declaration order
	/// is the tie-break among tag conditions during resolution.
	pub fn declare_tags<I>(&mut self, target: Target, tags: I)
	where
		I: IntoIterator<Item = Tag>,
	{
		self.tags.entry(target.id()).or_default().extend(tags);
	}

	/// The declared injection list, empty if undeclared.
	#[inline]
	pub fn dependencies(&self, target: Target) -> &[TokenId] {
		self.dependencies
			.get(&target.id())
			.map_or(&[], Vec::as_slice)
	}

	/// The accumulated tag list, empty if undeclared.
	#[inline]
	pub fn tags(&self, target: Target) -> &[Tag] {
		self.tags.get(&target.id()).map_or(&[], Vec::as_slice)
	}
}

#[cfg(test)]
mod tests {
	use strand_primitives::Token;

	use super::*;

	#[test]
	fn test_undeclared_target_is_empty() {
		let store = MetadataStore::new();
		let target = Target::new("Service");
		assert!(store.dependencies(target).is_empty());
		assert!(store.tags(target).is_empty());
	}

	#[test]
	fn test_redeclaring_dependencies_replaces() {
		let mut store = MetadataStore::new();
		let target = Target::new("Service");
		let a: Token<u32> = Token::new("a");
		let b: Token<u32> = Token::new("b");
		let c: Token<String> = Token::new("c");

		store.declare_dependencies(target, [a.erase(), b.erase()]);
		store.declare_dependencies(target, [c.erase()]);

		assert_eq!(store.dependencies(target), &[c.erase()]);
	}

	#[test]
	fn test_tags_accumulate_in_order() {
		let mut store = MetadataStore::new();
		let target = Target::new("Service");
		let first = Tag::new("first");
		let second = Tag::new("second");
		let third = Tag::new("third");

		store.declare_tags(target, [first, second]);
		store.declare_tags(target, [third]);

		assert_eq!(store.tags(target), &[first, second, third]);
	}

	#[test]
	fn test_targets_are_keyed_by_identity() {
		let mut store = MetadataStore::new();
		let a = Target::new("Service");
		let b = Target::new("Service");
		let tag = Tag::new("http");

		store.declare_tags(a, [tag]);

		assert_eq!(store.tags(a), &[tag]);
		assert!(store.tags(b).is_empty());
	}
}
