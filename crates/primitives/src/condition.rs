use crate::id::RawId;

/// Identity handle grouping consumers for conditional bindings.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag {
	id: RawId,
	label: &'static str,
}

impl Tag {
	/// Creates a fresh tag. The label is for diagnostics only.
	pub fn new(label: &'static str) -> Self {
		Self {
			id: RawId::next(),
			label,
		}
	}

	/// Returns the identity backing this tag.
	#[inline]
	pub fn id(self) -> RawId {
		self.id
	}

	/// Returns the debug label.
	#[inline]
	pub fn label(self) -> &'static str {
		self.label
	}
}

impl core::fmt::Debug for Tag {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_tuple("Tag").field(&self.label).field(&self.id).finish()
	}
}

/// Identity handle for a consumer: any constructible or callable entity
/// that declares dependencies and carries tags.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Target {
	id: RawId,
	label: &'static str,
}

impl Target {
	/// Creates a fresh target. The label is for diagnostics only.
	pub fn new(label: &'static str) -> Self {
		Self {
			id: RawId::next(),
			label,
		}
	}

	/// Returns the identity backing this target.
	#[inline]
	pub fn id(self) -> RawId {
		self.id
	}

	/// Returns the debug label.
	#[inline]
	pub fn label(self) -> &'static str {
		self.label
	}
}

impl core::fmt::Debug for Target {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_tuple("Target")
			.field(&self.label)
			.field(&self.id)
			.finish()
	}
}

/// A conditional-binding predicate: one exact consumer, or any consumer
/// carrying a tag.
///
/// The two kinds are a sum type so the engine's kind-priority logic is
/// exhaustively matched rather than probed at runtime.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Condition {
	/// Matches exactly one consumer identity.
	Target(Target),
	/// Matches any consumer carrying the tag.
	Tag(Tag),
}

impl Condition {
	/// True for the consumer-identity kind, which outranks any tag.
	#[inline]
	pub fn is_target(self) -> bool {
		matches!(self, Self::Target(_))
	}

	/// Returns the debug label of the underlying handle.
	#[inline]
	pub fn label(self) -> &'static str {
		match self {
			Self::Target(target) => target.label(),
			Self::Tag(tag) => tag.label(),
		}
	}
}

impl From<Target> for Condition {
	fn from(target: Target) -> Self {
		Self::Target(target)
	}
}

impl From<Tag> for Condition {
	fn from(tag: Tag) -> Self {
		Self::Tag(tag)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_same_label_handles_are_distinct() {
		assert_ne!(Tag::new("http"), Tag::new("http"));
		assert_ne!(Target::new("Service"), Target::new("Service"));
	}

	#[test]
	fn test_condition_kind() {
		let target = Target::new("Service");
		let tag = Tag::new("http");
		assert!(Condition::from(target).is_target());
		assert!(!Condition::from(tag).is_target());
	}

	#[test]
	fn test_condition_identity() {
		let tag = Tag::new("http");
		assert_eq!(Condition::from(tag), Condition::Tag(tag));
		assert_ne!(Condition::from(tag), Condition::from(Tag::new("http")));
	}
}
