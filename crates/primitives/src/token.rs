use core::marker::PhantomData;

use crate::id::RawId;

/// Typed handle naming a dependency slot.
///
/// The type parameter records what the slot is expected to produce; it is
/// purely semantic and never participates in matching. Equality is identity:
/// two tokens created with the same label are distinct slots.
///
/// `Token<T>` is `Copy` for every `T` (the parameter only appears in a
/// phantom), so handles are passed by value like the ids they are.
pub struct Token<T: ?Sized> {
	id: RawId,
	label: &'static str,
	_marker: PhantomData<fn() -> Box<T>>,
}

impl<T: ?Sized> Token<T> {
	/// Creates a fresh token. The label is for diagnostics only.
	pub fn new(label: &'static str) -> Self {
		Self {
			id: RawId::next(),
			label,
			_marker: PhantomData,
		}
	}

	/// Returns the identity backing this token.
	#[inline]
	pub fn id(self) -> RawId {
		self.id
	}

	/// Returns the debug label.
	#[inline]
	pub fn label(self) -> &'static str {
		self.label
	}

	/// Erases the semantic type, producing the registry key form.
	#[inline]
	pub fn erase(self) -> TokenId {
		TokenId {
			id: self.id,
			label: self.label,
		}
	}
}

impl<T: ?Sized> Clone for Token<T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T: ?Sized> Copy for Token<T> {}

impl<T: ?Sized> PartialEq for Token<T> {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl<T: ?Sized> Eq for Token<T> {}

impl<T: ?Sized> core::hash::Hash for Token<T> {
	fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
		self.id.hash(state);
	}
}

impl<T: ?Sized> core::fmt::Debug for Token<T> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_tuple("Token")
			.field(&self.label)
			.field(&self.id)
			.finish()
	}
}

/// Untyped token identity: the binding-table key form of a [`Token`].
///
/// Carries the same identity and label as the token it was erased from.
#[derive(Clone, Copy)]
pub struct TokenId {
	id: RawId,
	label: &'static str,
}

impl TokenId {
	/// Returns the identity backing this token.
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

impl PartialEq for TokenId {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for TokenId {}

impl core::hash::Hash for TokenId {
	fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
		self.id.hash(state);
	}
}

impl<T: ?Sized> From<Token<T>> for TokenId {
	fn from(token: Token<T>) -> Self {
		token.erase()
	}
}

impl core::fmt::Debug for TokenId {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_tuple("TokenId")
			.field(&self.label)
			.field(&self.id)
			.finish()
	}
}

impl core::fmt::Display for TokenId {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str(self.label)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_same_label_tokens_are_distinct() {
		let a: Token<String> = Token::new("logger");
		let b: Token<String> = Token::new("logger");
		assert_ne!(a, b);
		assert_ne!(a.erase(), b.erase());
	}

	#[test]
	fn test_erase_preserves_identity() {
		let token: Token<u32> = Token::new("port");
		assert_eq!(token.erase().id(), token.id());
		assert_eq!(token.erase(), TokenId::from(token));
	}

	#[test]
	fn test_unsized_semantic_type() {
		let token: Token<dyn core::fmt::Debug> = Token::new("debug");
		let copy = token;
		assert_eq!(token, copy);
	}
}
