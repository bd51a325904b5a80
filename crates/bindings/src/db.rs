use std::sync::Arc;

use parking_lot::RwLock;
use strand_primitives::{Condition, Tag, Target, Token, TokenId};

use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::error::ResolveError;
use crate::metadata::MetadataStore;
use crate::record::BindingTable;
use crate::resolver::{self, ConditionList};

/// Declaration state plus resolution entry points for one container.
///
/// All methods take `&self`: declaration calls write-lock the underlying
/// stores and `resolve` read-locks them, so a `BindingDb` can be shared
/// behind an [`Arc`] while wiring and resolution overlap. The expected
/// pattern is still wire-then-resolve; nothing here suspends, blocks on
/// anything but the locks, or performs I/O.
///
/// The provider payload `P` is opaque. The engine only selects and returns
/// it; materializing a value from it is the caller's job.
pub struct BindingDb<P> {
	metadata: RwLock<MetadataStore>,
	bindings: RwLock<BindingTable<P>>,
	sink: Arc<dyn DiagnosticSink>,
	quiet: bool,
}

impl<P> Default for BindingDb<P> {
	fn default() -> Self {
		Self::new()
	}
}

impl<P> BindingDb<P> {
	/// Creates an empty container with the default [`TracingSink`].
	pub fn new() -> Self {
		Self {
			metadata: RwLock::new(MetadataStore::new()),
			bindings: RwLock::new(BindingTable::new()),
			sink: Arc::new(TracingSink),
			quiet: false,
		}
	}

	/// Replaces the ambiguity sink. Builder-style; call before sharing.
	pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
		self.sink = sink;
		self
	}

	/// Suppresses ambiguity diagnostics (production mode).
	///
	/// Only the reporting changes; resolution results are identical either
	/// way.
	pub fn quiet(mut self, quiet: bool) -> Self {
		self.quiet = quiet;
		self
	}

	/// Sets the ordered token list `target`'s constructor consumes.
	///
	/// A second declaration replaces the previous list.
	pub fn declare_dependencies<I>(&self, target: Target, tokens: I)
	where
		I: IntoIterator,
		I::Item: Into<TokenId>,
	{
		self.metadata.write().declare_dependencies(target, tokens);
	}

	/// Attaches tags to `target`, appending to any prior declaration.
	pub fn declare_tags<I>(&self, target: Target, tags: I)
	where
		I: IntoIterator<Item = Tag>,
	{
		self.metadata.write().declare_tags(target, tags);
	}

	/// The declared injection list for `target`, empty if undeclared.
	pub fn dependencies(&self, target: Target) -> Vec<TokenId> {
		self.metadata.read().dependencies(target).to_vec()
	}

	/// The accumulated tags for `target`, empty if undeclared.
	pub fn tags(&self, target: Target) -> Vec<Tag> {
		self.metadata.read().tags(target).to_vec()
	}

	/// Sets or overwrites the default provider for `token`.
	pub fn bind_default<T: ?Sized>(&self, token: Token<T>, provider: P) {
		self.bindings.write().set_default(token.erase(), provider);
	}

	/// Registers a provider used only when `condition` is active.
	///
	/// Re-registering the same condition replaces the provider in place,
	/// keeping the entry's first-registration position.
	pub fn bind_when<T: ?Sized>(
		&self,
		token: Token<T>,
		condition: impl Into<Condition>,
		provider: P,
	) {
		self.bindings
			.write()
			.set_conditional(token.erase(), condition.into(), provider);
	}

	/// True if `token` has any record at all.
	pub fn has_binding<T: ?Sized>(&self, token: Token<T>) -> bool {
		self.bindings.read().contains(token.erase())
	}

	/// Active conditions for resolving on behalf of `target`: the consumer
	/// itself first, then its tags in declaration order.
	pub fn context_for(&self, target: Target) -> ConditionList {
		let metadata = self.metadata.read();
		let mut conditions = ConditionList::new();
		conditions.push(Condition::Target(target));
		conditions.extend(metadata.tags(target).iter().copied().map(Condition::Tag));
		conditions
	}

	/// Resolves `token` under an explicit condition list.
	///
	/// The list may be empty (default-only resolution) and may contain
	/// conditions no binding uses; those are transparently ignored.
	pub fn resolve<T: ?Sized>(
		&self,
		token: Token<T>,
		conditions: &[Condition],
	) -> Result<P, ResolveError>
	where
		P: Clone,
	{
		let token = token.erase();
		let bindings = self.bindings.read();
		let record = bindings
			.get(token)
			.ok_or(ResolveError::UnboundToken { token })?;
		resolver::select(token, record, conditions, self.sink.as_ref(), self.quiet)
			.map(Clone::clone)
	}

	/// Resolves `token` on behalf of `target`, deriving the condition list
	/// via [`context_for`](Self::context_for).
	pub fn resolve_for<T: ?Sized>(&self, token: Token<T>, target: Target) -> Result<P, ResolveError>
	where
		P: Clone,
	{
		let conditions = self.context_for(target);
		self.resolve(token, &conditions)
	}
}
