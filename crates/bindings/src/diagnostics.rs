//! Ambiguity reporting.
//!
//! The engine never fails on overlapping conditional bindings; it reports
//! them through an injectable sink and resolves by specificity. The default
//! sink logs through `tracing`; tests (and embedders that want structured
//! capture) use [`RecordingSink`].

use parking_lot::Mutex;
use strand_primitives::{Condition, TokenId};

/// Emitted when more than one conditional entry matches the active
/// conditions of a single resolution.
#[derive(Debug, Clone)]
pub struct AmbiguityEvent {
	/// Token being resolved.
	pub token: TokenId,
	/// Every matching condition, in registration order.
	pub matched: Vec<Condition>,
}

/// Receives ambiguity events from the resolution engine.
///
/// Sinks are fire-and-forget observers: they must not panic and cannot
/// influence which provider is returned.
pub trait DiagnosticSink: Send + Sync {
	/// Called once per resolution in which two or more conditions matched.
	fn ambiguous_binding(&self, event: &AmbiguityEvent);
}

/// Default sink; logs the overlap at WARN.
#[derive(Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
	fn ambiguous_binding(&self, event: &AmbiguityEvent) {
		let matched: Vec<&str> = event.matched.iter().map(|c| c.label()).collect();
		tracing::warn!(
			domain = "bindings",
			token = event.token.label(),
			count = event.matched.len(),
			?matched,
			"multiple conditional bindings match; selecting by specificity",
		);
	}
}

/// Captures events in memory for deterministic assertions.
#[derive(Debug, Default)]
pub struct RecordingSink {
	events: Mutex<Vec<AmbiguityEvent>>,
}

impl RecordingSink {
	/// Creates an empty sink.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns a snapshot of everything recorded so far.
	pub fn events(&self) -> Vec<AmbiguityEvent> {
		self.events.lock().clone()
	}

	/// Number of events recorded.
	pub fn len(&self) -> usize {
		self.events.lock().len()
	}

	/// True if nothing has been recorded.
	pub fn is_empty(&self) -> bool {
		self.events.lock().is_empty()
	}
}

impl DiagnosticSink for RecordingSink {
	fn ambiguous_binding(&self, event: &AmbiguityEvent) {
		self.events.lock().push(event.clone());
	}
}
