use strand_primitives::TokenId;
use thiserror::Error;

/// Errors surfaced by resolution.
///
/// Ambiguity between matching conditional bindings is deliberately not an
/// error: resolution proceeds deterministically by specificity and the
/// overlap is reported through the diagnostic sink instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
	/// The token has no binding record at all.
	#[error("no binding registered for token `{token}`")]
	UnboundToken {
		/// Token the resolution was requested for.
		token: TokenId,
	},
	/// A record exists, but no conditional entry matched and no default
	/// provider was set.
	#[error("token `{token}` has no default provider and no conditional binding matched")]
	NoMatchingBinding {
		/// Token the resolution was requested for.
		token: TokenId,
	},
}
