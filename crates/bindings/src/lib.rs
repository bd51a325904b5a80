//! Conditional binding resolution.
//!
//! Decides which registered provider satisfies a request for a token when
//! several could: a token carries at most one default provider plus any
//! number of conditional providers keyed by consumer identity ([`Target`])
//! or consumer tag ([`Tag`]). Selection is deterministic — a consumer match
//! beats a tag match regardless of ordering, a tag match beats the default,
//! and the earliest active condition breaks ties within a kind. Overlapping
//! matches are a diagnostic, never an error.
//!
//! Providers are an opaque payload (`P` throughout). This crate never
//! constructs values; it returns the winning payload for the caller to
//! materialize, so construction strategies, scopes, and lifecycles live
//! entirely outside it.
//!
//! # Example
//!
//! ```
//! use strand_bindings::{BindingDb, Tag, Target, Token};
//!
//! let db: BindingDb<&str> = BindingDb::new();
//! let greeting: Token<&str> = Token::new("greeting");
//! let fancy = Tag::new("fancy");
//! let cli = Target::new("Cli");
//!
//! db.bind_default(greeting, "hello");
//! db.bind_when(greeting, fancy, "good day");
//! db.declare_tags(cli, [fancy]);
//!
//! // No active conditions: the default wins.
//! assert_eq!(db.resolve(greeting, &[]), Ok("hello"));
//! // Resolving on behalf of a tagged consumer: the tag binding wins.
//! assert_eq!(db.resolve_for(greeting, cli), Ok("good day"));
//! ```

mod db;
mod diagnostics;
mod error;
mod metadata;
mod record;
mod resolver;

pub use db::BindingDb;
pub use diagnostics::{AmbiguityEvent, DiagnosticSink, RecordingSink, TracingSink};
pub use error::ResolveError;
pub use metadata::MetadataStore;
pub use record::{BindingRecord, BindingTable, ConditionalEntry};
pub use resolver::{ConditionList, select};
pub use strand_primitives::{Condition, RawId, Tag, Target, Token, TokenId};
