use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide identity backing every handle type.
///
/// Allocated from a monotonically increasing counter and never reused within
/// a process. Handle equality is `RawId` equality; debug labels play no part.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RawId(u64);

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

impl RawId {
	/// Allocates a fresh identity.
	pub(crate) fn next() -> Self {
		Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
	}

	/// Returns the numeric value.
	#[inline]
	pub const fn get(self) -> u64 {
		self.0
	}
}

impl core::fmt::Debug for RawId {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		write!(f, "#{}", self.0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_ids_are_unique() {
		let a = RawId::next();
		let b = RawId::next();
		assert_ne!(a, b);
		assert!(b.get() > a.get());
	}
}
