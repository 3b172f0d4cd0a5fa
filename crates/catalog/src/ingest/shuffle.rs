use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Order applied to a freshly ingested catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShuffleOrder {
	/// Keep source order.
	Preserve,
	/// Uniform Fisher-Yates shuffle, reproducible when seeded.
	#[default]
	Uniform,
	/// Uniform shuffle driven by a fixed seed.
	Seeded(u64),
}

impl ShuffleOrder {
	pub fn apply<T>(self, items: &mut [T]) {
		match self {
			Self::Preserve => {}
			Self::Uniform => items.shuffle(&mut rand::thread_rng()),
			Self::Seeded(seed) => items.shuffle(&mut StdRng::seed_from_u64(seed)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn preserve_keeps_order() {
		let mut items = vec![1, 2, 3, 4];
		ShuffleOrder::Preserve.apply(&mut items);
		assert_eq!(items, vec![1, 2, 3, 4]);
	}

	#[test]
	fn seeded_shuffle_is_reproducible_permutation() {
		let mut first: Vec<u32> = (0..50).collect();
		let mut second = first.clone();
		ShuffleOrder::Seeded(7).apply(&mut first);
		ShuffleOrder::Seeded(7).apply(&mut second);
		assert_eq!(first, second);

		let mut sorted = first.clone();
		sorted.sort_unstable();
		assert_eq!(sorted, (0..50).collect::<Vec<_>>());
	}
}
