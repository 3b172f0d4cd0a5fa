/// Pagination position into the filtered results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderCursor {
	index: usize,
	batch_size: usize,
}

impl RenderCursor {
	/// Create a cursor at the start. A zero batch size is bumped to one.
	#[must_use]
	pub fn new(batch_size: usize) -> Self {
		Self {
			index: 0,
			batch_size: batch_size.max(1),
		}
	}

	/// Number of items rendered so far.
	#[must_use]
	pub fn index(&self) -> usize {
		self.index
	}

	#[must_use]
	pub fn batch_size(&self) -> usize {
		self.batch_size
	}

	pub fn reset(&mut self) {
		self.index = 0;
	}

	#[must_use]
	pub fn has_more(&self, total: usize) -> bool {
		self.index < total
	}

	/// Take the next `[index, index + batch_size)` slice and advance past it.
	///
	/// Returns an empty slice once every item has been rendered.
	pub fn next_batch<'a, T>(&mut self, items: &'a [T]) -> &'a [T] {
		let start = self.index.min(items.len());
		let end = start.saturating_add(self.batch_size).min(items.len());
		self.index = end;
		&items[start..end]
	}
}
