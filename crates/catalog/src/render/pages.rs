use serde::Serialize;

const WINDOW: usize = 5;

/// One entry in a numbered pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "page")]
pub enum PageItem {
	Page(usize),
	Gap,
}

/// Number of pages needed for `len` items.
#[must_use]
pub fn page_count(len: usize, per_page: usize) -> usize {
	len.div_ceil(per_page.max(1))
}

/// Items shown on the 1-based `page`.
#[must_use]
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
	let per_page = per_page.max(1);
	let start = page.saturating_sub(1).saturating_mul(per_page).min(items.len());
	let end = start.saturating_add(per_page).min(items.len());
	&items[start..end]
}

/// Page buttons around `current`, at most five consecutive pages plus the
/// first and last page separated by gaps. Empty when there is a single page.
#[must_use]
pub fn page_window(current: usize, total: usize) -> Vec<PageItem> {
	if total <= 1 {
		return Vec::new();
	}
	let current = current.clamp(1, total);
	let mut start = current.saturating_sub(2).max(1);
	let end = (start + WINDOW - 1).min(total);
	if end - start < WINDOW - 1 {
		start = end.saturating_sub(WINDOW - 1).max(1);
	}

	let mut items = Vec::with_capacity(WINDOW + 4);
	if start > 1 {
		items.push(PageItem::Page(1));
		if start > 2 {
			items.push(PageItem::Gap);
		}
	}
	items.extend((start..=end).map(PageItem::Page));
	if end < total {
		if end + 1 < total {
			items.push(PageItem::Gap);
		}
		items.push(PageItem::Page(total));
	}
	items
}
