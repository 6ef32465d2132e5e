//! Pure page-window selection.
//!
//! Given the total page count, the selectable window size, the current page and
//! the ordering direction, decide which page numbers are shown and where the
//! ellipses go. Nothing here touches URLs or the request.

/// One slot of the numbered part of the navigation strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowItem {
    Page(u64),
    Ellipsis,
}

/// Compute the visible window for `total` pages, `window` selectable links and
/// the (already clamped) `current` page.
///
/// Reverse order is the mirror image of natural order: page `p` is displayed
/// where page `total + 1 - p` would be.
pub fn compute_window(total: u64, window: u64, current: u64, reverse: bool) -> Vec<WindowItem> {
    if total == 0 {
        return Vec::new();
    }

    let current = current.clamp(1, total);
    let mirror = |page: u64| if reverse { total - page + 1 } else { page };

    if total <= window {
        return (1..=total).map(|p| WindowItem::Page(mirror(p))).collect();
    }

    // Too narrow to hold both endpoints.
    if window < 3 {
        return vec![WindowItem::Page(current)];
    }

    natural_window(total, window, mirror(current))
        .into_iter()
        .map(|item| match item {
            WindowItem::Page(p) => WindowItem::Page(mirror(p)),
            WindowItem::Ellipsis => WindowItem::Ellipsis,
        })
        .collect()
}

/// Compact window in natural order, for `total > window >= 3`.
fn natural_window(total: u64, window: u64, current: u64) -> Vec<WindowItem> {
    let adjacent = ((window - 3) / 2).max(1);
    let scroll_from = window - adjacent;

    let mut starting_page = 2;
    if current >= scroll_from {
        starting_page = current.saturating_sub(adjacent);
        // Keep exactly `window - 2` interior links before the last page.
        if total - starting_page < window - 2 {
            starting_page = total + 2 - window;
        }
        // A three-link window only has room for the current page itself.
        if current < total {
            starting_page = starting_page.max(current.saturating_sub(window - 3));
        }
        starting_page = starting_page.max(2);
    }

    let ending_page = starting_page.saturating_add(window - 3).min(total - 1);

    let mut items = Vec::new();
    items.push(WindowItem::Page(1));
    if starting_page > 2 {
        items.push(WindowItem::Ellipsis);
    }
    items.extend((starting_page..=ending_page).map(WindowItem::Page));
    if ending_page < total - 1 {
        items.push(WindowItem::Ellipsis);
    }
    items.push(WindowItem::Page(total));
    items
}
