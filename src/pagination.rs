use serde::Serialize;

/// Number of page links kept around the edges and the current page.
const EDGE_PAGES: usize = 2;
const PAGES_BEFORE_CURRENT: usize = 2;
const PAGES_AFTER_CURRENT: usize = 4;

/// Page links for a table footer: both edges plus a run around the current
/// page. `None` marks a collapsed gap.
fn page_window(total_pages: usize, current_page: usize) -> Vec<Option<usize>> {
    if total_pages == 0 {
        return vec![];
    }

    let leading = 1..=EDGE_PAGES.min(total_pages);
    let around = current_page.saturating_sub(PAGES_BEFORE_CURRENT).max(1)
        ..=current_page
            .saturating_add(PAGES_AFTER_CURRENT)
            .min(total_pages);
    let trailing = total_pages.saturating_sub(EDGE_PAGES).saturating_add(1)..=total_pages;

    let mut pages = Vec::new();
    let mut last_shown = 0;
    for run in [leading, around, trailing] {
        for page in run {
            if page <= last_shown {
                continue;
            }
            if page > last_shown.saturating_add(1) {
                pages.push(None);
            }
            pages.push(Some(page));
            last_shown = page;
        }
    }

    pages
}

/// One page of list items together with the links to render around it.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        let current_page = current_page.max(1);

        let pages = page_window(total_pages, current_page);

        Self {
            items,
            pages,
            page: current_page,
        }
    }

    /// Whether the current page lies past the last page reported by the
    /// endpoint, e.g. after the page size grew.
    pub fn is_past_end(&self) -> bool {
        match self.pages.iter().flatten().max() {
            Some(last) => self.page > *last,
            None => self.page > 1,
        }
    }
}
