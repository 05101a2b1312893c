use std::collections::HashSet;

use galleria_artic::{ArticError, Artwork, ArtworkId, ArtworkPage, FIELDS_ID};

use crate::fetcher::PageFetcher;

/// Messages from the table surface, consumed by [`SelectionManager::apply`].
///
/// The widget's "page changed" and "selection changed" callbacks arrive as
/// explicit values instead of wired-up closures.
#[derive(Debug, Clone)]
pub enum TableEvent {
    /// A page fetch completed and the table now shows these rows.
    PageLoaded(ArtworkPage),
    /// The checked rows on the current page, as reported by the widget.
    SelectionChanged(HashSet<ArtworkId>),
}

/// Progress events emitted during a bulk select.
#[derive(Debug, Clone)]
pub enum SelectProgress {
    /// One id-only page has been fetched and accumulated.
    PageFetched {
        page: u32,
        accumulated: usize,
        target: usize,
    },
    /// The target list was assembled and committed.
    Complete { count: usize },
}

/// Owner of the global selection set and the current-page snapshot.
///
/// The selection set grows or shrinks only through
/// [`set_visible_selection`](Self::set_visible_selection) and
/// [`select_first_n`](Self::select_first_n); loading a page never touches
/// it, which is what makes selection persist across paging.
#[derive(Debug, Default)]
pub struct SelectionManager {
    selected: HashSet<ArtworkId>,
    current_page: Vec<Artwork>,
}

impl SelectionManager {
    /// An empty selection and no loaded page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch one table event to the matching synchronous handler.
    pub fn apply(&mut self, event: TableEvent) {
        match event {
            TableEvent::PageLoaded(page) => self.load_page(page),
            TableEvent::SelectionChanged(chosen) => self.set_visible_selection(&chosen),
        }
    }

    /// Replace the current-page snapshot wholesale.
    pub fn load_page(&mut self, page: ArtworkPage) {
        self.current_page = page.artworks;
    }

    /// Reconcile the widget's checked rows with the global set.
    ///
    /// Every chosen id is added; ids of current-page rows absent from
    /// `chosen` are removed. Ids belonging to rows on other pages are
    /// untouched either way. A plain replacement here would erase
    /// selections made on previously visited pages.
    pub fn set_visible_selection(&mut self, chosen: &HashSet<ArtworkId>) {
        self.selected.extend(chosen.iter().copied());
        for artwork in &self.current_page {
            if !chosen.contains(&artwork.id) {
                self.selected.remove(&artwork.id);
            }
        }
    }

    /// The selected subset of the current page, in page order. Derived on
    /// demand and never stored.
    pub fn visible_selection(&self) -> Vec<&Artwork> {
        self.current_page
            .iter()
            .filter(|artwork| self.selected.contains(&artwork.id))
            .collect()
    }

    /// Select the first `limit` artworks of the remote dataset in fetch
    /// order, fetching as many id-only pages as needed.
    ///
    /// Pages are fetched strictly in ascending order starting at 1. The
    /// loop ends once `limit` ids are accumulated or the fetched pages
    /// cover the remote total; an empty page also ends it, so the call
    /// terminates even when the remote total overstates the dataset.
    ///
    /// The accumulated list is truncated to `limit` and unioned into the
    /// selection set only after the whole list is assembled: a fetch
    /// failure mid-sequence surfaces the error unmodified and commits
    /// nothing. Existing selections are never removed, even ones outside
    /// the selected range. `limit == 0` is a no-op with zero fetches.
    ///
    /// Returns the number of ids in the committed target list (short of
    /// `limit` when the dataset is smaller).
    pub async fn select_first_n(
        &mut self,
        limit: usize,
        page_size: u32,
        fetcher: &dyn PageFetcher,
        mut progress: impl FnMut(SelectProgress),
    ) -> Result<usize, ArticError> {
        if limit == 0 {
            return Ok(0);
        }

        let mut ids: Vec<ArtworkId> = Vec::with_capacity(limit);
        let mut page: u32 = 1;
        loop {
            let fetched = fetcher.fetch_page(page, page_size, FIELDS_ID).await?;
            let exhausted = fetched.artworks.is_empty()
                || u64::from(page) * u64::from(page_size) >= fetched.total;

            ids.extend(fetched.artworks.iter().map(|artwork| artwork.id));
            progress(SelectProgress::PageFetched {
                page,
                accumulated: ids.len().min(limit),
                target: limit,
            });

            if ids.len() >= limit || exhausted {
                break;
            }
            page += 1;
        }

        ids.truncate(limit);
        self.selected.extend(ids.iter().copied());
        let count = ids.len();
        tracing::debug!(requested = limit, committed = count, pages_fetched = page, "bulk select complete");
        progress(SelectProgress::Complete { count });
        Ok(count)
    }

    pub fn selected_ids(&self) -> &HashSet<ArtworkId> {
        &self.selected
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_selected(&self, id: ArtworkId) -> bool {
        self.selected.contains(&id)
    }

    pub fn current_page(&self) -> &[Artwork] {
        &self.current_page
    }
}
