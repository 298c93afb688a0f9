//! Offset pagination for song search results.

use serde::{Deserialize, Serialize};

use super::filters::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use super::models::Song;

/// Number of pages needed to show `total` items at `page_size` per page.
///
/// Zero items means zero pages.
pub fn page_count(total: u64, page_size: u32) -> u64 {
    if total == 0 || page_size == 0 {
        return 0;
    }
    total.div_ceil(u64::from(page_size))
}

/// A 1-based page number and a page size.
///
/// Values are always within range: the page is at least 1 and the size is at
/// least 1. Use [`PageRequest::clamped`] to build one from untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Creates a page request, clamping to the default maximum page size.
    pub fn new(page: u32, page_size: u32) -> Self {
        Self::clamped(i64::from(page), i64::from(page_size), MAX_PAGE_SIZE)
    }

    /// Creates a page request from raw numbers.
    ///
    /// Pages below 1 become page 1. The size is clamped to `1..=max_page_size`,
    /// and `max_page_size` itself never exceeds [`MAX_PAGE_SIZE`].
    pub fn clamped(page: i64, page_size: i64, max_page_size: u32) -> Self {
        let max_page_size = max_page_size.clamp(1, MAX_PAGE_SIZE);
        let page = page.clamp(1, i64::from(u32::MAX));
        let page_size = page_size.clamp(1, i64::from(max_page_size));
        Self {
            page: u32::try_from(page).unwrap_or(1),
            page_size: u32::try_from(page_size).unwrap_or(max_page_size),
        }
    }

    /// The 1-based page number.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Number of songs per page.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Number of songs to skip.
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.page_size)
    }

    /// Number of songs to fetch.
    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }
}

/// One page of song search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongPage {
    /// The requested page number.
    pub page_num: u32,
    /// The requested page size.
    pub page_size: u32,
    /// Total number of pages for the filtered set.
    pub page_count: u64,
    /// Total number of distinct songs matching the filters.
    pub total_songs_count: u64,
    /// Songs on this page, ordered by title.
    pub songs: Vec<Song>,
}

impl SongPage {
    /// Builds a page from the request, the total match count and the page's songs.
    pub fn new(request: PageRequest, total_songs_count: u64, songs: Vec<Song>) -> Self {
        Self {
            page_num: request.page(),
            page_size: request.page_size(),
            page_count: page_count(total_songs_count, request.page_size()),
            total_songs_count,
            songs,
        }
    }

    /// Returns true if a later page exists.
    pub fn has_next_page(&self) -> bool {
        u64::from(self.page_num) < self.page_count
    }

    /// The next page request, if there is one.
    pub fn next_page(&self) -> Option<PageRequest> {
        self.has_next_page()
            .then(|| PageRequest::new(self.page_num + 1, self.page_size))
    }

    /// The previous page request, if this is not the first page.
    pub fn previous_page(&self) -> Option<PageRequest> {
        (self.page_num > 1).then(|| PageRequest::new(self.page_num - 1, self.page_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 20), 0);
        assert_eq!(page_count(1, 20), 1);
        assert_eq!(page_count(20, 20), 1);
        assert_eq!(page_count(21, 20), 2);
        assert_eq!(page_count(45, 20), 3);
        assert_eq!(page_count(100, 1), 100);
    }

    #[test]
    fn test_offset_and_limit() {
        let request = PageRequest::new(3, 20);
        assert_eq!(request.offset(), 40);
        assert_eq!(request.limit(), 20);

        let first = PageRequest::default();
        assert_eq!(first.page(), 1);
        assert_eq!(first.offset(), 0);
    }

    #[test]
    fn test_clamped() {
        let request = PageRequest::clamped(-4, 1000, 100);
        assert_eq!(request.page(), 1);
        assert_eq!(request.page_size(), 100);

        let request = PageRequest::clamped(2, -1, 100);
        assert_eq!(request.page_size(), 1);
    }

    #[test]
    fn test_configured_maximum_cannot_exceed_hard_cap() {
        let request = PageRequest::clamped(1, 500, 500);
        assert_eq!(request.page_size(), MAX_PAGE_SIZE);

        let request = PageRequest::clamped(1, 50, 500);
        assert_eq!(request.page_size(), 50);

        let request = PageRequest::clamped(1, 500, 0);
        assert_eq!(request.page_size(), 1);
    }

    #[test]
    fn test_song_page_serializes() {
        let page = SongPage::new(PageRequest::new(2, 20), 45, vec![]);
        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["pageNum"], 2);
        assert_eq!(value["pageSize"], 20);
        assert_eq!(value["pageCount"], 3);
        assert_eq!(value["totalSongsCount"], 45);
        assert_eq!(value["songs"], serde_json::json!([]));
    }

    #[test]
    fn test_empty_result_has_no_pages() {
        let page = SongPage::new(PageRequest::default(), 0, vec![]);
        assert_eq!(page.page_count, 0);
        assert!(!page.has_next_page());
        assert!(page.next_page().is_none());
        assert!(page.previous_page().is_none());
    }

    #[test]
    fn test_next_and_previous_page() {
        let page = SongPage::new(PageRequest::new(2, 20), 45, vec![]);
        assert_eq!(page.next_page(), Some(PageRequest::new(3, 20)));
        assert_eq!(page.previous_page(), Some(PageRequest::new(1, 20)));

        let last = SongPage::new(PageRequest::new(3, 20), 45, vec![]);
        assert!(!last.has_next_page());
    }
}
