use crate::env_variable_utils::{get_category_api_url, get_video_api_url};
use lazy_static::lazy_static;

lazy_static! {
    pub static ref CATEGORY_API: String = get_category_api_url();
    pub static ref VIDEO_API: String = get_video_api_url();
}

/// Records requested per page. Pagination is not implemented, so the offset stays 0.
pub const PAGE_SIZE: usize = 30;
pub const PAGE_OFFSET: usize = 0;

/// `orderBy=1` asks the API for newest first; sorting beyond that happens locally.
pub const ORDER_BY_LATEST: u8 = 1;

/// Upper bound on records kept from a single response.
pub const MAX_RECORDS: usize = 50;

pub const FIRST_YEAR: i32 = 2011;

/// Pixels moved per click on a category scroll button.
pub const CATEGORY_SCROLL_STEP: f64 = 200.0;

pub const THUMBNAIL_PLACEHOLDER: &str = "https://via.placeholder.com/300x140?text=No+Image";
