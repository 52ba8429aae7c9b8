use crate::catalog::filter_options::{CategoryFilter, Language};
use crate::config::{
    CATEGORY_API, MAX_RECORDS, ORDER_BY_LATEST, PAGE_OFFSET, PAGE_SIZE, VIDEO_API,
};
use crate::models::{Category, CategoryResponse, Video, VideoPage};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Request failed ({status}): {body}")]
    Status { status: u16, body: String },
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// Server-side half of the filter state, as sent to the video API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoQuery {
    pub language: Language,
    pub category: CategoryFilter,
}

impl VideoQuery {
    pub fn new(language: Language, category: CategoryFilter) -> Self {
        Self { language, category }
    }

    pub fn to_query_string(&self) -> String {
        let mut query = format!(
            "limit={}&offset={}&orderBy={}",
            PAGE_SIZE, PAGE_OFFSET, ORDER_BY_LATEST
        );
        if let Some(id) = self.category.api_id() {
            query.push_str(&format!("&categoryId={}", urlencoding::encode(id)));
        }
        if let Some(code) = self.language.api_code() {
            query.push_str(&format!("&language={code}"));
        }
        query
    }

    pub fn url(&self, base: &str) -> String {
        format!("{}?{}", base, self.to_query_string())
    }
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status { status, body });
    }

    serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()))
}

pub async fn fetch_categories() -> Result<Vec<Category>, FetchError> {
    let response: CategoryResponse = get_json(&*CATEGORY_API).await.inspect_err(|e| {
        log::error!("Loading categories failed: {e}");
    })?;
    log::debug!("Loaded {} categories", response.categories.len());
    Ok(response.categories)
}

pub async fn fetch_videos(query: &VideoQuery) -> Result<Vec<Video>, FetchError> {
    let url = query.url(&*VIDEO_API);
    log::debug!("Requesting videos: {url}");

    let page: VideoPage = get_json(&url).await.inspect_err(|e| {
        log::error!("Loading videos failed: {e}");
    })?;
    Ok(cap_records(page.data))
}

pub fn cap_records(mut videos: Vec<Video>) -> Vec<Video> {
    if videos.len() > MAX_RECORDS {
        log::warn!(
            "Video API returned {} records, keeping the first {}",
            videos.len(),
            MAX_RECORDS
        );
        videos.truncate(MAX_RECORDS);
    }
    videos
}
