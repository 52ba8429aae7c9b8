//! Local filter/sort pass that turns the fetched page into the visible list.

use crate::catalog::filter_options::{SortOrder, YearFilter};
use crate::models::Video;
use chrono::Datelike;
use std::cmp::Reverse;

pub fn visible_videos(raw: &[Video], year: YearFilter, sort: SortOrder) -> Vec<Video> {
    let mut visible = filter_by_year(raw, year);
    sort_videos(&mut visible, sort);
    visible
}

/// Years are compared in UTC. Records without a usable timestamp only survive `All`.
pub fn filter_by_year(videos: &[Video], year: YearFilter) -> Vec<Video> {
    match year {
        YearFilter::All => videos.to_vec(),
        YearFilter::Year(wanted) => videos
            .iter()
            .filter(|v| v.published().map(|p| p.year()) == Some(wanted))
            .cloned()
            .collect(),
    }
}

// All three orders are stable; `Latest` keeps the API order untouched.
pub fn sort_videos(videos: &mut [Video], sort: SortOrder) {
    match sort {
        SortOrder::Latest => {}
        SortOrder::Views => videos.sort_by_key(|v| Reverse(v.views())),
        // `None` orders before any `Some`, so undated records come first.
        SortOrder::Oldest => videos.sort_by_key(|v| v.published()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_views(title: &str, views: Option<u64>) -> Video {
        Video {
            title: title.to_string(),
            view_count: views,
            ..Video::default()
        }
    }

    fn with_date(title: &str, published_at: Option<&str>) -> Video {
        Video {
            title: title.to_string(),
            published_at: published_at.map(str::to_string),
            ..Video::default()
        }
    }

    fn titles(videos: &[Video]) -> Vec<&str> {
        videos.iter().map(|v| v.title.as_str()).collect()
    }

    #[test]
    fn views_sort_descending_with_missing_as_zero() {
        let mut videos = vec![
            with_views("five", Some(5)),
            with_views("hundred", Some(100)),
            with_views("zero", Some(0)),
            with_views("missing", None),
        ];
        sort_videos(&mut videos, SortOrder::Views);
        assert_eq!(titles(&videos), ["hundred", "five", "zero", "missing"]);
    }

    #[test]
    fn views_sort_keeps_ties_in_input_order() {
        let mut videos = vec![
            with_views("a", Some(10)),
            with_views("b", None),
            with_views("c", Some(10)),
            with_views("d", Some(0)),
        ];
        sort_videos(&mut videos, SortOrder::Views);
        assert_eq!(titles(&videos), ["a", "c", "b", "d"]);
    }

    #[test]
    fn oldest_sort_is_ascending() {
        let mut videos = vec![
            with_date("2023", Some("2023-03-01T00:00:00Z")),
            with_date("2021", Some("2021-03-01T00:00:00Z")),
            with_date("2022", Some("2022-03-01T00:00:00Z")),
        ];
        sort_videos(&mut videos, SortOrder::Oldest);
        assert_eq!(titles(&videos), ["2021", "2022", "2023"]);
    }

    #[test]
    fn oldest_sort_puts_undated_records_first() {
        let mut videos = vec![
            with_date("dated", Some("2020-01-01T00:00:00Z")),
            with_date("absent", None),
            with_date("garbled", Some("not a date")),
        ];
        sort_videos(&mut videos, SortOrder::Oldest);
        assert_eq!(titles(&videos), ["absent", "garbled", "dated"]);
    }

    #[test]
    fn latest_preserves_api_order() {
        let videos = vec![
            with_date("b", Some("2020-01-01T00:00:00Z")),
            with_date("a", Some("2024-01-01T00:00:00Z")),
        ];
        let visible = visible_videos(&videos, YearFilter::All, SortOrder::Latest);
        assert_eq!(titles(&visible), ["b", "a"]);
    }

    #[test]
    fn year_filter_keeps_matching_records_in_order() {
        let videos = vec![
            with_date("2021", Some("2021-05-01T00:00:00Z")),
            with_date("2022-a", Some("2022-02-01T00:00:00Z")),
            with_date("2022-b", Some("2022-11-20T00:00:00Z")),
            with_date("2023", Some("2023-01-10T00:00:00Z")),
        ];
        let visible = filter_by_year(&videos, YearFilter::Year(2022));
        assert_eq!(titles(&visible), ["2022-a", "2022-b"]);
    }

    #[test]
    fn year_filter_uses_utc_calendar_year() {
        let videos = vec![with_date("new-year", Some("2022-12-31T23:30:00-02:00"))];
        assert!(filter_by_year(&videos, YearFilter::Year(2022)).is_empty());
        assert_eq!(filter_by_year(&videos, YearFilter::Year(2023)).len(), 1);
    }

    #[test]
    fn year_filter_drops_undated_records() {
        let videos = vec![with_date("absent", None), with_date("garbled", Some("??"))];
        assert!(filter_by_year(&videos, YearFilter::Year(2022)).is_empty());
        assert_eq!(filter_by_year(&videos, YearFilter::All).len(), 2);
    }

    #[test]
    fn recomputation_is_idempotent() {
        let videos = vec![
            Video {
                view_count: Some(3),
                ..with_date("x", Some("2022-01-01T00:00:00Z"))
            },
            Video {
                view_count: Some(9),
                ..with_date("y", Some("2022-06-01T00:00:00Z"))
            },
            with_date("z", Some("2021-06-01T00:00:00Z")),
        ];
        for sort in SortOrder::all_variants() {
            let once = visible_videos(&videos, YearFilter::Year(2022), sort);
            let twice = visible_videos(&once, YearFilter::Year(2022), sort);
            assert_eq!(once, twice);
        }
    }
}
