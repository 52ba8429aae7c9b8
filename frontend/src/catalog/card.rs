use crate::config::THUMBNAIL_PLACEHOLDER;
use crate::models::Video;
use crate::utils::{format_views, time_ago};
use chrono::{DateTime, Utc};

const VISIBLE_TAGS: usize = 2;

/// Everything a video card displays, resolved from a record at a fixed instant.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub thumbnail: String,
    pub title: String,
    pub views_label: String,
    pub time_label: String,
    /// `None` means the card has no tag container at all.
    pub tags: Option<Vec<String>>,
}

impl CardView {
    pub fn from_video(video: &Video, now: DateTime<Utc>) -> Self {
        Self {
            thumbnail: video
                .thumbnail()
                .unwrap_or(THUMBNAIL_PLACEHOLDER)
                .to_string(),
            title: video.title.clone(),
            views_label: format!("{} views", format_views(video.views())),
            time_label: video
                .published()
                .map(|published| time_ago(published, now))
                .unwrap_or_default(),
            tags: tag_boxes(&video.tags),
        }
    }
}

/// First two tags, then a "+N" box for whatever is left.
pub fn tag_boxes(tags: &[String]) -> Option<Vec<String>> {
    if tags.is_empty() {
        return None;
    }

    let mut boxes: Vec<String> = tags.iter().take(VISIBLE_TAGS).cloned().collect();
    let remaining = tags.len().saturating_sub(VISIBLE_TAGS);
    if remaining > 0 {
        boxes.push(format!("+{remaining}"));
    }
    Some(boxes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VideoAsset;
    use chrono::TimeZone;

    fn tags(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("tag{i}")).collect()
    }

    #[test]
    fn five_tags_show_two_and_overflow() {
        assert_eq!(
            tag_boxes(&tags(5)),
            Some(vec!["tag1".to_string(), "tag2".to_string(), "+3".to_string()])
        );
    }

    #[test]
    fn no_tags_means_no_container() {
        assert_eq!(tag_boxes(&[]), None);
    }

    #[test]
    fn two_or_fewer_tags_have_no_overflow_box() {
        assert_eq!(tag_boxes(&tags(1)), Some(vec!["tag1".to_string()]));
        assert_eq!(tag_boxes(&tags(2)).map(|b| b.len()), Some(2));
        assert_eq!(tag_boxes(&tags(3)).and_then(|b| b.last().cloned()), Some("+1".to_string()));
    }

    #[test]
    fn sparse_record_falls_back_gracefully() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let card = CardView::from_video(&Video::default(), now);

        assert_eq!(card.thumbnail, THUMBNAIL_PLACEHOLDER);
        assert_eq!(card.views_label, "0 views");
        assert_eq!(card.time_label, "");
        assert_eq!(card.tags, None);
    }

    #[test]
    fn full_record_renders_every_field() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let video = Video {
            title: "Who am I?".to_string(),
            view_count: Some(2_500_000),
            published_at: Some("2023-11-20T00:00:00Z".to_string()),
            tags: tags(4),
            video: Some(VideoAsset {
                thumbnail_url: Some("https://img.example/t.jpg".to_string()),
            }),
        };
        let card = CardView::from_video(&video, now);

        assert_eq!(card.thumbnail, "https://img.example/t.jpg");
        assert_eq!(card.title, "Who am I?");
        assert_eq!(card.views_label, "2.5M views");
        assert_eq!(card.time_label, "1 month ago");
        assert_eq!(card.tags.map(|t| t.len()), Some(3));
    }
}
