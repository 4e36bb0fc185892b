//! Podcast detection and audio-URL extraction from rendered content.

use crate::content_item::ContentItem;

const AUDIO_EXTENSIONS: &[&str] = &[".mp3", ".wav", ".ogg", ".m4a"];

/// Heuristic the original site uses: a podcast category, a podcast
/// mention in the title, or audio markup in the content body.
pub fn is_podcast(item: &ContentItem) -> bool {
    if item.category.to_lowercase().contains("podcast") {
        return true;
    }
    if item.title.to_lowercase().contains("podcast") {
        return true;
    }
    let content = item.content_html.to_lowercase();
    content.contains("podcast") || content.contains(".mp3") || content.contains("<audio")
}

/// Audio URL for the player, trying the embedded content first and the
/// record's custom field last.
pub fn podcast_audio_url(item: &ContentItem) -> Option<String> {
    extract_audio_url(&item.content_html).or_else(|| item.podcast_audio_field.clone())
}

/// Pull an audio URL out of a rendered HTML fragment: the first
/// `<audio>` element (nested `<source>` wins over its own `src`), else
/// the first link whose target ends in an audio extension.
pub fn extract_audio_url(content_html: &str) -> Option<String> {
    if let Some(audio_start) = content_html.find("<audio") {
        let after_audio = &content_html[audio_start..];
        let block_end = after_audio.find("</audio>").unwrap_or(after_audio.len());
        let block = &after_audio[..block_end];

        if let Some(source_start) = block.find("<source") {
            if let Some(src) = tag_attr(&block[source_start..], "src") {
                return Some(src);
            }
        }
        if let Some(src) = tag_attr(block, "src") {
            return Some(src);
        }
    }

    let mut rest = content_html;
    while let Some(anchor_start) = rest.find("<a") {
        let tag = &rest[anchor_start..];
        if let Some(href) = tag_attr(tag, "href") {
            let lower = href.to_lowercase();
            if AUDIO_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
                return Some(href);
            }
        }
        rest = &rest[anchor_start + 2..];
    }
    None
}

/// Value of `attr="..."` (or single-quoted) inside one tag's text, up to
/// the closing `>`.
fn tag_attr(tag: &str, attr: &str) -> Option<String> {
    let tag_end = tag.find('>').unwrap_or(tag.len());
    let tag = &tag[..tag_end];
    for quote in ['"', '\''] {
        let needle = format!("{attr}={quote}");
        if let Some(value_start) = tag.find(&needle) {
            let value = &tag[value_start + needle.len()..];
            if let Some(value_end) = value.find(quote) {
                return Some(value[..value_end].to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audio_tag_src() {
        let html = r#"<p>Listen:</p><audio src="https://cdn.example.org/ep1.mp3" controls></audio>"#;
        assert_eq!(
            extract_audio_url(html).as_deref(),
            Some("https://cdn.example.org/ep1.mp3")
        );
    }

    #[test]
    fn nested_source_wins() {
        let html = r#"<audio controls><source src="/media/ep2.ogg" type="audio/ogg"></audio>"#;
        assert_eq!(extract_audio_url(html).as_deref(), Some("/media/ep2.ogg"));
    }

    #[test]
    fn audio_file_link() {
        let html = r#"<p><a href="https://cdn.example.org/episode.MP3">download</a></p>"#;
        assert_eq!(
            extract_audio_url(html).as_deref(),
            Some("https://cdn.example.org/episode.MP3")
        );
    }

    #[test]
    fn non_audio_links_are_skipped() {
        let html = r#"<a href="/about">about</a> <a href="/files/ep.m4a">ep</a>"#;
        assert_eq!(extract_audio_url(html).as_deref(), Some("/files/ep.m4a"));
    }

    #[test]
    fn nothing_to_extract() {
        assert_eq!(extract_audio_url("<p>plain post</p>"), None);
    }

    #[test]
    fn custom_field_fallback() {
        let item = ContentItem {
            content_html: "<p>episode notes</p>".to_string(),
            podcast_audio_field: Some("https://cdn.example.org/acf.mp3".to_string()),
            ..Default::default()
        };
        assert_eq!(
            podcast_audio_url(&item).as_deref(),
            Some("https://cdn.example.org/acf.mp3")
        );
    }

    #[test]
    fn podcast_detection() {
        let by_category = ContentItem {
            category: "Podcasts".to_string(),
            ..Default::default()
        };
        assert!(is_podcast(&by_category));

        let by_content = ContentItem {
            category: "News".to_string(),
            content_html: r#"<audio src="/ep.mp3"></audio>"#.to_string(),
            ..Default::default()
        };
        assert!(is_podcast(&by_content));

        let plain = ContentItem {
            category: "News".to_string(),
            title: "Budget update".to_string(),
            content_html: "<p>text</p>".to_string(),
            ..Default::default()
        };
        assert!(!is_podcast(&plain));
    }
}
