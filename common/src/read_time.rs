//! Read-time estimation over rendered content HTML.

use crate::site_const::READ_TIME_WPM;

/// Drop every `<...>` run from an HTML fragment. Good enough for word
/// counting and excerpt text; not a general-purpose HTML parser.
pub fn strip_tags(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                // keep words on either side of a tag separated
                text.push(' ');
            }
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }
    text
}

/// Estimated minutes to read a rendered content fragment, never below 1.
pub fn read_time_minutes(html: &str) -> u64 {
    if html.is_empty() {
        return 1;
    }
    let text = strip_tags(html);
    let words = text.split_whitespace().count() as u64;
    words.div_ceil(READ_TIME_WPM).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_and_keeps_text() {
        let text = strip_tags("<p>Hello <strong>world</strong></p>");
        assert_eq!(text.split_whitespace().collect::<Vec<_>>(), ["Hello", "world"]);
    }

    #[test]
    fn empty_content_reads_in_one_minute() {
        assert_eq!(read_time_minutes(""), 1);
        assert_eq!(read_time_minutes("<p></p>"), 1);
    }

    #[test]
    fn two_hundred_words_is_one_minute() {
        let html = format!("<p>{}</p>", "word ".repeat(200));
        assert_eq!(read_time_minutes(&html), 1);
    }

    #[test]
    fn rounds_up_past_the_minute() {
        let html = "word ".repeat(201);
        assert_eq!(read_time_minutes(&html), 2);
    }

    #[test]
    fn tags_do_not_count_as_words() {
        let html = format!("{}{}", "<br/>".repeat(500), "one two three");
        assert_eq!(read_time_minutes(&html), 1);
    }
}
