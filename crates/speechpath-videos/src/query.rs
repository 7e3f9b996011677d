use speechpath_core::clinical::DEFAULT_LANGUAGE;

const WATCH_URL: &str = "https://youtube.com/watch?v=";

/// Search query for an activity: `<keywords> therapy`, plus the language
/// code as a qualifier token when it is not English.
pub fn build_query(keywords: &str, language: &str) -> String {
    let keywords = keywords.trim();
    if language.is_empty() || language == DEFAULT_LANGUAGE {
        format!("{keywords} therapy")
    } else {
        format!("{keywords} therapy {language}")
    }
}

pub fn watch_url(video_id: &str) -> String {
    format!("{WATCH_URL}{video_id}")
}
