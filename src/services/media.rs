//! Media reference resolution for question images and audio clips.

/// Resolve a media reference against the configured asset base URL.
///
/// Absolute `http(s)` URLs pass through unchanged; anything else is
/// treated as a path relative to the static asset base.
pub fn resolve_media_url(reference: &str, base: &str) -> String {
    if reference.starts_with("http://") || reference.starts_with("https://") {
        return reference.to_owned();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        reference.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_urls_pass_through() {
        assert_eq!(
            resolve_media_url("https://cdn.example/clip.png", "/assets"),
            "https://cdn.example/clip.png"
        );
        assert_eq!(
            resolve_media_url("http://cdn.example/clip.png", "/assets"),
            "http://cdn.example/clip.png"
        );
    }

    #[test]
    fn relative_references_join_the_base() {
        assert_eq!(
            resolve_media_url("/audio/clip1.mp3", "/assets/"),
            "/assets/audio/clip1.mp3"
        );
        assert_eq!(
            resolve_media_url("covers/one.png", "/"),
            "/covers/one.png"
        );
    }
}
