//! Player embed URL for a looked-up video.

use url::form_urlencoded;

pub const EMBED_BASE_URL: &str = "https://www.youtube.com/embed/";

/// Related videos off, autoplay (muted, as autoplay policies require),
/// controls shown, looping via a single-entry playlist of the same video.
///
/// The id comes from the lookup service and is trusted as-is; it is only
/// percent-encoded so it cannot break out of the path segment.
pub fn embed_url(video_id: &str) -> String {
    let id: String = form_urlencoded::byte_serialize(video_id.as_bytes()).collect();
    format!("{EMBED_BASE_URL}{id}?rel=0&autoplay=1&controls=1&loop=1&playlist={id}&mute=1")
}
