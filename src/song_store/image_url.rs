/// Storage bucket holding the song covers.
pub const STORAGE_BUCKET: &str = "song-images";

/// Prefix used for covers still hosted on third-party sites.
pub const CORS_PROXY_PREFIX: &str = "https://corsproxy.io/?";

const PUBLIC_STORAGE_MARKER: &str = "/storage/v1/object/public/";

/// Turns a song's image reference into a URL a browser can load.
///
/// Public storage URLs are kept, other absolute URLs go through the CORS
/// proxy, and bare paths are resolved inside the storage bucket. Without a
/// storage base, bare paths are returned unchanged.
pub fn resolve_image_url(image_path: &str, storage_base_url: Option<&str>) -> String {
    if image_path.starts_with("http") {
        if image_path.contains(PUBLIC_STORAGE_MARKER) {
            return image_path.to_string();
        }
        // TODO: drop the proxy once every cover lives in the storage bucket.
        return format!("{}{}", CORS_PROXY_PREFIX, urlencoding::encode(image_path));
    }

    match storage_base_url {
        Some(base) => format!(
            "{}{}{}/{}",
            base.trim_end_matches('/'),
            PUBLIC_STORAGE_MARKER,
            STORAGE_BUCKET,
            image_path.trim_start_matches('/')
        ),
        None => image_path.to_string(),
    }
}
