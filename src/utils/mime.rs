//! MIME type detection for served files.
//!
//! Logical asset paths are plain `/`-separated strings, so detection works
//! on names rather than `Path`s. Extensions are matched case-insensitively
//! (`CLIP.MP4` is still `video/mp4`).

/// Common MIME type constants.
pub mod types {
    // Text
    pub const HTML: &str = "text/html; charset=utf-8";
    pub const PLAIN: &str = "text/plain; charset=utf-8";
    pub const CSS: &str = "text/css; charset=utf-8";
    pub const JAVASCRIPT: &str = "text/javascript; charset=utf-8";
    pub const JSON: &str = "application/json";
    pub const XML: &str = "application/xml";
    pub const WEBMANIFEST: &str = "application/manifest+json";

    // Binary
    pub const OCTET_STREAM: &str = "application/octet-stream";
    pub const WASM: &str = "application/wasm";

    // Images
    pub const PNG: &str = "image/png";
    pub const JPEG: &str = "image/jpeg";
    pub const GIF: &str = "image/gif";
    pub const WEBP: &str = "image/webp";
    pub const AVIF: &str = "image/avif";
    pub const SVG: &str = "image/svg+xml";
    pub const ICO: &str = "image/x-icon";

    // Audio
    pub const MP3: &str = "audio/mpeg";
    pub const WAV: &str = "audio/wav";
    pub const OGG: &str = "audio/ogg";
    pub const FLAC: &str = "audio/flac";
    pub const AAC: &str = "audio/aac";

    // Video
    pub const MP4: &str = "video/mp4";
    pub const WEBM: &str = "video/webm";
    pub const OGG_VIDEO: &str = "video/ogg";
    pub const MOV: &str = "video/quicktime";

    // Fonts
    pub const WOFF: &str = "font/woff";
    pub const WOFF2: &str = "font/woff2";
    pub const TTF: &str = "font/ttf";
    pub const OTF: &str = "font/otf";
}

/// Guess MIME type from a file or logical asset name.
pub fn from_name(name: &str) -> &'static str {
    let file = name.rsplit('/').next().unwrap_or(name);
    let ext = file.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
    from_extension(ext.as_deref())
}

/// Guess MIME type from a lowercase extension string.
pub fn from_extension(ext: Option<&str>) -> &'static str {
    match ext {
        // Web / Text
        Some("html" | "htm") => types::HTML,
        Some("css") => types::CSS,
        Some("js" | "mjs" | "cjs") => types::JAVASCRIPT,
        Some("json" | "map") => types::JSON,
        Some("webmanifest") => types::WEBMANIFEST,
        Some("xml") => types::XML,
        Some("txt") => types::PLAIN,

        // Images
        Some("svg") => types::SVG,
        Some("png") => types::PNG,
        Some("jpg" | "jpeg") => types::JPEG,
        Some("gif") => types::GIF,
        Some("webp") => types::WEBP,
        Some("avif") => types::AVIF,
        Some("ico") => types::ICO,

        // Audio
        Some("mp3") => types::MP3,
        Some("wav") => types::WAV,
        Some("oga") => types::OGG,
        Some("flac") => types::FLAC,
        Some("aac" | "m4a") => types::AAC,

        // Video (`.ogg` is scanned as a video container, so serve it as one)
        Some("mp4" | "m4v") => types::MP4,
        Some("webm") => types::WEBM,
        Some("ogg" | "ogv") => types::OGG_VIDEO,
        Some("mov") => types::MOV,

        // Fonts
        Some("woff") => types::WOFF,
        Some("woff2") => types::WOFF2,
        Some("ttf") => types::TTF,
        Some("otf") => types::OTF,

        Some("wasm") => types::WASM,

        _ => types::OCTET_STREAM,
    }
}
