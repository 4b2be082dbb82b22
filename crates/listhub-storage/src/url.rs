//! Public URL construction for stored images.

/// Builds the URL handed back to clients after an upload.
///
/// The configured base selects one of three forms:
///
/// - contains `/api/images`: `{base}/{key}`, an absolute URL served through
///   this API.
/// - starts with `/api`: `/api/images/{key}`, a same-origin relative path.
/// - anything else: `{base}/{bucket}/{key}`, direct object-store access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicUrl {
    base: String,
    bucket: String,
}

impl PublicUrl {
    pub fn new(base: &str, bucket: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
            bucket: bucket.to_string(),
        }
    }

    /// URL for the object stored under `key`.
    pub fn for_key(&self, key: &str) -> String {
        if self.base.contains("/api/images") {
            format!("{}/{key}", self.base)
        } else if self.base.starts_with("/api") {
            format!("/api/images/{key}")
        } else {
            format!("{}/{}/{key}", self.base, self.bucket)
        }
    }
}
