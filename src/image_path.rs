//! Image URL normalization for locating the clicked screenshot in a slider.
//!
//! The clicked `<img>` and the slider's copies of it can spell the same file
//! differently: relative to different pages, with or without a host. Both
//! sides are resolved against the document base and compared by path suffix.

#[cfg(test)]
#[path = "image_path_test.rs"]
mod image_path_test;

use url::Url;

use crate::error::SiteError;

/// Parse the document base URL.
///
/// # Errors
///
/// Returns [`SiteError::Url`] when `raw` is not an absolute URL.
pub fn parse_base(raw: &str) -> Result<Url, SiteError> {
    Url::parse(raw).map_err(|source| SiteError::Url { url: raw.to_owned(), source })
}

/// Resolve `raw` against `base` and reduce it to a comparable path: no
/// leading slashes and no leading `../` segments. Query and fragment are
/// dropped by the resolution.
#[must_use]
pub fn normalize_path(raw: &str, base: &Url) -> String {
    match base.join(raw) {
        Ok(resolved) => strip_leading_traversal(resolved.path()),
        Err(e) => {
            log::debug!("image_path: cannot resolve `{raw}`: {e}");
            strip_leading_traversal(raw)
        }
    }
}

fn strip_leading_traversal(path: &str) -> String {
    let mut rest = path.trim_start_matches('/');
    while let Some(after) = rest.strip_prefix("../") {
        rest = after.trim_start_matches('/');
    }
    rest.to_owned()
}

/// Two normalized paths name the same image when one ends with the other.
#[must_use]
pub fn same_image(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.ends_with(b) || b.ends_with(a)
}

/// Position of `clicked` within `images`, first match wins.
#[must_use]
pub fn find_image<S: AsRef<str>>(images: &[S], clicked: &str, base: &Url) -> Option<usize> {
    let clicked = normalize_path(clicked, base);
    images
        .iter()
        .position(|image| same_image(&normalize_path(image.as_ref(), base), &clicked))
}
