//! Image reference splitting.
//!
//! The engine's create-image endpoint pulls every tag of a repository when
//! no tag is given, so untagged references are pinned to `latest` before the
//! call, matching `docker pull`.

/// Tag used when a reference carries neither a tag nor a digest.
pub const DEFAULT_TAG: &str = "latest";

/// A reference split into the parts the create-image endpoint expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReference<'a> {
    /// Repository, or the full reference when pinned by digest.
    pub from_image: &'a str,
    /// Tag to pull; empty when the reference is pinned by digest.
    pub tag: &'a str,
}

/// Splits `reference` into repository and tag.
///
/// Returns `None` for references that are empty or contain whitespace.
#[must_use]
pub fn split_reference(reference: &str) -> Option<ImageReference<'_>> {
    if reference.is_empty() || reference.chars().any(char::is_whitespace) {
        return None;
    }

    if reference.contains('@') {
        return Some(ImageReference {
            from_image: reference,
            tag: "",
        });
    }

    // A colon before the last slash belongs to a registry port.
    let name_start = reference.rfind('/').map_or(0, |i| i + 1);
    match reference[name_start..].rfind(':') {
        Some(i) => {
            let split = name_start + i;
            let tag = &reference[split + 1..];
            if tag.is_empty() {
                return None;
            }
            Some(ImageReference {
                from_image: &reference[..split],
                tag,
            })
        }
        None => Some(ImageReference {
            from_image: reference,
            tag: DEFAULT_TAG,
        }),
    }
}
