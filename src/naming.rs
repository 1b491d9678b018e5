//! Thumbnail filename derivation.
//!
//! Source files follow a `base_token.png` convention where the final
//! underscore-delimited token is a per-shot qualifier (a sequence number,
//! a date fragment). The thumbnail drops that token and tags the name with
//! `_tn` instead:
//!
//! - `sample_2021_01.png` → `sample_2021_tn.png`
//! - `map_0042.png` → `map_tn.png`
//!
//! A name with no underscore keeps its whole stem (`photo.png` →
//! `photo_tn.png`). Derivation is pure string processing — no filesystem
//! state is consulted.

/// Derive the thumbnail filename for a source filename.
///
/// Returns `None` unless the name ends in literal `.png` — the check is
/// case-sensitive, so `photo.PNG` is not a candidate.
pub fn thumbnail_file_name(name: &str) -> Option<String> {
    let stem = name.strip_suffix(".png")?;
    let base = match stem.rsplit_once('_') {
        Some((base, _token)) => base,
        None => stem,
    };
    Some(format!("{base}_tn.png"))
}
