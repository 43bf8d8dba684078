//! Cached bytes and change metadata for one output path.

use std::fmt;

use folio_common::ContentHash;

/// The cached artifact for a single output path.
///
/// What `content` holds depends on the path: a compiled component, the
/// concatenated stylesheet, or the raw bytes of a layout file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactRecord {
    /// Primary payload.
    pub content: Vec<u8>,

    /// Per-component style payload, present only for components that carry
    /// a style block.
    pub style_content: Option<Vec<u8>>,

    /// Server-rendered output, reused while the owning layout is unchanged.
    pub rendered_content: Option<Vec<u8>>,

    /// Checksum of `content` at the last write. Zero means never hashed.
    pub content_hash: ContentHash,

    /// Set by the most recent write when the content was unchanged, so
    /// downstream work for this artifact can be skipped.
    pub processed: bool,
}

impl ArtifactRecord {
    /// Creates an unhashed record holding `content`.
    pub fn new(content: impl Into<Vec<u8>>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Attaches a component style payload.
    pub fn with_style(mut self, style: impl Into<Vec<u8>>) -> Self {
        self.style_content = Some(style.into());
        self
    }

    /// Attaches previously rendered markup.
    pub fn with_rendered(mut self, rendered: impl Into<Vec<u8>>) -> Self {
        self.rendered_content = Some(rendered.into());
        self
    }

    /// Recomputes `content_hash` from the current content.
    pub fn rehash(&mut self) -> ContentHash {
        self.content_hash = ContentHash::from_bytes(&self.content);
        self.content_hash
    }

    /// Returns `true` if the stored hash is set and still matches `content`.
    pub fn is_unchanged(&self) -> bool {
        self.content_hash
            .matches(ContentHash::from_bytes(&self.content))
    }
}

impl fmt::Display for ArtifactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hash -> {}", self.content_hash)?;
        writeln!(f, "Content -> {}", String::from_utf8_lossy(&self.content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_is_unhashed() {
        let rec = ArtifactRecord::new("body");
        assert!(rec.content_hash.is_zero());
        assert!(!rec.processed);
        assert!(rec.style_content.is_none());
        assert!(rec.rendered_content.is_none());
    }

    #[test]
    fn builders_attach_payloads() {
        let rec = ArtifactRecord::new("js")
            .with_style(".a{}")
            .with_rendered("<div></div>");
        assert_eq!(rec.style_content.as_deref(), Some(&b".a{}"[..]));
        assert_eq!(rec.rendered_content.as_deref(), Some(&b"<div></div>"[..]));
    }

    #[test]
    fn rehash_tracks_content() {
        let mut rec = ArtifactRecord::new("v1");
        assert!(!rec.is_unchanged());

        rec.rehash();
        assert!(rec.is_unchanged());

        rec.content = b"v2".to_vec();
        assert!(!rec.is_unchanged());
    }

    #[test]
    fn empty_content_never_unchanged() {
        let mut rec = ArtifactRecord::default();
        rec.rehash();
        assert!(!rec.is_unchanged());
    }

    #[test]
    fn display_format() {
        let mut rec = ArtifactRecord::new("let x = 1;");
        rec.content_hash = ContentHash::from_raw(7);
        assert_eq!(rec.to_string(), "Hash -> 7\nContent -> let x = 1;\n");
    }
}
