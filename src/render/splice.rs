//! Marker-region splicing in the host document
//!
//! A region is delimited by a literal start token and end token. Only
//! the first start/end pair is rewritten; everything outside the pair
//! is preserved byte-for-byte. When the pair is missing the region is
//! bootstrapped as a fresh section at the top of the document.

/// A named, fully-replaceable span of the host document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerRegion {
    /// Literal start token, e.g. `<!-- SUMMARY_START -->`
    pub start: String,
    /// Literal end token, e.g. `<!-- SUMMARY_END -->`
    pub end: String,
    /// Section heading used only when bootstrapping a missing region
    pub heading: String,
}

impl MarkerRegion {
    pub fn new(start: impl Into<String>, end: impl Into<String>, heading: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            heading: heading.into(),
        }
    }
}

/// Replace the content strictly between the region's first marker pair
/// with `fragment`, or prepend a freshly constructed section when the
/// pair is absent.
///
/// The fragment is framed by single newlines inside the markers, so
/// re-splicing an unmodified output with the same fragment yields a
/// byte-identical document.
pub fn splice_region(document: &str, region: &MarkerRegion, fragment: &str) -> String {
    if let Some(start_idx) = document.find(&region.start) {
        let after_start = start_idx + region.start.len();
        if let Some(relative_end) = document[after_start..].find(&region.end) {
            let end_idx = after_start + relative_end;
            return format!(
                "{}\n{}\n{}",
                &document[..after_start],
                fragment,
                &document[end_idx..]
            );
        }
    }

    prepend_section(document, region, fragment)
}

/// Bootstrap a new section (heading, marker pair, fragment) at the top
/// of the document. Used when the host document was never prepared with
/// markers for this region.
fn prepend_section(document: &str, region: &MarkerRegion, fragment: &str) -> String {
    format!(
        "{}\n\n{}\n{}\n{}\n\n{}",
        region.heading, region.start, fragment, region.end, document
    )
}
