use crate::advisory::domain::{AdvisoryRecord, VendorVocabulary};

/// The vendor product matched in an advisory's narrative. At most one per
/// advisory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoftwareTag {
    pub product: String,
}

/// An advisory record annotated with its optional software tag.
#[derive(Debug, Clone)]
pub struct TaggedAdvisory {
    pub record: AdvisoryRecord,
    pub tag: Option<SoftwareTag>,
}

/// Scans advisory narratives for known vendor products.
///
/// Matching is first-match-wins over whitespace tokens of the raw narrative,
/// in original token order. The composed description (which may embed code
/// snippets) is deliberately not scanned, to avoid spurious matches inside
/// code.
pub struct SoftwareTagger<'a> {
    vocabulary: &'a VendorVocabulary,
}

impl<'a> SoftwareTagger<'a> {
    pub fn new(vocabulary: &'a VendorVocabulary) -> Self {
        Self { vocabulary }
    }

    /// Returns the tag for the first narrative token present in the
    /// vocabulary, or `None` if nothing matches or the narrative is absent.
    pub fn tag(&self, record: &AdvisoryRecord) -> Option<SoftwareTag> {
        first_vendor_token(self.vocabulary, record.details.as_deref()?).map(|product| {
            SoftwareTag {
                product: product.to_string(),
            }
        })
    }

    pub fn annotate(&self, record: AdvisoryRecord) -> TaggedAdvisory {
        let tag = self.tag(&record);
        TaggedAdvisory { record, tag }
    }
}

/// First whitespace-delimited token of `narrative` that is an exact
/// vocabulary member. Pure function of (vocabulary, token list): no partial
/// or substring matching, no ranking.
pub fn first_vendor_token<'t>(
    vocabulary: &VendorVocabulary,
    narrative: &'t str,
) -> Option<&'t str> {
    narrative
        .split_whitespace()
        .find(|token| vocabulary.contains(token))
}
