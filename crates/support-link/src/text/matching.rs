use super::normalizer::NormalizedText;

impl NormalizedText {
    /// Loose equality: equal, or either side contains the other.
    ///
    /// Not transitive.
    pub fn matches(&self, other: &NormalizedText) -> bool {
        // The empty form is a substring of every form.
        if self.is_empty() || other.is_empty() {
            return true;
        }
        let (left, right) = (self.as_str(), other.as_str());
        left == right || left.contains(right) || right.contains(left)
    }
}

/// Whether two human-entered names refer to the same place.
pub fn names_match(left: &str, right: &str) -> bool {
    NormalizedText::new(left).matches(&NormalizedText::new(right))
}
