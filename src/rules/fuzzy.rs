use crate::domain::decline::ErrorCategory;

#[derive(Debug, Clone)]
pub struct FuzzyCategory {
    pub category: ErrorCategory,
    pub retryable: bool,
    pub keywords: Vec<String>,
}

/// Keyword-substring matcher used when a decline carries no usable numeric code.
///
/// Categories are tried in the order they were given; the first with a keyword contained in
/// the lowercased message wins. Categories without keywords never match.
#[derive(Debug, Clone)]
pub struct FuzzyCategoryMatcher {
    categories: Vec<FuzzyCategory>,
}

impl Default for FuzzyCategoryMatcher {
    fn default() -> Self {
        Self::new(ErrorCategory::ALL.into_iter().map(|category| FuzzyCategory {
            category,
            retryable: category.default_retryable(),
            keywords: category.keywords().iter().map(|k| k.to_string()).collect(),
        }))
    }
}

impl FuzzyCategoryMatcher {
    pub fn new(categories: impl IntoIterator<Item = FuzzyCategory>) -> Self {
        let categories = categories
            .into_iter()
            .map(|mut c| {
                c.keywords = c.keywords.iter().map(|k| k.to_lowercase()).collect();
                c
            })
            .collect();
        Self { categories }
    }

    pub fn find(&self, message: Option<&str>) -> Option<&FuzzyCategory> {
        let message = message.filter(|m| !m.is_empty())?.to_lowercase();
        self.categories
            .iter()
            .find(|c| c.keywords.iter().any(|k| message.contains(k.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched(message: &str) -> Option<ErrorCategory> {
        FuzzyCategoryMatcher::default()
            .find(Some(message))
            .map(|c| c.category)
    }

    #[test]
    fn matches_case_insensitively() {
        assert_eq!(matched("CVC Declined"), Some(ErrorCategory::CvvMismatch));
        assert_eq!(matched("Not Enough Balance"), Some(ErrorCategory::InsufficientFunds));
        assert_eq!(matched("Withdrawal amount exceeded"), Some(ErrorCategory::InsufficientFunds));
    }

    #[test]
    fn earliest_declared_category_wins() {
        // "address" (ADDRESS_MISMATCH) is declared before "expired" (EXPIRED_CARD)
        assert_eq!(matched("Expired card, address unknown"), Some(ErrorCategory::AddressMismatch));
        assert_eq!(matched("Fraud: expired"), Some(ErrorCategory::ExpiredCard));
    }

    #[test]
    fn empty_or_missing_message_never_matches() {
        let m = FuzzyCategoryMatcher::default();
        assert!(m.find(None).is_none());
        assert!(m.find(Some("")).is_none());
    }

    #[test]
    fn keywordless_categories_are_never_returned() {
        assert_eq!(matched("Card blocked."), None);
        assert_eq!(matched("Declined"), None);
        assert_eq!(matched("lost or stolen"), None);
    }

    #[test]
    fn custom_order_is_respected() {
        let m = FuzzyCategoryMatcher::new([
            FuzzyCategory {
                category: ErrorCategory::Fraud,
                retryable: false,
                keywords: vec!["Blocked".to_string()],
            },
            FuzzyCategory {
                category: ErrorCategory::GeneralDecline,
                retryable: true,
                keywords: vec!["card".to_string()],
            },
        ]);
        assert_eq!(m.find(Some("Card blocked.")).map(|c| c.category), Some(ErrorCategory::Fraud));
    }
}
