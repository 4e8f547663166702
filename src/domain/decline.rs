use serde::{Deserialize, Serialize};

/// Semantic bucket a decline falls into.
///
/// Declaration order is significant: fuzzy matching walks [`ErrorCategory::ALL`] front to
/// back and the first category with a matching keyword wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCategory {
    AddressMismatch,
    CardNumberMismatch,
    CvvMismatch,
    ExpirationDateMismatch,
    ExpiredCard,
    Fraud,
    GeneralDecline,
    InsufficientFunds,
    LostOrStolen,
}

impl ErrorCategory {
    pub const ALL: [ErrorCategory; 9] = [
        ErrorCategory::AddressMismatch,
        ErrorCategory::CardNumberMismatch,
        ErrorCategory::CvvMismatch,
        ErrorCategory::ExpirationDateMismatch,
        ErrorCategory::ExpiredCard,
        ErrorCategory::Fraud,
        ErrorCategory::GeneralDecline,
        ErrorCategory::InsufficientFunds,
        ErrorCategory::LostOrStolen,
    ];

    pub const fn default_retryable(self) -> bool {
        matches!(self, ErrorCategory::GeneralDecline | ErrorCategory::InsufficientFunds)
    }

    /// Lowercase substrings that identify this category in a free-text gateway error.
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            ErrorCategory::AddressMismatch => &["address"],
            ErrorCategory::CardNumberMismatch => &["invalid card number"],
            ErrorCategory::CvvMismatch => &["cvc"],
            ErrorCategory::ExpirationDateMismatch => &["expiration date"],
            ErrorCategory::ExpiredCard => &["expired"],
            ErrorCategory::Fraud => &["fraud"],
            ErrorCategory::GeneralDecline => &[],
            ErrorCategory::InsufficientFunds => &["not enough balance", "withdrawal amount exceeded"],
            ErrorCategory::LostOrStolen => &[],
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCategory::AddressMismatch => "ADDRESS_MISMATCH",
            ErrorCategory::CardNumberMismatch => "CARD_NUMBER_MISMATCH",
            ErrorCategory::CvvMismatch => "CVV_MISMATCH",
            ErrorCategory::ExpirationDateMismatch => "EXPIRATION_DATE_MISMATCH",
            ErrorCategory::ExpiredCard => "EXPIRED_CARD",
            ErrorCategory::Fraud => "FRAUD",
            ErrorCategory::GeneralDecline => "GENERAL_DECLINE",
            ErrorCategory::InsufficientFunds => "INSUFFICIENT_FUNDS",
            ErrorCategory::LostOrStolen => "LOST_OR_STOLEN",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Code carried by decline codes synthesized from a fuzzy keyword match.
pub const FUZZY_MATCH_CODE: i32 = 0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclineCode {
    pub processor: String,
    pub code: i32,
    pub message: String,
    pub category: ErrorCategory,
    pub retryable: bool,
}

impl DeclineCode {
    pub fn is_fuzzy_match(&self) -> bool {
        self.code == FUZZY_MATCH_CODE
    }
}
