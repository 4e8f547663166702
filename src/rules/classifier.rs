use crate::domain::billing::TransactionPluginInfo;
use crate::domain::decline::{DeclineCode, FUZZY_MATCH_CODE};
use crate::rules::decline_table::DeclineTable;
use crate::rules::fuzzy::FuzzyCategoryMatcher;

/// Maps a processor-specific gateway error to a normalized [`DeclineCode`].
///
/// `None` means the decline could not be classified and default retry behavior applies. A
/// code classified as not retryable is a verdict like any other.
#[derive(Debug, Clone)]
pub struct Classifier {
    table: DeclineTable,
    fuzzy: FuzzyCategoryMatcher,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(DeclineTable::builtin(), FuzzyCategoryMatcher::default())
    }
}

impl Classifier {
    pub fn new(table: DeclineTable, fuzzy: FuzzyCategoryMatcher) -> Self {
        Self { table, fuzzy }
    }

    pub fn table(&self) -> &DeclineTable {
        &self.table
    }

    pub fn classify(
        &self,
        plugin_name: &str,
        raw_error_code: Option<&str>,
        raw_error_message: Option<&str>,
    ) -> Option<DeclineCode> {
        let Some(processor) = self.table.processor_for(plugin_name) else {
            tracing::info!("payment retries not configured for plugin='{}'", plugin_name);
            return None;
        };

        match raw_error_code.map(|c| c.trim().parse::<i32>()) {
            Some(Ok(code)) => {
                if let Some(found) = self.table.lookup(plugin_name, code) {
                    return Some(found.clone());
                }
                tracing::info!(
                    "no decline code plugin='{}' processorCode='{}', trying fuzzy match on errorMessage='{}'",
                    plugin_name,
                    code,
                    raw_error_message.unwrap_or_default()
                );
            }
            Some(Err(_)) => {
                tracing::info!(
                    "unable to extract an integer processorResponseCode from processorResponse='{}', trying fuzzy match on errorMessage='{}'",
                    raw_error_code.unwrap_or_default(),
                    raw_error_message.unwrap_or_default()
                );
            }
            None => {}
        }

        match self.fuzzy.find(raw_error_message) {
            Some(matched) => Some(DeclineCode {
                processor: processor.to_string(),
                code: FUZZY_MATCH_CODE,
                message: raw_error_message.unwrap_or_default().to_string(),
                category: matched.category,
                retryable: matched.retryable,
            }),
            None => {
                tracing::info!(
                    "unable to fuzzy match an error category plugin='{}' errorMessage='{}'",
                    plugin_name,
                    raw_error_message.unwrap_or_default()
                );
                None
            }
        }
    }

    pub fn classify_plugin_info(
        &self,
        plugin_name: &str,
        info: &TransactionPluginInfo,
    ) -> Option<DeclineCode> {
        self.classify(plugin_name, info.raw_error_code(), info.raw_error_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decline::ErrorCategory;
    use crate::rules::decline_table::ADYEN_PLUGIN;

    #[test]
    fn whitespace_around_numeric_code_is_ignored() {
        let c = Classifier::default();
        let out = c.classify(ADYEN_PLUGIN, Some(" 62 "), None).unwrap();
        assert_eq!(out.code, 62);
    }

    #[test]
    fn fuzzy_match_uses_the_plugin_processor_name() {
        let c = Classifier::default();
        let out = c
            .classify("killbill-cybersource", None, Some("Suspected FRAUD"))
            .unwrap();
        assert_eq!(out.processor, "Paymentech");
        assert_eq!(out.category, ErrorCategory::Fraud);
        assert!(out.is_fuzzy_match());
    }
}
