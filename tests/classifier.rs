use payment_retries::domain::billing::{TransactionPluginInfo, PROCESSOR_RESPONSE_PROPERTY};
use payment_retries::domain::decline::{DeclineCode, ErrorCategory};
use payment_retries::rules::classifier::Classifier;
use payment_retries::rules::decline_table::{ADYEN_PLUGIN, BRAINTREE_BLUE_PLUGIN, ORBITAL_PLUGIN};
use std::collections::HashMap;

#[test]
fn numeric_code_returns_the_table_entry() {
    let c = Classifier::default();
    let out = c.classify(ADYEN_PLUGIN, Some("62"), None);
    assert_eq!(
        out,
        Some(DeclineCode {
            processor: "Adyen".to_string(),
            code: 62,
            message: "Restricted card".to_string(),
            category: ErrorCategory::GeneralDecline,
            retryable: true,
        })
    );
}

#[test]
fn table_entry_wins_over_message_keywords() {
    let c = Classifier::default();
    let out = c
        .classify(BRAINTREE_BLUE_PLUGIN, Some("2004"), Some("CVC Declined"))
        .unwrap();
    assert_eq!(out.code, 2004);
    assert_eq!(out.category, ErrorCategory::ExpiredCard);
    assert!(!out.retryable);
}

#[test]
fn every_table_entry_is_returned_verbatim() {
    let c = Classifier::default();
    for (plugin, codes) in c.table().plugins() {
        for (code, expected) in codes {
            let out = c.classify(plugin, Some(&code.to_string()), Some("fraud"));
            assert_eq!(out.as_ref(), Some(expected), "plugin={} code={}", plugin, code);
        }
    }
}

#[test]
fn keyword_fallback_synthesizes_code_zero() {
    let c = Classifier::default();
    let out = c.classify(ADYEN_PLUGIN, None, Some("CVC Declined")).unwrap();
    assert_eq!(out.processor, "Adyen");
    assert_eq!(out.code, 0);
    assert_eq!(out.message, "CVC Declined");
    assert_eq!(out.category, ErrorCategory::CvvMismatch);
    assert!(!out.retryable);
}

#[test]
fn unmatched_message_is_unclassified() {
    let c = Classifier::default();
    assert_eq!(c.classify(ADYEN_PLUGIN, None, Some("Card blocked.")), None);
    assert_eq!(c.classify(ADYEN_PLUGIN, None, None), None);
    assert_eq!(c.classify(ADYEN_PLUGIN, None, Some("")), None);
}

#[test]
fn unknown_plugin_is_unclassified() {
    let c = Classifier::default();
    assert_eq!(c.classify("killbill-stripe", Some("62"), Some("CVC Declined")), None);
}

#[test]
fn non_numeric_code_falls_back_to_keywords() {
    let c = Classifier::default();
    let out = c
        .classify(ORBITAL_PLUGIN, Some("N7"), Some("Not enough balance"))
        .unwrap();
    assert_eq!(out.processor, "Paymentech");
    assert_eq!(out.category, ErrorCategory::InsufficientFunds);
    assert!(out.retryable);
    assert!(out.is_fuzzy_match());
}

#[test]
fn code_missing_from_table_falls_back_to_keywords() {
    let c = Classifier::default();
    assert!(c.table().lookup(ADYEN_PLUGIN, 9999).is_none());

    let out = c
        .classify(ADYEN_PLUGIN, Some("9999"), Some("Expired Card"))
        .unwrap();
    assert_eq!(out.code, 0);
    assert_eq!(out.category, ErrorCategory::ExpiredCard);

    assert_eq!(c.classify(ADYEN_PLUGIN, Some("9999"), Some("Card blocked.")), None);
}

#[test]
fn processor_response_property_is_preferred() {
    let c = Classifier::default();
    let mut properties = HashMap::new();
    properties.insert(PROCESSOR_RESPONSE_PROPERTY.to_string(), "2001".to_string());
    let info = TransactionPluginInfo {
        gateway_error_code: Some("62".to_string()),
        gateway_error: Some("Insufficient Funds".to_string()),
        properties,
    };

    let out = c.classify_plugin_info(BRAINTREE_BLUE_PLUGIN, &info).unwrap();
    assert_eq!(out.code, 2001);
    assert_eq!(out.category, ErrorCategory::InsufficientFunds);
}
