use crate::domain::decline::{DeclineCode, ErrorCategory};
use crate::rules::tables::{self, DeclineRow};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

pub const ADYEN_PLUGIN: &str = "killbill-adyen";
pub const BRAINTREE_BLUE_PLUGIN: &str = "killbill-braintree_blue";
pub const ORBITAL_PLUGIN: &str = "killbill-orbital";
pub const CYBERSOURCE_PLUGIN: &str = "killbill-cybersource";

pub const ADYEN: &str = "Adyen";
pub const BRAINTREE: &str = "Braintree";
pub const PAYMENTECH: &str = "Paymentech";

pub type CodeTable = BTreeMap<i32, DeclineCode>;

#[derive(Debug, Clone)]
struct PluginRoute {
    processor: String,
    codes: Arc<CodeTable>,
}

/// Read-only `plugin name -> code -> DeclineCode` lookup, built once at startup.
///
/// Several plugins may route to the same processor; they share one code table.
#[derive(Debug, Clone, Default)]
pub struct DeclineTable {
    routes: BTreeMap<String, PluginRoute>,
}

impl DeclineTable {
    pub fn builder() -> DeclineTableBuilder {
        DeclineTableBuilder::default()
    }

    pub fn builtin() -> Self {
        Self::builder()
            .processor(ADYEN, tables::ADYEN)
            .processor(BRAINTREE, tables::BRAINTREE)
            .processor(PAYMENTECH, tables::PAYMENTECH)
            .route(ADYEN_PLUGIN, ADYEN)
            .route(BRAINTREE_BLUE_PLUGIN, BRAINTREE)
            .route(ORBITAL_PLUGIN, PAYMENTECH)
            .route(CYBERSOURCE_PLUGIN, PAYMENTECH)
            .build()
    }

    pub fn processor_for(&self, plugin_name: &str) -> Option<&str> {
        self.routes.get(plugin_name).map(|r| r.processor.as_str())
    }

    pub fn codes_for(&self, plugin_name: &str) -> Option<&CodeTable> {
        self.routes.get(plugin_name).map(|r| r.codes.as_ref())
    }

    pub fn lookup(&self, plugin_name: &str, code: i32) -> Option<&DeclineCode> {
        self.codes_for(plugin_name)?.get(&code)
    }

    pub fn plugins(&self) -> impl Iterator<Item = (&str, &CodeTable)> {
        self.routes
            .iter()
            .map(|(plugin, route)| (plugin.as_str(), route.codes.as_ref()))
    }

    /// Every plugin with only the entries whose retryable flag matches and, when given,
    /// whose category matches. Plugins with no surviving entry are kept with an empty map.
    pub fn filtered(
        &self,
        retryable: bool,
        category: Option<ErrorCategory>,
    ) -> BTreeMap<String, CodeTable> {
        self.plugins()
            .map(|(plugin, codes)| {
                let kept = codes
                    .iter()
                    .filter(|(_, d)| d.retryable == retryable)
                    .filter(|(_, d)| category.map_or(true, |c| d.category == c))
                    .map(|(code, d)| (*code, d.clone()))
                    .collect();
                (plugin.to_string(), kept)
            })
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct DeclineTableBuilder {
    processors: HashMap<String, Arc<CodeTable>>,
    routes: Vec<(String, String)>,
}

impl DeclineTableBuilder {
    pub fn processor(mut self, processor: &str, rows: &[DeclineRow]) -> Self {
        let codes = rows
            .iter()
            .map(|(code, message, category, retryable)| {
                (
                    *code,
                    DeclineCode {
                        processor: processor.to_string(),
                        code: *code,
                        message: (*message).to_string(),
                        category: *category,
                        retryable: *retryable,
                    },
                )
            })
            .collect();
        self.processors.insert(processor.to_string(), Arc::new(codes));
        self
    }

    pub fn route(mut self, plugin_name: &str, processor: &str) -> Self {
        self.routes.push((plugin_name.to_string(), processor.to_string()));
        self
    }

    pub fn build(self) -> DeclineTable {
        let mut routes = BTreeMap::new();
        for (plugin, processor) in self.routes {
            match self.processors.get(&processor) {
                Some(codes) => {
                    routes.insert(
                        plugin,
                        PluginRoute {
                            processor,
                            codes: Arc::clone(codes),
                        },
                    );
                }
                None => {
                    tracing::warn!(
                        "dropping route plugin='{}': no decline codes registered for processor='{}'",
                        plugin,
                        processor
                    );
                }
            }
        }
        DeclineTable { routes }
    }
}
