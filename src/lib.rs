pub mod config;
pub mod domain {
    pub mod attempt;
    pub mod billing;
    pub mod decline;
}
pub mod gate {
    pub mod pending;
    pub mod retry_gate;
    pub mod stats;
}
pub mod http {
    pub mod handlers {
        pub mod decline_codes;
        pub mod experiment_config;
        pub mod ops;
        pub mod payment_method_check;
        pub mod retries;
        pub mod stats;
    }
    pub mod middleware {
        pub mod admin_auth;
    }
}
pub mod providers;
pub mod repo {
    pub mod billing_repo;
    pub mod experiment_config_repo;
}
pub mod rules {
    pub mod classifier;
    pub mod decline_table;
    pub mod fuzzy;
    pub mod tables;
}
pub mod service {
    pub mod config_cache;
    pub mod retries_service;
}

#[derive(Clone)]
pub struct AppState {
    pub retries_service: service::retries_service::RetriesService,
    pub experiment_config: service::config_cache::ExperimentConfigCache,
    pub pool: sqlx::PgPool,
}

impl axum::extract::FromRef<AppState> for service::retries_service::RetriesService {
    fn from_ref(state: &AppState) -> Self {
        state.retries_service.clone()
    }
}
