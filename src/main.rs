use axum::middleware::from_fn_with_state;
use axum::routing::{get, post, put};
use axum::Router;
use payment_retries::config::AppConfig;
use payment_retries::gate::retry_gate::RetryGate;
use payment_retries::gate::stats::OutcomeStats;
use payment_retries::repo::billing_repo::BillingRepo;
use payment_retries::repo::experiment_config_repo::ExperimentConfigRepo;
use payment_retries::rules::classifier::Classifier;
use payment_retries::service::config_cache::ExperimentConfigCache;
use payment_retries::service::retries_service::RetriesService;
use payment_retries::AppState;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let pool = PgPoolOptions::new()
        .max_connections(cfg.db_max_connections)
        .connect(&cfg.database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    let billing_repo = Arc::new(BillingRepo { pool: pool.clone() });
    let experiment_config = ExperimentConfigCache::new(
        Arc::new(ExperimentConfigRepo { pool: pool.clone() }),
        cfg.experiment_config_ttl(),
        cfg.default_experiment_traffic_pct,
    );

    let classifier = Arc::new(Classifier::default());
    for (plugin, codes) in classifier.table().plugins() {
        tracing::info!("loaded decline table pluginName='{}' codes='{}'", plugin, codes.len());
    }

    let retries_service = RetriesService {
        classifier,
        gate: Arc::new(RetryGate::new(Arc::new(OutcomeStats::new()))),
        history: billing_repo.clone(),
        payment_methods: billing_repo,
        experiment_config: Arc::new(experiment_config.clone()),
    };

    let state = AppState {
        retries_service,
        experiment_config,
        pool,
    };

    let admin_key = cfg.admin_api_key.clone();
    let admin_routes = Router::new()
        .route(
            "/experiment-config/:tenant_id",
            put(payment_retries::http::handlers::experiment_config::upsert_experiment_config),
        )
        .layer(from_fn_with_state(
            admin_key,
            payment_retries::http::middleware::admin_auth::require_admin_api_key,
        ));

    let internal_key = cfg.internal_api_key.clone();
    let orchestrator_routes = Router::new()
        .route(
            "/retries/decide",
            post(payment_retries::http::handlers::retries::decide_retry),
        )
        .route(
            "/retries/:attempt_id/outcome",
            post(payment_retries::http::handlers::retries::record_outcome),
        )
        .layer(from_fn_with_state(
            internal_key,
            payment_retries::http::middleware::admin_auth::require_internal_api_key,
        ));

    let app = Router::new()
        .route(
            "/decline-codes",
            get(payment_retries::http::handlers::decline_codes::list_decline_codes),
        )
        .route(
            "/payment-method-check",
            get(payment_retries::http::handlers::payment_method_check::payment_method_check),
        )
        .route("/stats", get(payment_retries::http::handlers::stats::get_stats))
        .route(
            "/experiment-config/:tenant_id",
            get(payment_retries::http::handlers::experiment_config::get_experiment_config),
        )
        .route("/ops/readiness", get(payment_retries::http::handlers::ops::readiness))
        .route("/ops/liveness", get(payment_retries::http::handlers::ops::liveness))
        .merge(admin_routes)
        .merge(orchestrator_routes)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
