use actix_web::{web, App, HttpServer};
use carmaster::config::{process_env, AppConfig};
use carmaster::infra::state::StateBuilder;
use carmaster::middleware::{cors_middleware, RequestTrace, StructuredLogger};
use carmaster::routes;
use carmaster::telemetry::{self, LogFormat};
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing(LogFormat::from_lookup(&process_env));

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let app_state = match StateBuilder::from_config(&config).build().await {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to build application state");
            std::process::exit(1);
        }
    };

    info!(
        host = %config.host,
        port = config.port,
        env = ?config.runtime_env,
        origins = ?config.cors_allowed_origins,
        "Car Master is starting"
    );

    let data = web::Data::new(app_state);
    let origins = config.cors_allowed_origins.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&origins))
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
