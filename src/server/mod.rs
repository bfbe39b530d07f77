//! main file for the server

pub mod model;
mod controller;
mod state;
mod store;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{info, warn};
use crate::server::controller::error::CustomError;
use crate::server::controller::health::{get_order_health, get_root, not_found};
use crate::server::controller::order::{get_orders, post_order};
use crate::server::model::config::ServerConfig;
use crate::server::state::AppState;
use crate::server::store::OrderStore;

/// Run the server
pub async fn run(ServerConfig { addr, workers, payload_limit }: ServerConfig) -> std::io::Result<()> {
    // one store for the whole process, shared by every worker
    let state = AppState::new(OrderStore::new());

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(cors())
            .wrap(Logger::default())
            .configure(|cfg| configure(cfg, state.clone(), payload_limit))
    });
    if let Some(workers) = workers {
        server = server.workers(workers);
    }

    info!("listening on {}", addr);
    server.bind(addr)?.run().await
}

/// Register state, json extraction rules and routes.
pub(crate) fn configure(cfg: &mut web::ServiceConfig, state: AppState, payload_limit: usize) {
    cfg.app_data(web::Data::new(state))
        .app_data(
            web::JsonConfig::default()
                .limit(payload_limit)
                .content_type_required(false)
                .error_handler(|err, _req| {
                    warn!("failed to extract json payload, {}", err);
                    CustomError::InvalidPayload.into()
                }),
        )
        .service(post_order)
        .service(get_orders)
        .service(get_order_health)
        .service(get_root)
        .default_service(web::to(not_found));
}

/// Permissive CORS, any origin may call the api.
pub(crate) fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}
