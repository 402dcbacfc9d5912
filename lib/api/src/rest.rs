use actix_web::http::header;
use actix_web::{
    middleware, web, App, HttpRequest, HttpResponse, HttpServer, Result as ActixResult,
};
use dagcheck_core::check_dag;
use tracing::{debug, warn};

use crate::config::ServerConfig;
use crate::decode::decode_request;
use crate::error::ApiError;

pub struct RestApi;

impl RestApi {
    pub async fn start(config: ServerConfig) -> std::io::Result<()> {
        let cors = config.cors.clone();
        let max_payload_bytes = config.max_payload_bytes;

        let mut server = HttpServer::new(move || {
            App::new()
                .wrap(middleware::Logger::default())
                .wrap(cors.build())
                .configure(|cfg| RestApi::configure(cfg, max_payload_bytes))
        });

        if let Some(workers) = config.workers {
            server = server.workers(workers);
        }

        server.bind((config.host.as_str(), config.port))?.run().await
    }

    /// Register the routes. Shared by the server and by service tests.
    pub fn configure(cfg: &mut web::ServiceConfig, max_payload_bytes: usize) {
        cfg.app_data(web::PayloadConfig::new(max_payload_bytes))
            .service(web::resource("/").route(web::get().to(health)))
            .service(web::resource("/pipelines/parse").route(web::post().to(parse_pipeline)));
    }
}

async fn health() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "Ping": "Pong"
    })))
}

async fn parse_pipeline(req: HttpRequest, body: web::Bytes) -> Result<HttpResponse, ApiError> {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());
    let pipeline = decode_request(content_type, &body).map_err(|e| {
        warn!("Rejected pipeline body: {}", e);
        e
    })?;

    let result = check_dag(&pipeline);
    debug!(
        num_nodes = result.num_nodes,
        num_edges = result.num_edges,
        is_dag = result.is_dag,
        "Parsed pipeline"
    );

    Ok(HttpResponse::Ok().json(result))
}
