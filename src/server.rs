use crate::io_struct::{ChatReqInput, LeadRecord, canned_completion};
use crate::policy;
use crate::relay_state::RelayState;
use actix_cors::Cors;
use actix_web::{HttpRequest, HttpResponse, HttpServer, get, post, web};
use serde_json::json;
use std::io::Write;

#[get("/")]
pub async fn home(_req: HttpRequest) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("✅ LC's AI Chatbot Backend is running!")
}

#[post("/chat")]
pub async fn chat(
    _req: HttpRequest,
    req: web::Json<ChatReqInput>,
    app_state: web::Data<RelayState>,
) -> Result<HttpResponse, actix_web::Error> {
    let messages = &req.messages;
    if messages.is_empty() {
        return Ok(HttpResponse::BadRequest().json(json!({"error": "No messages provided."})));
    }

    if policy::any_misuse(messages) {
        return Ok(HttpResponse::Ok().json(canned_completion(policy::REFUSAL_MESSAGE)));
    }

    // Only the last message is inspected for a lead; the outcome never
    // changes the response.
    if let Some(last) = messages.last() {
        if policy::looks_like_email(&last.content) {
            let lead = LeadRecord::from_email(last.content.clone());
            match app_state.submit_lead(&lead).await {
                Ok(()) => log::info!("Lead saved to CRM: {}", lead.email),
                Err(e) => log::warn!("Lead capture failed: {:#}", e),
            }
        }
    }

    match app_state.complete(messages).await {
        Ok(body) => Ok(HttpResponse::Ok()
            .content_type("application/json")
            .body(body)),
        Err(e) => {
            log::error!("Completion call failed: {:#}", e);
            Ok(HttpResponse::InternalServerError()
                .json(canned_completion(policy::FALLBACK_MESSAGE)))
        }
    }
}

pub fn app_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home).service(chat);
}

fn cors_layer(allowed_origins: &[String]) -> Cors {
    let mut cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600);
    for origin in allowed_origins {
        cors = cors.allowed_origin(origin);
    }
    cors
}

// default level is info
pub fn init_logging() {
    env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, log::LevelFilter::Info)
        .init();
}

pub async fn startup(relay_state: RelayState) -> std::io::Result<()> {
    let bind_addr = (relay_state.config.host.clone(), relay_state.config.port);
    let allowed_origins = relay_state.config.cors_allowed_origins.clone();
    let app_state = web::Data::new(relay_state);

    log::info!("Starting server at {}:{}", bind_addr.0, bind_addr.1);

    HttpServer::new(move || {
        actix_web::App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(cors_layer(&allowed_origins))
            .app_data(app_state.clone())
            .configure(app_routes)
    })
    .bind(bind_addr)?
    .run()
    .await
}
