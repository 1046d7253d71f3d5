mod fairing;
mod helpers;
mod routes;
mod structs;

use lazy_static::lazy_static;
use prometheus::{opts, register_counter, register_histogram_vec};
use prometheus::{Counter, HistogramVec};
use rocket::{catchers, get, routes, serde::json::Json, Build, Rocket};
use taskmgr::{config::structs::Config, MemoryInfo, ProcessInfo, SharedHost, SystemStats};
use utoipa::OpenApi;

pub struct Logger;
pub struct AddCORS;

lazy_static! {
    pub static ref HTTP_COUNTER: Counter = register_counter!(opts!("http_requests_total", "Number of HTTP requests made.")).unwrap();
    pub static ref HTTP_REQ_HISTOGRAM: HistogramVec = register_histogram_vec!("http_request_duration_seconds", "The HTTP request latencies in seconds.", &["route"]).unwrap();
}

#[derive(OpenApi)]
#[openapi(
    paths(routes::system_handler, routes::surface_handler, routes::start_handler, routes::stop_handler),
    components(schemas(
        ProcessInfo,
        SystemStats,
        MemoryInfo,
        structs::ApiResponse,
        structs::ErrorMessage,
        structs::ProcessResponse,
        structs::StartProcessRequest,
    ))
)]
struct ApiDoc;

#[get("/docs.json")]
fn docs_handler() -> Json<utoipa::openapi::OpenApi> { Json(ApiDoc::openapi()) }

/// Assembles the server around `host` without binding a socket.
pub fn build(host: SharedHost, config: &Config) -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("address", &config.daemon.address))
        .merge(("port", config.daemon.port))
        .merge(("log_level", "off"));

    rocket::custom(figment)
        .manage(host)
        .attach(Logger)
        .attach(AddCORS)
        .mount("/", routes![routes::health, routes::prometheus_handler, docs_handler])
        .mount("/", routes![routes::system_handler, routes::surface_handler, routes::start_handler, routes::stop_handler])
        .mount("/", helpers::method_guards())
        .register("/", catchers![helpers::default_catcher])
}

pub async fn start(host: SharedHost, config: Config) -> Result<(), rocket::Error> {
    build(host, &config).launch().await?;
    Ok(())
}
