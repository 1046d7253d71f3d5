use super::{
    helpers::{bad_request, blocking, internal, Failure},
    structs::{ApiResponse, ProcessResponse, StartProcessRequest},
    HTTP_COUNTER, HTTP_REQ_HISTOGRAM,
};

use prometheus::{Encoder, TextEncoder};
use rocket::{get, post, serde::json::Json, State};
use serde_json::{json, Value};
use std::sync::Arc;
use taskmgr::{collect_stats, list_processes, list_third_party_processes, start_process, stop_process, SharedHost};

#[get("/")]
pub async fn health() -> Json<Value> { Json(json!({"healthy": true})) }

#[get("/prometheus")]
pub async fn prometheus_handler() -> Result<String, Failure> {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::<u8>::new();

    encoder.encode(&prometheus::gather(), &mut buffer).map_err(|err| internal(err.to_string()))?;
    String::from_utf8(buffer).map_err(|err| internal(err.to_string()))
}

#[utoipa::path(get, tag = "System", path = "/api/system",
    responses(
        (status = 200, description = "Every readable process with host stats", body = ApiResponse),
        (status = 405, description = "Method not allowed", body = String),
        (status = 500, description = "An OS query failed", body = String)
    )
)]
#[get("/api/system")]
pub async fn system_handler(host: &State<SharedHost>) -> Result<Json<ApiResponse>, Failure> {
    let timer = HTTP_REQ_HISTOGRAM.with_label_values(&["system"]).start_timer();
    let host = Arc::clone(host.inner());

    HTTP_COUNTER.inc();
    let response = blocking(move || {
        let processes = list_processes(&*host)?;
        let system_stats = collect_stats(&*host)?;

        Ok(ApiResponse::new(Some(system_stats), processes))
    })
    .await;

    timer.observe_duration();
    response.map(Json)
}

#[utoipa::path(get, tag = "System", path = "/api/system-surface",
    responses(
        (status = 200, description = "Third-party processes only", body = ApiResponse),
        (status = 405, description = "Method not allowed", body = String),
        (status = 500, description = "An OS query failed", body = String)
    )
)]
#[get("/api/system-surface")]
pub async fn surface_handler(host: &State<SharedHost>) -> Result<Json<ApiResponse>, Failure> {
    let timer = HTTP_REQ_HISTOGRAM.with_label_values(&["surface"]).start_timer();
    let host = Arc::clone(host.inner());

    HTTP_COUNTER.inc();
    let response = blocking(move || Ok(ApiResponse::new(None, list_third_party_processes(&*host)?))).await;

    timer.observe_duration();
    response.map(Json)
}

#[utoipa::path(post, tag = "Process", path = "/api/process/start",
    request_body(content = StartProcessRequest, content_type = "application/json"),
    responses(
        (status = 200, description = "Launch attempted, see success", body = ProcessResponse),
        (status = 400, description = "Invalid request body", body = String),
        (status = 405, description = "Method not allowed", body = String)
    )
)]
#[post("/api/process/start", data = "<body>")]
pub async fn start_handler(body: Result<Json<StartProcessRequest>, rocket::serde::json::Error<'_>>) -> Result<Json<ProcessResponse>, Failure> {
    let timer = HTTP_REQ_HISTOGRAM.with_label_values(&["start"]).start_timer();
    HTTP_COUNTER.inc();

    let request = match body {
        Ok(Json(request)) => request,
        Err(err) => {
            log::debug!("[api] rejected start body (err={err:?})");
            timer.observe_duration();
            return Err(bad_request("Invalid request body"));
        }
    };

    let response = match start_process(&request.command, &request.args) {
        Ok(pid) => ProcessResponse::started(pid),
        Err(err) => ProcessResponse::failed(err.to_string()),
    };

    timer.observe_duration();
    Ok(Json(response))
}

#[utoipa::path(post, tag = "Process", path = "/api/process/stop",
    params(("pid" = i64, Query, description = "Process id to kill")),
    responses(
        (status = 200, description = "Kill attempted, see success", body = ProcessResponse),
        (status = 400, description = "Missing or non-integer pid", body = String),
        (status = 405, description = "Method not allowed", body = String)
    )
)]
#[post("/api/process/stop?<pid>")]
pub async fn stop_handler(pid: Option<&str>) -> Result<Json<ProcessResponse>, Failure> {
    let timer = HTTP_REQ_HISTOGRAM.with_label_values(&["stop"]).start_timer();
    HTTP_COUNTER.inc();

    let Some(pid) = pid.and_then(|pid| pid.parse::<i64>().ok()) else {
        timer.observe_duration();
        return Err(bad_request("Invalid PID"));
    };

    let response = match stop_process(pid) {
        Ok(()) => ProcessResponse::stopped(pid),
        Err(err) => ProcessResponse::failed(err.to_string()),
    };

    timer.observe_duration();
    Ok(Json(response))
}
