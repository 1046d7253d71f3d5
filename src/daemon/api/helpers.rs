use super::structs::ErrorMessage;
use taskmgr::QueryError;

use rocket::{
    catch,
    http::{Method, Status},
    response::status,
    route::{self, BoxFuture},
    serde::json::Json,
    tokio::task,
    Data, Request, Route,
};

pub(crate) type Failure = status::Custom<String>;

const GET_ONLY: [&str; 2] = ["/api/system", "/api/system-surface"];
const POST_ONLY: [&str; 2] = ["/api/process/start", "/api/process/stop"];

const METHODS: [Method; 9] = [
    Method::Get,
    Method::Put,
    Method::Post,
    Method::Delete,
    Method::Options,
    Method::Head,
    Method::Trace,
    Method::Connect,
    Method::Patch,
];

pub(crate) fn bad_request(message: &str) -> Failure { status::Custom(Status::BadRequest, message.to_string()) }

pub(crate) fn internal(message: String) -> Failure { status::Custom(Status::InternalServerError, message) }

/// Runs an OS query on the blocking pool, mapping failures to a plain-text 500.
pub(crate) async fn blocking<T, F>(query: F) -> Result<T, Failure>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, QueryError> + Send + 'static,
{
    match task::spawn_blocking(query).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => {
            log::warn!("[api] query failed (err={err})");
            Err(internal(err.to_string()))
        }
        Err(err) => {
            log::error!("[api] query task aborted (err={err})");
            Err(internal(err.to_string()))
        }
    }
}

fn method_not_allowed<'r>(req: &'r Request<'_>, _: Data<'r>) -> BoxFuture<'r> {
    route::Outcome::from(req, (Status::MethodNotAllowed, "Method not allowed")).pin()
}

/// Answers 405 for every method an API path does not serve.
pub(crate) fn method_guards() -> Vec<Route> {
    let get_only = GET_ONLY.iter().flat_map(|path| METHODS.into_iter().filter(|method| !matches!(method, Method::Get | Method::Head)).map(|method| (method, *path)));
    let post_only = POST_ONLY.iter().flat_map(|path| METHODS.into_iter().filter(|method| *method != Method::Post).map(|method| (method, *path)));

    get_only.chain(post_only).map(|(method, path)| Route::new(method, path, method_not_allowed)).collect()
}

#[catch(default)]
pub(crate) fn default_catcher(status: Status, _: &Request) -> status::Custom<Json<ErrorMessage>> {
    status::Custom(
        status,
        Json(ErrorMessage {
            code: status.code,
            message: status.reason_lossy().to_string(),
        }),
    )
}
