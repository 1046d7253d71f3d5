use rocket::{
    async_trait,
    fairing::{Fairing, Info, Kind},
    http::{ContentType, Header},
    Data, Orbit, Request, Response, Rocket,
};

#[async_trait]
impl Fairing for super::Logger {
    fn info(&self) -> Info {
        Info {
            name: "Logger Fairing",
            kind: Kind::Liftoff | Kind::Request | Kind::Response,
        }
    }

    async fn on_liftoff(&self, rocket: &Rocket<Orbit>) {
        let config = rocket.config();

        log::info!("[rocket] launched (workers={}, keep_alive={}, profile={})", config.workers, config.keep_alive, config.profile);
        log::info!("[api] server started (host={}, port={})", config.address, config.port);
    }

    async fn on_request(&self, request: &mut Request<'_>, _: &mut Data<'_>) {
        log::debug!(
            "[api] req (method={}, uri={}, content_type={})",
            request.method(),
            request.uri(),
            request.content_type().unwrap_or(&ContentType::Plain)
        );
    }

    async fn on_response<'r>(&self, request: &'r Request<'_>, response: &mut Response<'r>) {
        log::debug!("[api] {} {} (status={})", request.method(), request.uri(), response.status());
    }
}

#[async_trait]
impl Fairing for super::AddCORS {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new("Access-Control-Allow-Methods", "POST, GET, OPTIONS"));
        response.set_header(Header::new("Access-Control-Allow-Headers", "Content-Type, Accept"));
        response.set_header(Header::new("Access-Control-Expose-Headers", "Content-Type"));
    }
}
