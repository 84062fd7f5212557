use actix_web::{App, HttpResponse, HttpServer, web};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Mock upstream endpoint bound to an ephemeral port. Records every JSON
/// body it receives and answers with a fixed status and body, standing in
/// for the completion provider or the lead sink.
pub struct MockUpstream {
    pub url: String,
    requests: Arc<Mutex<Vec<Value>>>,
    handle: actix_web::dev::ServerHandle,
}

impl MockUpstream {
    pub async fn start(status: u16, body: Value) -> Self {
        let requests: Arc<Mutex<Vec<Value>>> = Arc::new(Mutex::new(Vec::new()));
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());

        let recorded = requests.clone();
        let server = HttpServer::new(move || {
            let recorded = recorded.clone();
            let body = body.clone();
            App::new().default_service(web::to(move |payload: web::Json<Value>| {
                let recorded = recorded.clone();
                let body = body.clone();
                async move {
                    recorded.lock().unwrap().push(payload.into_inner());
                    HttpResponse::build(actix_web::http::StatusCode::from_u16(status).unwrap())
                        .json(body)
                }
            }))
        })
        .workers(1)
        .listen(listener)
        .unwrap()
        .run();

        let handle = server.handle();
        let _ = actix_web::rt::spawn(server);

        Self {
            url,
            requests,
            handle,
        }
    }

    pub fn received(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }

    #[allow(dead_code)]
    pub async fn stop(&self) {
        self.handle.stop(false).await;
    }
}
