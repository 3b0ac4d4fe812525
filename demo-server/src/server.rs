use axum::Router;
use std::net::SocketAddr;
use tokio::task::JoinHandle;

pub(crate) fn spawn_http_server(port: u16, app: Router) -> JoinHandle<std::io::Result<()>> {
    tokio::spawn(async move {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        tracing::info!("Server listening on port: {}", port);
        let result = axum_server::bind(addr)
            .serve(app.into_make_service())
            .await;
        if let Err(e) = &result {
            tracing::error!("HTTP server on {} stopped: {}", addr, e);
        }
        result
    })
}
