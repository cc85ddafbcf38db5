use log::info;
use std::env;
use sudoku_server::router;

#[tokio::main]
async fn main() {
    env_logger::init();
    let addr = env::args().nth(1).unwrap_or_else(|| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|err| panic!("Failed to bind {addr}: {err}"));
    info!("Server started on http://{addr}");
    axum::serve(listener, router())
        .await
        .expect("Server stopped unexpectedly");
}
