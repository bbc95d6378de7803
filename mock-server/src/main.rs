use bytes::Bytes;
use mock_server::{MockServer, Reply, DEFAULT_RESPONSE};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    println!("listening on {addr}");
    let server = MockServer::new(Reply::Payload(Bytes::from_static(DEFAULT_RESPONSE)));
    server.run(listener).await
}
