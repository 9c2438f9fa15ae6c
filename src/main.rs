#[tokio::main]
async fn main() {
    voting_backend::start_server().await;
}
