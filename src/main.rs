#[tokio::main]
async fn main() {
    eventdesk::run().await;
}
