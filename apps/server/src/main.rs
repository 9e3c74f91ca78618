#[tokio::main]
async fn main() -> anyhow::Result<()> {
    quiz_server::run().await
}
