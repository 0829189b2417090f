#[tokio::main]
async fn main() -> anyhow::Result<()> {
    movies_api_lib::run().await
}
