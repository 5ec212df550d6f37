use directory_client::ClientConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let config = ClientConfig::from_env();
    directory_client::tui::run(config).await
}
