use news_core::{ConfigSection, DatabaseConfig, NewsConfig, ServerConfig};
use news_data_sqlx::PgNewsStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    news_core::init_tracing();

    let config = NewsConfig::load("dev")?;
    let server = ServerConfig::from_config(&config)?;
    let database = DatabaseConfig::from_config(&config)?;

    let pool = news_data_sqlx::connect(&database).await?;
    if database.migrate {
        news_data_sqlx::migrate(&pool).await?;
    }

    let app = news_api::app(PgNewsStore::new(pool));
    news_core::serve(app, &server.addr).await
}
