use skillboard::server::{config::Config, model::app::AppState, router, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let store = match startup::build_store(&config) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to initialize store: {}", e);
            std::process::exit(1);
        }
    };

    let router = router::routes().with_state(AppState {
        store,
        demo_user_id: config.demo_user_id,
    });

    if let Err(e) = startup::serve(&config, router).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
