use dotenv::dotenv;
use tracing::{info, warn};

use webitof_crm_backend::app::app::App;
use webitof_crm_backend::util::logger::Logger;

#[tokio::main]
async fn main() {
    // Console + rolling file logging; the guards must stay alive for the
    // lifetime of the process
    let _logger = Logger::new().expect("Failed to initialize logging");

    info!("🚀 Starting Webitof CRM Backend");

    match dotenv() {
        Ok(_) => info!("Loaded .env file"),
        Err(e) => warn!("No .env file loaded: {} (using system env vars)", e),
    }

    let app = App::new().await;
    app.start().await;
}
