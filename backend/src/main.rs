mod config;
mod errors;
mod server;
mod services;
mod static_files;
mod store;

use crate::config::Config;
use crate::store::{EmployeeStore, SqliteEmployeeStore};
use actix_web::HttpServer;
use clap::Parser;
use env_logger::Env;
use log::{error, info};
use std::io;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::parse();

    // One connection for the whole process; no retry if it cannot be opened.
    let store: Arc<dyn EmployeeStore> = match SqliteEmployeeStore::open(&config.database_path) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            error!("Error connecting to the database: {}", e);
            return Err(io::Error::other(e));
        }
    };

    let url = config.url();
    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url) {
                error!("Could not open browser: {}", e);
            }
        });
    }

    info!("Server running at {}", url);

    HttpServer::new(move || server::build_app(store.clone()))
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
