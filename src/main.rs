use std::io;

use actix_web::{middleware::Logger, web::Data, App, HttpServer};
use log::info;

mod annotator;
mod config;
mod error;
mod page;
mod routes;
mod types;
mod utils;

use config::Config;
use page::CardSelectors;
use routes::page_routes;

#[actix_web::main]
async fn main() -> io::Result<()> {
    let config = Config::from_env();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // fail before binding if the page markers are not valid selectors
    let selectors = CardSelectors::compile(&config.markers)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    info!(
        "serving {} on {} (cards `{}`, content `{}`, display `{}`)",
        config.pages_dir.display(),
        config.bind_addr,
        config.markers.card,
        config.markers.content,
        config.markers.display
    );

    let bind_addr = config.bind_addr.clone();
    let config = Data::new(config);
    let selectors = Data::new(selectors);

    HttpServer::new(move || {
        App::new()
            .app_data(config.clone())
            .app_data(selectors.clone())
            .wrap(Logger::default())
            .configure(page_routes)
    })
    .bind(bind_addr)?
    .run()
    .await
}
