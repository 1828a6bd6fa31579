use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{error, info};

use hearth::{app, routes};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let state = match app::bootstrap(None).await {
        Ok(state) => state,
        Err(err) => {
            error!("failed to bootstrap application: {}", err);
            std::process::exit(1);
        }
    };

    info!("starting hearth server at http://127.0.0.1:8080");
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.config.clone()))
            .app_data(web::Data::new(state.pool.clone()))
            .wrap(Logger::default())
            .configure(routes::config)
    })
    .bind(("127.0.0.1", 8080))?
    .run()
    .await
}
