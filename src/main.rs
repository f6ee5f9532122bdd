use actix_web::{App, HttpServer, middleware, web};

use roomprompt::config::AppConfig;
use roomprompt::server::{self, RoomCalendar};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = AppConfig::from_env();
    let calendar = web::Data::new(RoomCalendar::seeded());
    let session_key = config.session_key.clone();

    log::info!("Starting server at http://{}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(server::session_middleware(session_key.clone()))
            .wrap(middleware::Logger::default())
            .app_data(calendar.clone())
            .configure(server::configure)
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
