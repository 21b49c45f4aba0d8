use crate::configuration::Settings;
use crate::db::Storage;
use crate::errors::ApiError;
use crate::middleware;
use crate::routes;
use actix_web::{dev::Server, error, web, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    storage: Storage,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let cors_settings = settings.cors.clone();
    let storage = web::Data::new(storage);
    let settings = web::Data::new(settings);

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let msg = match err {
            error::JsonPayloadError::Deserialize(err) => format!(
                "Invalid JSON at line {}, column {}: {}",
                err.line(),
                err.column(),
                err
            ),
            other => other.to_string(),
        };
        ApiError::BadRequest(msg).into()
    });
    let query_config = web::QueryConfig::default()
        .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into());

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(middleware::authentication::Manager::new())
            .wrap(middleware::cors::build(&cors_settings))
            .app_data(json_config.clone())
            .app_data(query_config.clone())
            .app_data(storage.clone())
            .app_data(settings.clone())
            .service(web::scope("/health_check").service(routes::health_check))
            .service(
                web::scope("/hotelsites")
                    .service(routes::hotelsite::get::list)
                    .service(routes::hotelsite::add::item)
                    .service(routes::hotelsite::unsupported::list)
                    .service(routes::hotelsite::delete::list)
                    .service(routes::hotelsite::get::item)
                    .service(routes::hotelsite::unsupported::item)
                    .service(routes::hotelsite::update::item)
                    .service(routes::hotelsite::delete::item)
                    .service(routes::comment::get::list)
                    .service(routes::comment::add::item)
                    .service(routes::comment::unsupported::list)
                    .service(routes::comment::delete::list)
                    .service(routes::comment::get::item)
                    .service(routes::comment::unsupported::item)
                    .service(routes::comment::update::item)
                    .service(routes::comment::delete::item),
            )
            .service(
                web::scope("/favorites")
                    .service(routes::favorite::get::item)
                    .service(routes::favorite::add::list)
                    .service(routes::favorite::unsupported::list)
                    .service(routes::favorite::delete::list)
                    .service(routes::favorite::unsupported::item)
                    .service(routes::favorite::add::item)
                    .service(routes::favorite::unsupported::item_put)
                    .service(routes::favorite::delete::item),
            )
            .default_service(web::to(routes::fallback))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
