use hotelsite::configuration::get_configuration;
use hotelsite::db::Storage;
use hotelsite::startup::run;
use hotelsite::telemetry::{get_subscriber, init_subscriber};
use std::io::{Error, ErrorKind};
use std::net::TcpListener;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("hotelsite".into(), "info".into());
    init_subscriber(subscriber);

    let settings = get_configuration().expect("Failed to read configuration.");

    tracing::info!(
        backend = ?settings.database.backend,
        db_name = %settings.database.database_name,
        "Connecting to the document store"
    );

    let storage = Storage::connect(&settings.database)
        .await
        .map_err(|err| Error::new(ErrorKind::Other, err))?;

    let address = format!("{}:{}", settings.app_host, settings.app_port);
    tracing::info!("Start server at {:?}", &address);
    let listener = TcpListener::bind(&address)?;

    run(listener, storage, settings).await?.await
}
