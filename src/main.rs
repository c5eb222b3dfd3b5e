mod errors;
mod form;
mod handlers;
mod initialization;
mod logging;
mod manager_forecast;
mod manager_openweather;

use actix_web::{web, App, HttpServer};
use log::info;
use crate::errors::UnrecoverableError;
use crate::initialization::config;
use crate::manager_openweather::OpenWeather;

struct AppState {
    open_weather: OpenWeather,
}

#[actix_web::main]
async fn main() -> Result<(), UnrecoverableError> {
    let config = config()?;

    let open_weather = OpenWeather::new(&config.open_weather.base_url, &config.open_weather.api_key)?;
    let state = web::Data::new(AppState { open_weather });

    info!("starting web server on {}:{}", config.web_server.bind_address, config.web_server.bind_port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(handlers::index)
            .service(handlers::search)
            .service(handlers::about)
    })
        .bind((config.web_server.bind_address, config.web_server.bind_port))?
        .run()
        .await?;

    Ok(())
}
