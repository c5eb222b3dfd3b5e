use actix_web::{get, post, web, HttpResponse, Responder};
use chrono::Utc;
use log::{error, info, warn};
use serde::Serialize;
use crate::AppState;
use crate::errors::DisplayError;
use crate::form::SearchForm;
use crate::manager_forecast::gather_results;
use crate::manager_forecast::models::DisplayResult;

const INDEX_PAGE: &str = include_str!("../static/index.html");
const ABOUT_PAGE: &str = include_str!("../static/about.html");

/// View model handed over for rendering, either a summary or an error
#[derive(Serialize, Debug)]
#[serde(rename_all = "lowercase")]
enum Page {
    Weather(DisplayResult),
    Error(DisplayError),
}

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().content_type("text/html; charset=utf-8").body(INDEX_PAGE)
}

#[get("/about")]
pub async fn about() -> impl Responder {
    HttpResponse::Ok().content_type("text/html; charset=utf-8").body(ABOUT_PAGE)
}

#[post("/")]
pub async fn search(body: web::Bytes, data: web::Data<AppState>) -> impl Responder {
    let form = match SearchForm::from_body(&body) {
        Ok(form) => form,
        Err(e) => {
            warn!("rejected search form: {}", e);
            return HttpResponse::Ok().json(Page::Error(DisplayError::from(&e)));
        }
    };
    info!("{:?}", form);

    let page = match data.open_weather.get_forecast(&form.location, &form.format).await {
        Ok(forecast) => match gather_results(&form.hours, &forecast, Utc::now()) {
            Ok(result) => Page::Weather(result),
            Err(e) => {
                error!("failed to summarize forecast: {}", e);
                Page::Error(DisplayError::from(&e))
            }
        },
        Err(e) => {
            error!("failed to get forecast: {}", e);
            Page::Error(DisplayError::from(&e))
        }
    };

    HttpResponse::Ok().json(page)
}
