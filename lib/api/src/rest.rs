use crate::state::AppState;
use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use cinex_core::{month_from_name, weekday_from_name};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
struct StatusResponse {
    service: &'static str,
    version: &'static str,
    movies: usize,
    vocabulary: usize,
}

#[derive(Serialize)]
struct MonthCountResponse {
    month: String,
    count: u64,
}

#[derive(Serialize)]
struct WeekdayCountResponse {
    weekday: String,
    count: u64,
}

#[derive(Serialize)]
struct ReloadResponse {
    result: bool,
    movies: usize,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(state: Arc<AppState>, port: u16) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(state.clone()))
                .route("/status", web::get().to(status))
                .route("/releases/month/{month}", web::get().to(releases_by_month))
                .route(
                    "/releases/weekday/{weekday}",
                    web::get().to(releases_by_weekday),
                )
                .route("/movies/{title}/score", web::get().to(movie_score))
                .route("/movies/{title}/votes", web::get().to(movie_votes))
                .route(
                    "/movies/{title}/recommendations",
                    web::get().to(movie_recommendations),
                )
                .route("/actors/{name}", web::get().to(actor_summary))
                .route("/directors/{name}", web::get().to(director_summary))
                .route("/reload", web::post().to(reload))
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

async fn status(state: web::Data<Arc<AppState>>) -> ActixResult<HttpResponse> {
    let engine = state.engine();
    Ok(HttpResponse::Ok().json(StatusResponse {
        service: "cinex",
        version: env!("CARGO_PKG_VERSION"),
        movies: engine.catalog().len(),
        vocabulary: engine.recommender().vocabulary().len(),
    }))
}

async fn releases_by_month(
    state: web::Data<Arc<AppState>>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let name = path.into_inner();

    let Some(month) = month_from_name(&name) else {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": format!("unknown month name: {}", name)
        })));
    };

    let count = state
        .engine()
        .catalog()
        .releases_in_month(month)
        .unwrap_or_default();
    Ok(HttpResponse::Ok().json(MonthCountResponse {
        month: name.to_lowercase(),
        count,
    }))
}

async fn releases_by_weekday(
    state: web::Data<Arc<AppState>>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let name = path.into_inner();

    let Some(weekday) = weekday_from_name(&name) else {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": format!("unknown weekday name: {}", name)
        })));
    };

    let count = state.engine().catalog().releases_on_weekday(weekday);
    Ok(HttpResponse::Ok().json(WeekdayCountResponse {
        weekday: name.to_lowercase(),
        count,
    }))
}

async fn movie_score(
    state: web::Data<Arc<AppState>>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let title = path.into_inner();

    match state.engine().catalog().score_report(&title) {
        Some(report) => Ok(HttpResponse::Ok().json(report)),
        None => Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "Movie not found"
        }))),
    }
}

async fn movie_votes(
    state: web::Data<Arc<AppState>>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let title = path.into_inner();

    match state.engine().catalog().votes_report(&title) {
        Some(report) => Ok(HttpResponse::Ok().json(report)),
        None => Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "Movie not found"
        }))),
    }
}

/// Always 200: a miss is a structured `{found: false, titles: []}` body,
/// never an HTTP error.
async fn movie_recommendations(
    state: web::Data<Arc<AppState>>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let title = path.into_inner();
    let recommendation = state.engine().recommend(&title);
    Ok(HttpResponse::Ok().json(recommendation))
}

async fn actor_summary(
    state: web::Data<Arc<AppState>>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let name = path.into_inner();

    match state.engine().catalog().actor_report(&name) {
        Some(report) => Ok(HttpResponse::Ok().json(report)),
        None => Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "Actor not found"
        }))),
    }
}

async fn director_summary(
    state: web::Data<Arc<AppState>>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let name = path.into_inner();

    match state.engine().catalog().director_report(&name) {
        Some(report) => Ok(HttpResponse::Ok().json(report)),
        None => Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "Director not found"
        }))),
    }
}

async fn reload(state: web::Data<Arc<AppState>>) -> ActixResult<HttpResponse> {
    match state.reload() {
        Ok(movies) => Ok(HttpResponse::Ok().json(ReloadResponse {
            result: true,
            movies,
        })),
        Err(e) => Ok(HttpResponse::InternalServerError().json(serde_json::json!({
            "error": e.to_string()
        }))),
    }
}
