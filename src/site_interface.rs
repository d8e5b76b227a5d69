// Site interface - HTTP surface for public pages, SEO files and the admin API

use axum::{
    extract::{Path, State},
    http::{header, HeaderName, HeaderValue, StatusCode},
    middleware,
    response::{IntoResponse, Json, Redirect, Response},
    routing::get,
    Router,
};
use serde_json::Value;
use tower_http::services::ServeDir;

use crate::{
    app_state::AppState,
    core::{normalize_locale, page_path, Locale, Section},
    error::{AppError, AppResult},
    infrastructure::middleware::admin_auth_middleware,
    services::{admin_service::parse_collection, PageView},
};

// Public pages

pub async fn root_redirect_handler() -> Redirect {
    Redirect::permanent(&page_path(Locale::DEFAULT, Section::Home, None))
}

pub async fn home_handler(
    State(state): State<AppState>,
    Path(locale): Path<String>,
) -> Result<Response, AppError> {
    let locale = normalize_locale(&locale);
    render_page(&state, locale, Section::Home, state.pages.home(locale).await)
}

pub async fn listing_handler(
    State(state): State<AppState>,
    Path((locale, segment)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let locale = normalize_locale(&locale);
    let Some(section) = Section::from_segment(&segment) else {
        return Ok(not_found_page(&state, locale, Section::Home, "Unknown section"));
    };
    render_page(&state, locale, section, state.pages.listing(locale, section).await)
}

pub async fn detail_handler(
    State(state): State<AppState>,
    Path((locale, segment, slug)): Path<(String, String, String)>,
) -> Result<Response, AppError> {
    let locale = normalize_locale(&locale);
    let Some(section) = Section::from_segment(&segment) else {
        return Ok(not_found_page(&state, locale, Section::Home, "Unknown section"));
    };
    render_page(&state, locale, section, state.pages.detail(locale, section, &slug).await)
}

pub async fn sitemap_handler(State(state): State<AppState>) -> AppResult<Response> {
    let xml = state.pages.sitemap_xml().await?;
    Ok(([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], xml).into_response())
}

pub async fn robots_handler(State(state): State<AppState>) -> Response {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        state.pages.robots_txt(),
    )
        .into_response()
}

/// Missing entities still render a page, with indexing disabled both in the
/// metadata and in the response headers.
fn render_page(
    state: &AppState,
    locale: Locale,
    section: Section,
    result: AppResult<PageView>,
) -> Result<Response, AppError> {
    match result {
        Ok(view) => Ok(Json(view).into_response()),
        Err(AppError::NotFound(message)) => Ok(not_found_page(state, locale, section, &message)),
        Err(err) => Err(err),
    }
}

fn not_found_page(state: &AppState, locale: Locale, section: Section, message: &str) -> Response {
    let view = state.pages.not_found_view(locale, section, message);
    (
        StatusCode::NOT_FOUND,
        [(
            HeaderName::from_static("x-robots-tag"),
            HeaderValue::from_static("noindex, nofollow"),
        )],
        Json(view),
    )
        .into_response()
}

// Admin API

pub async fn get_settings_handler(State(state): State<AppState>) -> AppResult<Json<Value>> {
    Ok(Json(state.admin.settings().await?))
}

pub async fn save_settings_handler(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<Json<Value>> {
    Ok(Json(state.admin.save_settings(body).await?))
}

pub async fn list_categories_handler(State(state): State<AppState>) -> AppResult<Json<Value>> {
    Ok(Json(state.admin.categories().await?))
}

pub async fn create_category_handler(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let created = state.admin.create_category(body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_content_handler(
    State(state): State<AppState>,
    Path(collection): Path<String>,
) -> AppResult<Json<Value>> {
    let kind = parse_collection(&collection)?;
    Ok(Json(state.admin.list(kind).await?))
}

pub async fn create_content_handler(
    State(state): State<AppState>,
    Path(collection): Path<String>,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let kind = parse_collection(&collection)?;
    let created = state.admin.create(kind, body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_content_handler(
    State(state): State<AppState>,
    Path((collection, id)): Path<(String, i64)>,
) -> AppResult<Json<Value>> {
    let kind = parse_collection(&collection)?;
    Ok(Json(state.admin.get(kind, id).await?))
}

pub async fn update_content_handler(
    State(state): State<AppState>,
    Path((collection, id)): Path<(String, i64)>,
    Json(body): Json<Value>,
) -> AppResult<Json<Value>> {
    let kind = parse_collection(&collection)?;
    Ok(Json(state.admin.update(kind, id, body).await?))
}

pub async fn delete_content_handler(
    State(state): State<AppState>,
    Path((collection, id)): Path<(String, i64)>,
) -> AppResult<Json<Value>> {
    let kind = parse_collection(&collection)?;
    Ok(Json(state.admin.delete(kind, id).await?))
}

fn admin_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/settings", get(get_settings_handler).put(save_settings_handler))
        .route("/categories", get(list_categories_handler).post(create_category_handler))
        .route("/{collection}", get(list_content_handler).post(create_content_handler))
        .route(
            "/{collection}/{id}",
            get(get_content_handler)
                .put(update_content_handler)
                .delete(delete_content_handler),
        )
        .route_layer(middleware::from_fn_with_state(state, admin_auth_middleware))
}

// Create site router
pub fn create_site_router(state: AppState) -> Router {
    let uploads = ServeDir::new(&state.config.uploads.dir);
    Router::new()
        // SEO files
        .route("/sitemap.xml", get(sitemap_handler))
        .route("/robots.txt", get(robots_handler))

        // Public pages
        .route("/", get(root_redirect_handler))
        .route("/{locale}", get(home_handler))
        .route("/{locale}/{section}", get(listing_handler))
        .route("/{locale}/{section}/{slug}", get(detail_handler))

        // Admin content API
        .nest("/api/admin", admin_router(state.clone()))

        .nest_service("/uploads", uploads)
        .with_state(state)
}
