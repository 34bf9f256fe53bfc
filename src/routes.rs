use axum::{
    Form, Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};
use sea_orm::DatabaseConnection;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::errors::ApiError;
use crate::models::{Customer, PageParams, TableSchema};
use crate::openapi::ApiDoc;
use crate::pagination::{FIRST_CURSOR, Page, cursor_offset, populate_page};
use crate::traits::CRUDResource;

/// Mount point of every customer route.
pub const BASE_PATH: &str = "/customers/v1";

/// Builds the customer API with request tracing.
pub fn router(db: DatabaseConnection) -> Router {
    Router::new()
        .route(BASE_PATH, get(get_page).post(create_from_form))
        .route(&format!("{BASE_PATH}/all"), get(get_all))
        .route(&format!("{BASE_PATH}/schema"), get(get_schema))
        .route(&format!("{BASE_PATH}/openapi.json"), get(get_openapi))
        .route(&format!("{BASE_PATH}/json"), post(create_from_json))
        .route(
            &format!("{BASE_PATH}/{{id}}"),
            get(get_one).put(update_from_form).delete(delete_one),
        )
        .route(&format!("{BASE_PATH}/{{id}}/json"), post(update_from_json))
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

#[utoipa::path(
    get,
    path = "/customers/v1/all",
    responses(
        (status = 200, description = "Every customer, in insertion order", body = [Customer]),
        (status = 500, description = "Internal Server Error")
    ),
    tag = "customers"
)]
#[tracing::instrument(skip(db))]
pub async fn get_all(
    State(db): State<DatabaseConnection>,
) -> Result<Json<Vec<Customer>>, ApiError> {
    tracing::debug!("get all customers");
    Ok(Json(Customer::get_all(&db).await?))
}

#[utoipa::path(
    get,
    path = "/customers/v1",
    params(PageParams),
    responses(
        (status = 200, description = "One page of customers", body = Page<Customer>),
        (status = 400, description = "Cursor key is not an offset"),
        (status = 500, description = "Internal Server Error")
    ),
    tag = "customers"
)]
#[tracing::instrument(skip(db))]
pub async fn get_page(
    State(db): State<DatabaseConnection>,
    Query(params): Query<PageParams>,
) -> Result<Json<Page<Customer>>, ApiError> {
    let cursor_key = params.cursorkey.as_deref().unwrap_or(FIRST_CURSOR);
    let page_size = params.page_size();
    tracing::debug!(page_size, cursor_key, "get page");

    let offset = cursor_offset(cursor_key)?;
    let items = Customer::get_page(&db, offset, page_size).await?;
    let conn = &db;
    let page = populate_page(items, page_size, cursor_key, None, || async move {
        Customer::total_count(conn).await.map_err(ApiError::from)
    })
    .await?;
    Ok(Json(page))
}

#[utoipa::path(
    get,
    path = "/customers/v1/{id}",
    params(("id" = i64, Path, description = "Customer id")),
    responses(
        (status = 200, description = "The requested customer", body = Customer),
        (status = 404, description = "Customer not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal Server Error")
    ),
    tag = "customers"
)]
#[tracing::instrument(skip(db))]
pub async fn get_one(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i64>,
) -> Result<Json<Customer>, ApiError> {
    tracing::debug!(id, "get customer detail");
    Customer::get_one(&db, id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(Customer::RESOURCE_NAME_SINGULAR, id))
}

#[utoipa::path(
    post,
    path = "/customers/v1",
    request_body(content = Customer, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "The submitted customer", body = Customer),
        (status = 500, description = "Internal Server Error")
    ),
    tag = "customers"
)]
#[tracing::instrument(skip(db))]
pub async fn create_from_form(
    State(db): State<DatabaseConnection>,
    Form(customer): Form<Customer>,
) -> Result<Json<Customer>, ApiError> {
    tracing::debug!("create new customer from form");
    Ok(Json(Customer::create(&db, customer).await?))
}

#[utoipa::path(
    post,
    path = "/customers/v1/json",
    request_body = Customer,
    responses(
        (status = 200, description = "The submitted customer", body = Customer),
        (status = 500, description = "Internal Server Error")
    ),
    tag = "customers"
)]
#[tracing::instrument(skip(db))]
pub async fn create_from_json(
    State(db): State<DatabaseConnection>,
    Json(customer): Json<Customer>,
) -> Result<Json<Customer>, ApiError> {
    tracing::debug!("create new customer from json");
    Ok(Json(Customer::create(&db, customer).await?))
}

#[utoipa::path(
    put,
    path = "/customers/v1/{id}",
    params(("id" = i64, Path, description = "Customer id")),
    request_body(content = Customer, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "The updated customer", body = Customer),
        (status = 404, description = "Customer not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal Server Error")
    ),
    tag = "customers"
)]
#[tracing::instrument(skip(db))]
pub async fn update_from_form(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i64>,
    Form(customer): Form<Customer>,
) -> Result<Json<Customer>, ApiError> {
    tracing::debug!(id, "update customer from form");
    update(&db, id, customer).await
}

#[utoipa::path(
    post,
    path = "/customers/v1/{id}/json",
    params(("id" = i64, Path, description = "Customer id")),
    request_body = Customer,
    responses(
        (status = 200, description = "The updated customer", body = Customer),
        (status = 404, description = "Customer not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal Server Error")
    ),
    tag = "customers"
)]
#[tracing::instrument(skip(db))]
pub async fn update_from_json(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i64>,
    Json(customer): Json<Customer>,
) -> Result<Json<Customer>, ApiError> {
    tracing::debug!(id, "update customer from json");
    update(&db, id, customer).await
}

async fn update(
    db: &DatabaseConnection,
    id: i64,
    customer: Customer,
) -> Result<Json<Customer>, ApiError> {
    Customer::update(db, id, customer)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(Customer::RESOURCE_NAME_SINGULAR, id))
}

#[utoipa::path(
    delete,
    path = "/customers/v1/{id}",
    params(("id" = i64, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Id of the deleted customer", body = i64),
        (status = 404, description = "Customer not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal Server Error")
    ),
    tag = "customers"
)]
#[tracing::instrument(skip(db))]
pub async fn delete_one(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i64>,
) -> Result<Json<i64>, ApiError> {
    tracing::debug!(id, "delete customer");
    Customer::delete(&db, id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(Customer::RESOURCE_NAME_SINGULAR, id))
}

/// Static description of the `customer` table. Not read from the database.
#[utoipa::path(
    get,
    path = "/customers/v1/schema",
    responses((status = 200, description = "Table metadata", body = TableSchema)),
    tag = "customers"
)]
pub async fn get_schema() -> Json<TableSchema> {
    Json(TableSchema::customer())
}

pub async fn get_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
