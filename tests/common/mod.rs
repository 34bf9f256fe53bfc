#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{Request, StatusCode};
use customer_api::{CRUDResource, Customer};
use sea_orm::{Database, DatabaseConnection, DbErr};
use sea_orm_migration::prelude::*;
use tower::ServiceExt;

pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect("sqlite::memory:").await?;

    // Run migrations
    Migrator::up(&db, None).await?;

    Ok(db)
}

pub fn setup_test_app(db: DatabaseConnection) -> Router {
    customer_api::router(db)
}

/// Inserts `n` customers named `First{i}`/`Last{i}`, ids 1..=n.
pub async fn seed_customers(db: &DatabaseConnection, n: usize) {
    for i in 1..=n {
        let customer = Customer {
            first_name: Some(format!("First{i}")),
            last_name: Some(format!("Last{i}")),
            gender: Some(if i % 2 == 0 { "F" } else { "M" }.to_string()),
            email: Some(format!("customer{i}@example.com")),
            address: Some(format!("{i} Main Street")),
            phone: Some(format!("555-{i:04}")),
            ..Default::default()
        };
        Customer::create(db, customer)
            .await
            .expect("Failed to seed customer");
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Bytes) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn form_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(CreateCustomerTable)]
    }
}

pub struct CreateCustomerTable;

impl MigrationName for CreateCustomerTable {
    fn name(&self) -> &'static str {
        "m20240101_000001_create_customer_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for CreateCustomerTable {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let table = Table::create()
            .table(CustomerTable)
            .if_not_exists()
            .col(
                ColumnDef::new(CustomerColumn::Id)
                    .integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(CustomerColumn::Firstname).string())
            .col(ColumnDef::new(CustomerColumn::Lastname).string())
            .col(ColumnDef::new(CustomerColumn::Gender).string())
            .col(ColumnDef::new(CustomerColumn::Email).string())
            .col(ColumnDef::new(CustomerColumn::Address).string())
            .col(ColumnDef::new(CustomerColumn::Phone).string())
            .col(
                ColumnDef::new(CustomerColumn::CreatedDate)
                    .timestamp()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .to_owned();

        manager.create_table(table).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CustomerTable).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(Debug)]
pub struct CustomerTable;

impl Iden for CustomerTable {
    fn unquoted(&self, s: &mut dyn std::fmt::Write) {
        write!(s, "customer").unwrap();
    }
}

#[derive(Debug)]
pub enum CustomerColumn {
    Id,
    Firstname,
    Lastname,
    Gender,
    Email,
    Address,
    Phone,
    CreatedDate,
}

impl Iden for CustomerColumn {
    fn unquoted(&self, s: &mut dyn std::fmt::Write) {
        write!(
            s,
            "{}",
            match self {
                Self::Id => "id",
                Self::Firstname => "firstname",
                Self::Lastname => "lastname",
                Self::Gender => "gender",
                Self::Email => "email",
                Self::Address => "address",
                Self::Phone => "phone",
                Self::CreatedDate => "createdDate",
            }
        )
        .unwrap();
    }
}
