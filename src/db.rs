use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr, Statement};

/// Opens the connection pool shared by every request.
///
/// # Errors
///
/// Returns the driver error when the database cannot be reached.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;
    tracing::info!(backend = ?db.get_database_backend(), "connected to database");
    Ok(db)
}

/// Creates the `customer` table when it does not exist yet. Existing tables
/// are left untouched.
///
/// # Errors
///
/// Returns the driver error when the statement fails.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    db.execute(Statement::from_string(backend, create_table_sql(backend).to_owned()))
        .await?;
    Ok(())
}

fn create_table_sql(backend: DbBackend) -> &'static str {
    match backend {
        DbBackend::Sqlite => {
            r#"CREATE TABLE IF NOT EXISTS customer (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            firstname TEXT,
            lastname TEXT,
            gender TEXT,
            email TEXT,
            address TEXT,
            phone TEXT,
            "createdDate" TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        );"#
        }
        DbBackend::Postgres => {
            r#"CREATE TABLE IF NOT EXISTS customer (
            id BIGSERIAL PRIMARY KEY,
            firstname VARCHAR(255),
            lastname VARCHAR(255),
            gender VARCHAR(255),
            email VARCHAR(255),
            address VARCHAR(255),
            phone VARCHAR(255),
            "createdDate" TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        );"#
        }
        DbBackend::MySql => {
            r"CREATE TABLE IF NOT EXISTS customer (
            id BIGINT PRIMARY KEY AUTO_INCREMENT,
            firstname VARCHAR(255),
            lastname VARCHAR(255),
            gender VARCHAR(255),
            email VARCHAR(255),
            address VARCHAR(255),
            phone VARCHAR(255),
            createdDate TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        );"
        }
    }
}
