use utoipa::OpenApi;

use crate::models::{Customer, TableSchema};
use crate::routes;

/// OpenAPI document of the customer routes, served at
/// `/customers/v1/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(title = "Customer API", description = "CRUD over the customer table"),
    paths(
        routes::get_all,
        routes::get_page,
        routes::get_one,
        routes::create_from_form,
        routes::create_from_json,
        routes::update_from_form,
        routes::update_from_json,
        routes::delete_one,
        routes::get_schema,
    ),
    components(schemas(Customer, TableSchema)),
    tags((name = "customers", description = "Customer management"))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_path() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for expected in [
            "/customers/v1",
            "/customers/v1/all",
            "/customers/v1/json",
            "/customers/v1/schema",
            "/customers/v1/{id}",
            "/customers/v1/{id}/json",
        ] {
            assert!(
                doc.paths.paths.contains_key(expected),
                "missing {expected} in {paths:?}"
            );
        }
    }

    #[test]
    fn test_component_schemas_are_registered() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.expect("components").schemas;
        assert!(schemas.contains_key("Customer"));
        assert!(schemas.contains_key("TableSchema"));
    }
}
