//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    ErrorResponse, GenerateTextRequest, GenerateTextResponse, PromptPairRequest, RecipeSummary,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::generate::create_recipes,
        super::generate::update_recipes,
    ),
    info(
        title = "Recipegen API",
        version = "0.1.0",
        description = "Generates recipes from (dish, quantity) prompt pairs with a pretrained text-generation model and stores every result.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Recipe", description = "Recipe - Batch generation and storage"),
    ),
    components(
        schemas(
            PromptPairRequest,
            GenerateTextRequest,
            RecipeSummary,
            GenerateTextResponse,
            ErrorResponse,
        )
    ),
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_both_methods() {
        let doc = ApiDoc::openapi();
        let item = doc
            .paths
            .paths
            .get("/generate-text/")
            .expect("generate-text path documented");
        assert!(item.operations.contains_key(&utoipa::openapi::PathItemType::Post));
        assert!(item.operations.contains_key(&utoipa::openapi::PathItemType::Put));
    }
}
