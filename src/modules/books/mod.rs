pub mod error;
pub mod gateway;
pub mod models;
pub mod routes;
pub mod service;
pub mod store;

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use bookshelf_kernel::{settings::Settings, InitCtx, Module};

use gateway::{HttpUpcomingBooks, UpcomingBooks};
use service::CatalogService;
use store::BookStore;

/// Books module: the catalog, its inventory rules and upcoming titles
pub struct BooksModule {
    service: CatalogService,
}

impl BooksModule {
    pub fn new(service: CatalogService) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            upstream = %ctx.settings.third_party.url,
            "books module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        routes::router(self.service.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(openapi_fragment())
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            books = self.service.book_count(),
            "books module started"
        );
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module stopped");
        Ok(())
    }
}

/// Create the books module with an empty store and the configured provider
pub fn create_module(settings: &Settings) -> Arc<dyn Module> {
    let upcoming: Arc<dyn UpcomingBooks> = Arc::new(HttpUpcomingBooks::new(&settings.third_party));
    create_module_with(upcoming)
}

/// Create the books module around a caller-supplied provider
pub fn create_module_with(upcoming: Arc<dyn UpcomingBooks>) -> Arc<dyn Module> {
    let service = CatalogService::new(Arc::new(BookStore::new()), upcoming);
    Arc::new(BooksModule::new(service))
}

fn error_response(description: &str) -> serde_json::Value {
    serde_json::json!({
        "description": description,
        "content": {
            "application/json": {
                "schema": { "$ref": "#/components/schemas/ErrorResponse" }
            }
        }
    })
}

fn openapi_fragment() -> serde_json::Value {
    serde_json::json!({
        "paths": {
            "/": {
                "get": {
                    "summary": "List books",
                    "tags": ["Books"],
                    "responses": {
                        "200": {
                            "description": "Every book in insertion order",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "array",
                                        "items": { "$ref": "#/components/schemas/Book" }
                                    }
                                }
                            }
                        }
                    }
                },
                "post": {
                    "summary": "Create a book",
                    "tags": ["Books"],
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/CreateBook" }
                            }
                        }
                    },
                    "responses": {
                        "201": {
                            "description": "Created book",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/Book" }
                                }
                            }
                        },
                        "400": error_response("Invalid book payload"),
                        "409": error_response("A book with this name already exists")
                    }
                }
            },
            "/upcoming": {
                "get": {
                    "summary": "Upcoming book titles",
                    "tags": ["Books"],
                    "responses": {
                        "200": {
                            "description": "Titles from the upstream provider",
                            "content": {
                                "application/json": {
                                    "schema": { "type": "array", "items": { "type": "string" } }
                                }
                            }
                        },
                        "502": error_response("Upstream provider failed")
                    }
                }
            },
            "/health": {
                "get": {
                    "summary": "Books health check",
                    "tags": ["Books"],
                    "responses": {
                        "200": {
                            "description": "OK",
                            "content": {
                                "text/plain": { "schema": { "type": "string" } }
                            }
                        }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Book": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "integer", "format": "int64", "minimum": 1 },
                        "name": { "type": "string" },
                        "author": { "type": "string" },
                        "genre": { "type": "string" },
                        "quantity": { "type": "integer", "minimum": 0 },
                        "totalAvailable": { "type": "integer", "minimum": 0 }
                    },
                    "required": ["id", "name", "author", "genre", "quantity", "totalAvailable"]
                },
                "CreateBook": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string", "minLength": 1 },
                        "author": { "type": "string", "minLength": 1 },
                        "genre": { "type": "string", "minLength": 1 },
                        "quantity": { "type": "integer", "minimum": 0 },
                        "totalAvailable": {
                            "type": "integer",
                            "minimum": 0,
                            "description": "Must not exceed quantity"
                        }
                    },
                    "required": ["name", "author", "genre", "quantity", "totalAvailable"]
                }
            }
        }
    })
}
