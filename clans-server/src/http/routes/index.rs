//! Root service descriptor

use axum::{routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
pub struct Endpoints {
    pub create_clan: &'static str,
    pub list_clans: &'static str,
    pub get_clan: &'static str,
    pub delete_clan: &'static str,
}

#[derive(Serialize)]
pub struct ServiceDescriptor {
    pub service: &'static str,
    pub endpoints: Endpoints,
}

/// GET / - describe the service and its endpoints
async fn index() -> Json<ServiceDescriptor> {
    Json(ServiceDescriptor {
        service: "Clans API",
        endpoints: Endpoints {
            create_clan: "POST /clans",
            list_clans: "GET /clans",
            get_clan: "GET /clans/<uuid:id>",
            delete_clan: "DELETE /clans/<uuid:id>",
        },
    })
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(index))
}
