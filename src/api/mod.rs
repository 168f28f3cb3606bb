#![forbid(unsafe_code)]

pub mod hola;
pub mod hola_query;
pub mod item;
pub mod items_create;
pub mod items_delete;
pub mod items_update;
pub mod version;

use poem_openapi::OpenApiService;

use crate::api::hola::HolaApi;
use crate::api::hola_query::HolaQueryApi;
use crate::api::items_create::CreateItemApi;
use crate::api::items_delete::RemoveItemApi;
use crate::api::items_update::UpdateItemApi;
use crate::api::version::VersionApi;

// The endpoint structs mounted under /api.
pub type DemoApis = (HolaApi, HolaQueryApi, CreateItemApi, UpdateItemApi, RemoveItemApi, VersionApi);

// ---------------------------------------------------------------------------
// demo_service:
// ---------------------------------------------------------------------------
/** Assemble the OpenAPI service from the demo endpoint structs. */
pub fn demo_service(server_url: &str) -> OpenApiService<DemoApis, ()> {
    let endpoints = (HolaApi, HolaQueryApi, CreateItemApi, UpdateItemApi, RemoveItemApi, VersionApi);
    OpenApiService::new(endpoints, "Hola Server", env!("CARGO_PKG_VERSION"))
        .server(server_url)
}

// ***************************************************************************
//                                  Tests
// ***************************************************************************
#[cfg(test)]
mod tests {
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem::Route;
    use serde_json::json;

    use super::demo_service;

    fn test_client() -> TestClient<Route> {
        let app = Route::new().nest("/api", demo_service("http://localhost:8000/api"));
        TestClient::new(app)
    }

    #[tokio::test]
    async fn hola_mundo() {
        let cli = test_client();
        let resp = cli.get("/api/v1/hola").send().await;
        resp.assert_status_is_ok();
        resp.assert_json(json!({"message": "Hola, mundo"})).await;
    }

    #[tokio::test]
    async fn hola_path_param() {
        let cli = test_client();
        let resp = cli.get("/api/v1/hola/Pepe").send().await;
        resp.assert_status_is_ok();
        resp.assert_json(json!({"message": "Hola, Pepe"})).await;
    }

    #[tokio::test]
    async fn hola_query_param() {
        let cli = test_client();
        let resp = cli.get("/api/v2/hola").query("nombre", &"Pepe").send().await;
        resp.assert_status_is_ok();
        resp.assert_json(json!({"message": "Hola, Pepe"})).await;
    }

    #[tokio::test]
    async fn hola_query_param_defaults_to_mundo() {
        let cli = test_client();
        let resp = cli.get("/api/v2/hola").send().await;
        resp.assert_status_is_ok();
        resp.assert_json(json!({"message": "Hola, mundo"})).await;
    }

    #[tokio::test]
    async fn hola_declared_default() {
        let cli = test_client();
        let resp = cli.get("/api/v3/hola").send().await;
        resp.assert_status_is_ok();
        resp.assert_json(json!({"message": "Hola, mundo"})).await;
    }

    #[tokio::test]
    async fn hola_with_saludo() {
        let cli = test_client();
        let resp = cli.get("/api/v3/hola/Pepe").query("saludo", &"qué tal").send().await;
        resp.assert_status_is_ok();
        resp.assert_json(json!({"message": "Hola, Pepe, qué tal"})).await;
    }

    #[tokio::test]
    async fn hola_without_saludo() {
        let cli = test_client();
        let resp = cli.get("/api/v3/hola/Pepe").send().await;
        resp.assert_status_is_ok();
        resp.assert_json(json!({"message": "Hola, Pepe"})).await;
    }

    #[tokio::test]
    async fn create_item_fills_defaults() {
        let cli = test_client();
        let resp = cli.post("/api/v4/items")
            .body_json(&json!({"precio": 5}))
            .send().await;
        resp.assert_status(StatusCode::CREATED);
        resp.assert_json(json!({"nombre": "Anónimo", "descripcion": null, "precio": 5})).await;
    }

    #[tokio::test]
    async fn create_item_rejects_bad_precio() {
        let cli = test_client();
        let resp = cli.post("/api/v4/items")
            .body_json(&json!({"precio": "cinco"}))
            .send().await;
        resp.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn update_item_bumps_precio() {
        let cli = test_client();
        let resp = cli.put("/api/v4/items/7")
            .body_json(&json!({"nombre": "Pepe", "descripcion": "demo", "precio": 5}))
            .send().await;
        resp.assert_status_is_ok();
        resp.assert_json(json!({"nombre": "Pepe", "descripcion": "demo", "precio": 15})).await;
    }

    #[tokio::test]
    async fn update_item_extreme_precio_saturates() {
        let cli = test_client();
        let resp = cli.put("/api/v4/items/7")
            .body_json(&json!({"precio": i32::MAX}))
            .send().await;
        resp.assert_status_is_ok();
        resp.assert_json(json!({"nombre": "Anónimo", "descripcion": null, "precio": i32::MAX})).await;
    }

    #[tokio::test]
    async fn remove_item_always_not_found() {
        let cli = test_client();
        for id in ["7", "0", "999999"] {
            let resp = cli.delete(format!("/api/v4/items/{}", id)).send().await;
            resp.assert_status(StatusCode::NOT_FOUND);
            resp.assert_json(json!({"message": "Item no encontrado"})).await;
        }
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let cli = test_client();
        let resp = cli.get("/api/v1/adios").send().await;
        resp.assert_status(StatusCode::NOT_FOUND);
    }
}
