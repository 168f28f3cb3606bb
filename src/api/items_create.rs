#![forbid(unsafe_code)]

use poem::Request;
use poem_openapi::{ OpenApi, payload::Json, ApiResponse };

use crate::api::item::Item;
use crate::utils::web_utils;

// ***************************************************************************
//                          Request/Response Definitions
// ***************************************************************************
pub struct CreateItemApi;

// ------------------- HTTP Status Codes -------------------
#[derive(Debug, ApiResponse)]
enum HolaResponse {
    #[oai(status = 201)]
    Http201(Json<Item>),
}

fn make_http_201(item: Item) -> HolaResponse {
    HolaResponse::Http201(Json(item))
}

// ***************************************************************************
//                             OpenAPI Endpoint
// ***************************************************************************
#[OpenApi]
impl CreateItemApi {
    /// Echo the submitted item with defaults filled in for omitted fields.
    /// There is no backing store, so nothing is retained.
    #[oai(path = "/v4/items", method = "post")]
    async fn create_item(&self, http_req: &Request, item: Json<Item>) -> HolaResponse {
        // Conditional logging depending on log level.
        web_utils::debug_request(http_req, &item.0);

        make_http_201(item.0)
    }
}
