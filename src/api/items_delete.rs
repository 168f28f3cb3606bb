#![forbid(unsafe_code)]

use poem::Request;
use poem_openapi::{ OpenApi, payload::Json, Object, param::Path, ApiResponse };

use crate::utils::web_utils::{self, RequestDebug};

// ***************************************************************************
//                          Request/Response Definitions
// ***************************************************************************
pub struct RemoveItemApi;

struct ReqRemoveItem
{
    id: i64,
}

#[derive(Object, Debug)]
struct RespRemoveItem
{
    message: String,
}

// Implement the debug record trait for logging.
impl RequestDebug for ReqRemoveItem {
    type Req = ReqRemoveItem;
    fn get_request_info(&self) -> String {
        let mut s = String::with_capacity(255);
        s.push_str("  Path parameters:");
        s.push_str("\n    id: ");
        s.push_str(&self.id.to_string());
        s
    }
}

// ------------------- HTTP Status Codes -------------------
#[derive(Debug, ApiResponse)]
enum HolaResponse {
    #[oai(status = 404)]
    Http404(Json<RespRemoveItem>),
}

fn make_http_404() -> HolaResponse {
    HolaResponse::Http404(Json(RespRemoveItem { message: "Item no encontrado".to_string() }))
}

// ***************************************************************************
//                             OpenAPI Endpoint
// ***************************************************************************
#[OpenApi]
impl RemoveItemApi {
    /// There is no backing store, so removal reports a missing item for
    /// every id.
    #[oai(path = "/v4/items/:id", method = "delete")]
    async fn remove_item(&self, http_req: &Request, id: Path<i64>) -> HolaResponse {
        // Package the request parameters.
        let req = ReqRemoveItem { id: *id };

        // Conditional logging depending on log level.
        web_utils::debug_request(http_req, &req);

        make_http_404()
    }
}
