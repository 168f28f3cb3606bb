#![forbid(unsafe_code)]

use poem::Request;
use poem_openapi::{ OpenApi, payload::Json, param::Path };

use crate::api::item::Item;
use crate::utils::web_utils::{self, RequestDebug};

// ***************************************************************************
//                                Constants
// ***************************************************************************
// Fixed amount added to the submitted price on every update.
const PRECIO_INCREMENT : i32 = 10;

// ***************************************************************************
//                          Request/Response Definitions
// ***************************************************************************
pub struct UpdateItemApi;

struct ReqUpdateItem
{
    id: i64,
    item: Item,
}

// Implement the debug record trait for logging.
impl RequestDebug for ReqUpdateItem {
    type Req = ReqUpdateItem;
    fn get_request_info(&self) -> String {
        let mut s = String::with_capacity(255);
        s.push_str("  Path parameters:");
        s.push_str("\n    id: ");
        s.push_str(&self.id.to_string());
        s.push('\n');
        s.push_str(self.item.get_request_info().as_str());
        s
    }
}

// ***************************************************************************
//                             OpenAPI Endpoint
// ***************************************************************************
#[OpenApi]
impl UpdateItemApi {
    /// Echo the submitted item with its price bumped by a fixed amount.
    /// The id is accepted but unused since there is no backing store.
    #[oai(path = "/v4/items/:id", method = "put")]
    async fn update_item(&self, http_req: &Request, id: Path<i64>, item: Json<Item>) -> Json<Item> {
        // Package the request parameters.
        let req = ReqUpdateItem { id: *id, item: item.0 };

        // Conditional logging depending on log level.
        web_utils::debug_request(http_req, &req);

        Json(bump_precio(req.item))
    }
}

// ***************************************************************************
//                             Private Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// bump_precio:
// ---------------------------------------------------------------------------
fn bump_precio(mut item: Item) -> Item {
    // The submitted price can be any i32, so the bump must not overflow.
    item.precio = item.precio.saturating_add(PRECIO_INCREMENT);
    item
}

// ***************************************************************************
//                                  Tests
// ***************************************************************************
#[cfg(test)]
mod tests {
    use crate::api::item::Item;
    use super::bump_precio;

    #[test]
    fn precio_is_incremented() {
        let item = Item { nombre: "Pepe".to_string(), descripcion: None, precio: 5 };
        assert_eq!(bump_precio(item).precio, 15);
    }

    #[test]
    fn default_precio_becomes_increment() {
        let item = Item { nombre: "Anónimo".to_string(), descripcion: None, precio: 0 };
        assert_eq!(bump_precio(item).precio, 10);
    }

    #[test]
    fn extreme_precio_saturates() {
        let item = Item { nombre: "Pepe".to_string(), descripcion: None, precio: i32::MAX };
        assert_eq!(bump_precio(item).precio, i32::MAX);
    }
}
