#![forbid(unsafe_code)]

use poem_openapi::Object;

use crate::utils::web_utils::RequestDebug;

// ***************************************************************************
//                              Item Definition
// ***************************************************************************
/** The demo resource.  Nothing is stored between requests: each request
 * deserializes an Item, a handler may mutate it, and the value is discarded
 * after the response is serialized.
 */
#[derive(Object, Debug, Clone)]
pub struct Item {
    /// Display name, "Anónimo" when the caller omits it.
    #[oai(default = "default_nombre")]
    pub nombre: String,

    /// Optional free-form description.
    pub descripcion: Option<String>,

    /// Price in whole units, 0 when omitted.
    #[oai(default)]
    pub precio: i32,
}

fn default_nombre() -> String {
    "Anónimo".to_string()
}

// Implement the debug record trait for logging.
impl RequestDebug for Item {
    type Req = Item;
    fn get_request_info(&self) -> String {
        let mut s = String::with_capacity(255);
        s.push_str("  Request body:");
        s.push_str("\n    nombre: ");
        s.push_str(&self.nombre);
        s.push_str("\n    descripcion: ");
        s.push_str(self.descripcion.as_deref().unwrap_or("<none>"));
        s.push_str("\n    precio: ");
        s.push_str(&self.precio.to_string());
        s
    }
}

// ***************************************************************************
//                                  Tests
// ***************************************************************************
#[cfg(test)]
mod tests {
    use poem_openapi::types::ParseFromJSON;
    use serde_json::json;

    use super::Item;

    fn parse(v: serde_json::Value) -> Item {
        match Item::parse_from_json(Some(v)) {
            Ok(i) => i,
            Err(e) => panic!("parse failure: {}", e.into_message()),
        }
    }

    #[test]
    fn defaults_fill_omitted_fields() {
        let item = parse(json!({"precio": 5}));
        assert_eq!(item.nombre, "Anónimo");
        assert_eq!(item.descripcion, None);
        assert_eq!(item.precio, 5);
    }

    #[test]
    fn empty_body_is_all_defaults() {
        let item = parse(json!({}));
        assert_eq!(item.nombre, "Anónimo");
        assert_eq!(item.precio, 0);
    }

    #[test]
    fn uncoercible_precio_is_rejected() {
        assert!(Item::parse_from_json(Some(json!({"precio": "cinco"}))).is_err());
    }
}
