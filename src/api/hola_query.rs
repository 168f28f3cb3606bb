#![forbid(unsafe_code)]

use poem_openapi::{ OpenApi, payload::Json, Object, param::{Path, Query} };

// ***************************************************************************
//                          Request/Response Definitions
// ***************************************************************************
pub struct HolaQueryApi;

#[derive(Object, Debug)]
struct RespHolaQuery
{
    message: String,
}

// ***************************************************************************
//                             OpenAPI Endpoints
// ***************************************************************************
#[OpenApi]
impl HolaQueryApi {
    /// Optional query parameter handled explicitly; a missing name is
    /// treated as "mundo".
    #[oai(path = "/v2/hola", method = "get")]
    async fn get_hola_v2(&self, nombre: Query<Option<String>>) -> Json<RespHolaQuery> {
        let nombre = match nombre.0 {
            Some(n) => n,
            None => "mundo".to_string(),
        };
        Json(RespHolaQuery { message: saluda(&nombre, None) })
    }

    /// Same result as the v2 route, with the default declared on the
    /// parameter instead of handled in the handler.
    #[oai(path = "/v3/hola", method = "get")]
    async fn get_hola_v3(&self,
                         #[oai(default = "default_nombre")] nombre: Query<String>)
        -> Json<RespHolaQuery>
    {
        Json(RespHolaQuery { message: saluda(&nombre, None) })
    }

    /// Path and query parameters combined; the optional greeting is
    /// appended after the name when present.
    #[oai(path = "/v3/hola/:nombre", method = "get")]
    async fn get_hola_saludo(&self, nombre: Path<String>, saludo: Query<Option<String>>)
        -> Json<RespHolaQuery>
    {
        Json(RespHolaQuery { message: saluda(&nombre, saludo.0.as_deref()) })
    }
}

// ***************************************************************************
//                             Private Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// default_nombre:
// ---------------------------------------------------------------------------
fn default_nombre() -> String {
    "mundo".to_string()
}

// ---------------------------------------------------------------------------
// saluda:
// ---------------------------------------------------------------------------
fn saluda(nombre: &str, saludo: Option<&str>) -> String {
    let saludo = match saludo {
        Some(s) => ", ".to_owned() + s,
        None => "".to_string(),
    };
    "Hola, ".to_owned() + nombre + &saludo
}

// ***************************************************************************
//                                  Tests
// ***************************************************************************
#[cfg(test)]
mod tests {
    use super::{default_nombre, saluda};

    #[test]
    fn greeting_without_saludo() {
        assert_eq!(saluda("Pepe", None), "Hola, Pepe");
    }

    #[test]
    fn greeting_with_saludo() {
        assert_eq!(saluda("Pepe", Some("qué tal")), "Hola, Pepe, qué tal");
    }

    #[test]
    fn default_name_is_mundo() {
        assert_eq!(default_nombre(), "mundo");
    }
}
