#![forbid(unsafe_code)]

use poem_openapi::{ OpenApi, payload::Json, Object, param::Path };

// ***************************************************************************
//                          Request/Response Definitions
// ***************************************************************************
pub struct HolaApi;

#[derive(Object, Debug)]
struct RespHola
{
    message: String,
}

// ***************************************************************************
//                             OpenAPI Endpoints
// ***************************************************************************
#[OpenApi]
impl HolaApi {
    /// Fixed greeting, no inputs.
    #[oai(path = "/v1/hola", method = "get")]
    async fn get_hola(&self) -> Json<RespHola> {
        Json(RespHola { message: saluda("mundo") })
    }

    /// Greeting with the name taken from the path.
    #[oai(path = "/v1/hola/:nombre", method = "get")]
    async fn get_hola_nombre(&self, nombre: Path<String>) -> Json<RespHola> {
        Json(RespHola { message: saluda(&nombre) })
    }
}

// ***************************************************************************
//                             Private Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// saluda:
// ---------------------------------------------------------------------------
fn saluda(nombre: &str) -> String {
    "Hola, ".to_owned() + nombre
}

// ***************************************************************************
//                                  Tests
// ***************************************************************************
#[cfg(test)]
mod tests {
    use super::saluda;

    #[test]
    fn greets_by_name() {
        assert_eq!(saluda("mundo"), "Hola, mundo");
        assert_eq!(saluda("Pepe"), "Hola, Pepe");
    }
}
