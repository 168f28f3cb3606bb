#![forbid(unsafe_code)]

use lazy_static::lazy_static;
use log::info;
use poem::listener::TcpListener;
use poem::middleware::Cors;
use poem::{EndpointExt, Route};

// Hola Utilities
use crate::api::demo_service;
use crate::utils::config::{init_log, init_runtime_context, RuntimeCtx};
use crate::utils::errors::Errors;

// Modules
mod api;
mod utils;

// ***************************************************************************
//                                Constants
// ***************************************************************************
const SERVER_NAME : &str = "HolaServer"; // for poem logging

// ***************************************************************************
//                             Static Variables
// ***************************************************************************
// Lazily initialize the parameters variable so that it has a 'static lifetime.
// We exit if we can't read our parameters or create our data directories.
lazy_static! {
    static ref RUNTIME_CTX: RuntimeCtx = init_runtime_context();
}

// ---------------------------------------------------------------------------
// main:
// ---------------------------------------------------------------------------
#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // --------------- Initialize Hola ----------------
    // Announce ourselves.
    println!("Starting hola_server!");

    // Initialize the server.
    hola_init();

    // --------------- Main Loop Set Up ---------------
    // Assign base URL.
    let hola_url = format!("{}:{}{}",
        RUNTIME_CTX.parms.config.http_addr,
        RUNTIME_CTX.parms.config.http_port,
        "/api");

    // Create the service from the demo endpoint structs.
    let api_service = demo_service(&hola_url);

    // Allow the generated openapi specs to be retrieved from the server.
    let spec = api_service.spec_endpoint();
    let spec_yaml = api_service.spec_endpoint_yaml();

    // Cross-origin requests are limited to the single configured origin,
    // which by default lets the swagger editor exercise the endpoints.
    // All methods and headers stay allowed, as does sending credentials.
    let cors = Cors::new()
        .allow_origin(&RUNTIME_CTX.parms.config.allow_origin)
        .allow_credentials(true);

    // Create the routes and run the server.
    let addr = format!("{}{}", "0.0.0.0:", RUNTIME_CTX.parms.config.http_port);
    let ui = api_service.swagger_ui();
    let app = Route::new()
        .nest("/api", api_service)
        .nest("/", ui)
        .at("/spec", spec)
        .at("/spec_yaml", spec_yaml)
        .with(cors);

    // ------------------ Main Loop -------------------
    poem::Server::new(TcpListener::bind(addr))
        .name(SERVER_NAME)
        .run(app)
        .await
}

// ***************************************************************************
//                             Private Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// hola_init:
// ---------------------------------------------------------------------------
/** Initialize all subsystems and data structures other than those needed
 * to configure the main loop processor.
 */
fn hola_init() {
    // Configure our log.
    init_log();

    // Force the reading of input parameters and initialization of the
    // runtime context, which also creates the data directories.
    info!("{}", Errors::InputParms(format!("{:#?}", *RUNTIME_CTX)));

    // Stop here if we were only asked to set up the data directories.
    if RUNTIME_CTX.hola_args.create_dirs_only {
        println!("Data directories created under {}.", RUNTIME_CTX.hola_dirs.root_dir);
        std::process::exit(0);
    }

    // Log build info.
    print_version_info();
}

// ---------------------------------------------------------------------------
// print_version_info:
// ---------------------------------------------------------------------------
fn print_version_info() {
    // Log build info.
    info!("{}.", format!("\n*** Running HOLA={}, BRANCH={}, COMMIT={}, RUSTC={}",
                        option_env!("CARGO_PKG_VERSION").unwrap_or("unknown"),
                        env!("GIT_BRANCH"),
                        env!("GIT_COMMIT_SHORT"),
                        env!("RUSTC_VERSION")),
    );
}
