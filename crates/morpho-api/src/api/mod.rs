//! API module

mod handlers;
mod routes;
mod state;

pub use handlers::{get_analyze, get_lemma, health_check};
pub use routes::{bind, create_router, run_server, serve};
pub use state::AppState;
