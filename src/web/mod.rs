mod state;
pub use state::AppState;

pub mod routes;
