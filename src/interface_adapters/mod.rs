pub mod handlers;
pub mod pg_store;
pub mod protocol;
pub mod routes;
pub mod state;
