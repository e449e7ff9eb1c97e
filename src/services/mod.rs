pub mod schema_api;
