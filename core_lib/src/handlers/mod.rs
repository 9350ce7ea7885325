pub mod health;
pub mod leads;
pub mod routes;
pub mod status;
