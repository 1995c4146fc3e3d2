//! Web layer: request handlers mounted by `OracleServer::build_router`

pub mod handlers;
