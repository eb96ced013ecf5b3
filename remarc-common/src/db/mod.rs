//! Database initialisation and schema

pub mod init;

pub use init::{create_collection_table, create_collection_tables, init_database, COLLECTION_TABLES};
