pub mod csv_store;
