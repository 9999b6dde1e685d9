//! Test modules for FraudLens
//!
//! - `loader_test` - collection load-cycle state machine
//! - `table_test` - tabular data engine (filtering, sorting, distinct values)
//! - `gauge_test` - gauge position mapping
//! - `api_test` - wire types and client
//! - `settings_test` - settings defaults and parsing
//! - `integration_test` - loader-to-table data flow


#[cfg(test)]
pub mod table_test;



#[cfg(test)]
pub mod settings_test;

#[cfg(test)]
pub mod integration_test;
