//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! them to the service layer, which converts to domain models before anything crosses the
//! controller boundary. Repositories are generic over the connection so the same methods
//! run against the pooled connection or inside an open transaction.

pub mod group;
pub mod notification;
pub mod questionnaire;
pub mod series;
pub mod training;
pub mod user;

#[cfg(test)]
mod test;
