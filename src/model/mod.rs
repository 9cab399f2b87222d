//! API data transfer objects and domain models.
//!
//! DTOs define the JSON wire format for the HTTP API. Domain models sit
//! between the repository and controller layers: entity models are converted
//! to domain models at the repository boundary and to DTOs at the controller
//! boundary, so database types never leak into handler code.

pub mod api;
pub mod group;
pub mod notification;
pub mod series;
pub mod training;
