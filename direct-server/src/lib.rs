//! Direct bus route service.
//!
//! A small web service that answers: "is there a single bus route
//! serving both of these stations?"

pub mod dataset;
pub mod domain;
pub mod index;
pub mod web;
