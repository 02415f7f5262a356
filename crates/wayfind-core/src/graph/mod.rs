//! Travel graph model
//!
//! - `types`: places, travel modes and edges
//! - `model`: the immutable graph, random generation and the text dump
//! - `provider`: read-only adjacency trait consumed by path finding

pub mod model;
pub mod provider;
pub mod types;

pub use model::{validate_places, Graph, GraphBuilder};
pub use provider::{GraphProvider, Neighbors};
pub use types::{Edge, Place, TravelMode};
