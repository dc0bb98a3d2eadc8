//! Reusable UI components.

pub mod relation_graph;
