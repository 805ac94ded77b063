//! UI components.

pub mod tech_tree;
