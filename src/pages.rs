//! Page generation modules for the two view types
//!
//! This module organizes HTML page generators by page type (list and
//! article). Each page wraps its view's markup with the shared layout and
//! navigation components.

pub mod article;
pub mod list;
