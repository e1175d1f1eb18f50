//! Reusable HTML components for page generation
//!
//! This module provides Maud component functions shared by the list and
//! article pages: the document wrapper and the header navigation.

pub mod layout;
pub mod nav;
