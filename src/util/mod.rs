//! Utility helpers shared across page features.
//!
//! SYSTEM CONTEXT
//! ==============
//! Nothing in here knows about a specific page section; features compose
//! these pieces with their own element handles.

pub mod debounce;
pub mod email;
pub mod lazy_images;
