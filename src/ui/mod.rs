//! UI module - standalone widgets shared by the app panels

pub mod components;
