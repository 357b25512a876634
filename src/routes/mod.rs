//! Page route handlers

pub mod form;
