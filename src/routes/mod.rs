//! Route modules for the AcadIntel server

pub mod catalog;
pub mod files;
pub mod generate;
