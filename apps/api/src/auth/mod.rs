// Authentication utilities

pub mod jwt;
