//! Frontend module for the Hire AI application.

pub mod components;
pub mod pages;
pub mod services;

#[cfg(test)]
pub mod fixture;
