pub mod loader_integration;
