// Composition root for the calendar service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate concrete infrastructure implementations.
// - Wire implementations into use case handlers.
// - Spawn background workers (session cache).
// - Expose the HTTP router and the GraphQL schema to main.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
pub mod workers;
