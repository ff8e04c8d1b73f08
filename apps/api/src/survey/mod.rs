// Survey definition and response collection.
// Two built-in variants share one pipeline; the variant is chosen at startup.

pub mod collector;
pub mod handlers;
pub mod prompts;
pub mod schema;
pub mod template;
pub mod variants;
