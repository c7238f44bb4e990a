// Career resolution: alias table, skill catalog, cascade resolver, suggestions.
// The tables are read-only and shared by every request.

pub mod aliases;
pub mod catalog;
pub mod handlers;
pub mod resolver;
pub mod suggestions;
