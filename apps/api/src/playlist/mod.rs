// Playlist building: gap marking, offline resource synthesis, payload
// normalization and endpoint failover. Handlers expose `build` over HTTP.

pub mod gap;
pub mod handlers;
pub mod normalizer;
pub mod orchestrator;
pub mod synthesizer;
