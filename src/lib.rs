pub mod dedup;
pub mod error;
pub mod issues;
pub mod mapping;
pub mod pipeline;
pub mod record;
pub mod repair;
pub mod resolve;
pub mod sense;
pub mod version_map;
pub mod wordnet;
