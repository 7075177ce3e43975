pub mod ingest_commands;
pub mod projection_commands;
pub mod sync_commands;
