pub mod contract_queries;
pub mod event_queries;
