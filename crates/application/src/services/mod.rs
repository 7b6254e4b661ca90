mod query_history;

pub use query_history::QueryHistoryService;
