pub mod api_client;
pub mod candidate_board;
pub mod hr;
pub mod response_interpreter;
pub mod session_invalidator;
pub mod session_store;
