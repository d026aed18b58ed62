mod common;

mod api_client_tests;
mod candidate_board_tests;
