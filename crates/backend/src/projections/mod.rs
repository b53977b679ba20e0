pub mod p909_status_board;
