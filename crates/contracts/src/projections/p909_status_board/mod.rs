pub mod dto;

pub use dto::{StatusBoardDto, StatusBoardRequest, StatusBoardRowDto};
