pub mod songs;

pub use songs::{FailureBody, FailureResponse, SongListResponse, SongQuery, SongResponse};
