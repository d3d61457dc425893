//! Usecase error types.

use thiserror::Error;

/// Join failure, reported to the joining connection only.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum JoinError {
    /// The target room was never created; join never silently creates one.
    #[error("room not found")]
    RoomNotFound,
}

/// Room creation failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CreateRoomError {
    #[error("room name must not be empty")]
    EmptyRoomName,
}

/// Room detail lookup failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GetRoomDetailError {
    #[error("room not found")]
    RoomNotFound,
}
