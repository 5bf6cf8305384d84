//! Data models for the LabTrack API

pub mod category;
pub mod computer;
pub mod enums;
pub mod lab_utility;
pub mod room;
pub mod smart_board;
pub mod user;
