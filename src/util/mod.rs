//! Small helpers with no component of their own.

pub mod particles;
