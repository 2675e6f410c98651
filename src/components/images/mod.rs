//! Image handling components
//!
//! Native file picking with square cropping into an inline data URI.

pub mod photo_upload;

pub use photo_upload::{encode_profile_photo, PhotoUpload};
