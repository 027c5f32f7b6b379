//! # Plotkit Uploader
//!
//! HTTP client for the plotter machine's control interface. The
//! compiled program text arrives here as an opaque string owned by
//! the caller; this crate negotiates a session, finds a filename the
//! machine will accept without clobbering an existing program, and
//! PUTs the text.
//!
//! Uploads to one machine are serialized by construction: the whole
//! connect → probe → upload sequence runs inside a single
//! [`MachineClient::send_program`] call.

pub mod client;
pub mod error;
pub mod naming;

pub use client::{MachineClient, MAX_RENAME_ATTEMPTS};
pub use error::{UploadError, UploadResult};
pub use naming::bump_filename;
