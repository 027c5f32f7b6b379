//! The machine HTTP client.
//!
//! The plotter exposes a small HTTP control surface: a connect
//! endpoint returning a session key, a file-info endpoint used to
//! probe for name collisions, and a PUT endpoint accepting the
//! program text. One call to [`MachineClient::send_program`] performs
//! the whole transaction in order, so per-machine negotiation and
//! upload are never interleaved.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use tracing::{debug, info, warn};

use crate::error::{UploadError, UploadResult};
use crate::naming::bump_filename;

const SESSION_HEADER: &str = "X-Session-Key";

/// Hard cap on the collision-renaming loop. A machine that reports a
/// conflict for this many candidates is misbehaving; give up with a
/// distinct error instead of looping forever.
pub const MAX_RENAME_ATTEMPTS: u32 = 100;

/// Blocking client for one plotter machine.
#[derive(Debug)]
pub struct MachineClient {
    host: String,
    http: Client,
}

impl MachineClient {
    /// Build a client for `host` with one deadline for every request.
    pub fn new(host: impl Into<String>, timeout: Duration) -> UploadResult<Self> {
        let host = host.into();
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| UploadError::Transport(e.to_string()))?;
        Ok(Self { host, http })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Open a machine session and return its key.
    pub fn connect(&self) -> UploadResult<String> {
        let url = format!("http://{}/machine/connect", self.host);
        debug!(url, "connecting to machine");

        let response = self
            .http
            .get(&url)
            .send()
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        let body = response.text().map_err(|e| self.classify(e))?;
        if !status.is_success() {
            return Err(UploadError::Protocol {
                status: status.as_u16(),
                body,
            });
        }

        let value: serde_json::Value = serde_json::from_str(&body)
            .map_err(|e| UploadError::InvalidResponse(e.to_string()))?;
        let key = value
            .get("sessionKey")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                UploadError::InvalidResponse("connect response has no sessionKey".to_string())
            })?;

        info!(host = %self.host, "machine session opened");
        Ok(key.to_string())
    }

    /// Find a filename the machine does not already hold.
    ///
    /// Probes `{base}.gcode`, then `{base}(2).gcode`, `{base}(3)…`,
    /// bumping the parenthetical counter until the machine reports no
    /// such file. Bounded by [`MAX_RENAME_ATTEMPTS`].
    pub fn resolve_filename(&self, session_key: &str, base: &str) -> UploadResult<String> {
        resolve_with(base, |candidate| self.file_exists(session_key, candidate))
    }

    fn file_exists(&self, session_key: &str, name: &str) -> UploadResult<bool> {
        let url = format!("http://{}/machine/fileinfo/gcodes/{}.gcode", self.host, name);
        let response = self
            .http
            .get(&url)
            .header(SESSION_HEADER, session_key)
            .send()
            .map_err(|e| self.classify(e))?;

        // The machine answers 200 with a JSON file descriptor when
        // the name is taken; anything else means it is free.
        if response.status() != StatusCode::OK {
            return Ok(false);
        }
        let body = response.text().map_err(|e| self.classify(e))?;
        Ok(serde_json::from_str::<serde_json::Value>(&body).is_ok())
    }

    /// PUT the program text under the given name.
    ///
    /// The machine acknowledges a stored file with 201; any other
    /// status is a protocol failure.
    pub fn upload(&self, session_key: &str, name: &str, program: &str) -> UploadResult<()> {
        let url = format!("http://{}/machine/file/gcodes/{}.gcode", self.host, name);
        debug!(url, bytes = program.len(), "uploading program");

        let response = self
            .http
            .put(&url)
            .header(SESSION_HEADER, session_key)
            .body(program.to_string())
            .send()
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if status != StatusCode::CREATED {
            let body = response.text().unwrap_or_default();
            return Err(UploadError::Protocol {
                status: status.as_u16(),
                body,
            });
        }

        info!(name, "program stored on machine");
        Ok(())
    }

    /// The full upload transaction: connect, resolve a free name,
    /// upload. Returns the filename the program was stored under.
    pub fn send_program(&mut self, base_name: &str, program: &str) -> UploadResult<String> {
        let session_key = self.connect()?;
        let name = self.resolve_filename(&session_key, base_name)?;
        self.upload(&session_key, &name, program)?;
        Ok(name)
    }

    fn classify(&self, error: reqwest::Error) -> UploadError {
        if error.is_timeout() {
            UploadError::Timeout {
                host: self.host.clone(),
            }
        } else if error.is_connect() {
            UploadError::Unreachable {
                host: self.host.clone(),
                reason: error.to_string(),
            }
        } else {
            UploadError::Transport(error.to_string())
        }
    }
}

/// Drive the renaming loop against an arbitrary collision check.
///
/// `taken` answers whether a candidate name is already in use; errors
/// from it abort the loop immediately.
fn resolve_with<F>(base: &str, mut taken: F) -> UploadResult<String>
where
    F: FnMut(&str) -> UploadResult<bool>,
{
    let mut candidate = base.to_string();

    for _ in 0..MAX_RENAME_ATTEMPTS {
        if !taken(&candidate)? {
            return Ok(candidate);
        }
        let next = bump_filename(&candidate);
        warn!(taken = %candidate, next = %next, "filename collision on machine");
        candidate = next;
    }

    Err(UploadError::NameExhausted {
        base: base.to_string(),
        attempts: MAX_RENAME_ATTEMPTS,
    })
}
