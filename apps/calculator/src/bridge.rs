//! # Line Bridge
//!
//! Carries commands between the website's widget host and the calculator,
//! one JSON object per line.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdin  ──► {"command":"set_desired_units","args":{"units":60}}         │
//! │  stdout ◄── {"ok":{"product":"Custom Phone Stand",...}}                 │
//! │                                                                         │
//! │  stdin  ──► {"command":"set_hours_per_day","args":{"hours":40}}         │
//! │  stdout ◄── {"error":{"code":"VALIDATION_ERROR","message":"..."}}       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Blank lines are skipped. A malformed line gets an error reply and the
//! bridge keeps reading.

use std::io::{self, BufRead, Write};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::commands::invoke;
use crate::error::ApiError;
use crate::state::{CalculatorState, ConfigState};

/// One command request.
#[derive(Debug, Deserialize)]
pub struct Request {
    pub command: String,

    /// Command arguments; omitted for commands that take none.
    #[serde(default)]
    pub args: Value,
}

/// One reply line.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Response {
    Ok(Value),
    Error(ApiError),
}

impl From<Result<Value, ApiError>> for Response {
    fn from(result: Result<Value, ApiError>) -> Self {
        match result {
            Ok(value) => Response::Ok(value),
            Err(err) => Response::Error(err),
        }
    }
}

/// Handles a single request line.
pub fn handle_line(calculator: &CalculatorState, config: &ConfigState, line: &str) -> Response {
    let result = serde_json::from_str::<Request>(line)
        .map_err(ApiError::from)
        .and_then(|request| {
            debug!(command = %request.command, "bridge request");
            invoke(calculator, config, &request.command, request.args)
        });

    if let Err(err) = &result {
        warn!(code = ?err.code, message = %err.message, "command failed");
    }

    Response::from(result)
}

/// Reads requests from `input` until EOF and writes one reply per request.
pub fn run<R, W>(
    calculator: &CalculatorState,
    config: &ConfigState,
    input: R,
    mut output: W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = handle_line(calculator, config, &line);
        serde_json::to_writer(&mut output, &response)?;
        output.write_all(b"\n")?;
        output.flush()?;
    }

    Ok(())
}
