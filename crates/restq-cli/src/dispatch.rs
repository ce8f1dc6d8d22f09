//! Flag validation and routing to a single queue operation.

use log::{debug, warn};
use restq::{RestqClient, RestqError, resolve_queue};
use std::path::{Path, PathBuf};

/// Exit status reported when a put or get fails, whatever the HTTP status.
pub const FAILURE_STATUS: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Put,
    Get,
}

/// Parsed invocation, built once from the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DispatchOptions {
    pub file: Option<PathBuf>,
    pub queue: Option<String>,
    pub message: Option<String>,
    pub create: bool,
    pub put: bool,
    pub get: bool,
    /// Accepted for compatibility; does not change any output.
    pub quiet: bool,
}

impl DispatchOptions {
    /// Requested operation. When several flags are set create wins over
    /// put, and put wins over get.
    pub fn operation(&self) -> Option<Operation> {
        if self.create {
            Some(Operation::Create)
        } else if self.put {
            Some(Operation::Put)
        } else if self.get {
            Some(Operation::Get)
        } else {
            None
        }
    }

    pub fn validate(&self) -> Result<Operation, RestqError> {
        let operation = self
            .operation()
            .ok_or_else(|| RestqError::invalid_input("one of create, put or get is required"))?;

        if operation != Operation::Create
            && self.queue_id().is_none()
            && self.queue_file().is_none()
        {
            return Err(RestqError::invalid_input(
                "put and get need a queue id or a queue file",
            ));
        }
        Ok(operation)
    }

    fn queue_id(&self) -> Option<&str> {
        self.queue.as_deref().filter(|id| !id.is_empty())
    }

    fn queue_file(&self) -> Option<&Path> {
        self.file
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }

    /// Queue for put and get. An unreadable or malformed queue file is
    /// logged and treated as an empty id, which the client then rejects.
    fn resolved_queue(&self) -> String {
        resolve_queue(self.queue_id(), self.queue_file()).unwrap_or_else(|e| {
            warn!("Ignoring queue file: {e}");
            String::new()
        })
    }
}

/// Result handed to the entry point: text for stdout, process exit status,
/// and the error (if any) behind that status.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub output: String,
    pub status: i32,
    pub error: Option<RestqError>,
}

impl Outcome {
    fn success(output: String, status: i32) -> Self {
        Self {
            output,
            status,
            error: None,
        }
    }

    fn failure(status: i32, error: RestqError) -> Self {
        Self {
            output: String::new(),
            status,
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Runs exactly one operation.
///
/// `read_stdin` is only called for a put without a `-m` message. If it fails
/// the put is not attempted.
pub async fn dispatch<F>(client: &RestqClient, options: &DispatchOptions, read_stdin: F) -> Outcome
where
    F: FnOnce() -> Result<String, RestqError>,
{
    let operation = match options.validate() {
        Ok(operation) => operation,
        Err(e) => return Outcome::failure(0, e),
    };
    debug!("Dispatching {operation:?}");

    match operation {
        Operation::Create => match client.create().await {
            Ok(reply) => Outcome::success(reply.body, reply.status),
            Err(e) => {
                let status = e.status_code().map(i32::from).unwrap_or(FAILURE_STATUS);
                Outcome::failure(status, e)
            }
        },
        Operation::Put => {
            let queue = options.resolved_queue();
            let message = match options.message.as_deref().filter(|m| !m.is_empty()) {
                Some(message) => message.to_string(),
                None => match read_stdin() {
                    Ok(message) => message,
                    Err(e) => return Outcome::failure(FAILURE_STATUS, e),
                },
            };
            match client.put(&message, &queue).await {
                Ok(()) => Outcome::success(String::new(), 0),
                Err(e) => Outcome::failure(FAILURE_STATUS, e),
            }
        }
        Operation::Get => {
            let queue = options.resolved_queue();
            if options.quiet {
                debug!("Quiet flag set; empty-queue output is unchanged");
            }
            match client.get(&queue).await {
                Ok(reply) => Outcome::success(reply.body, reply.status),
                Err(e) => Outcome::failure(FAILURE_STATUS, e),
            }
        }
    }
}
