//! Command-line surface for the restq client

use crate::dispatch::DispatchOptions;
use clap::Parser;
use restq::DEFAULT_BASE_URL;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "restq")]
#[command(about = "Create, push to and pop from hosted restq queues")]
#[command(version)]
pub struct Cli {
    /// Queue file containing {"queue": "<id>"}
    #[arg(short = 'f', value_name = "PATH")]
    pub file: Option<PathBuf>,
    /// Queue id; takes precedence over -f
    #[arg(short = 'i', value_name = "ID")]
    pub id: Option<String>,
    /// Message to push if not given on stdin
    #[arg(short = 'm', value_name = "TEXT")]
    pub message: Option<String>,
    /// Create a new queue
    #[arg(short = 'c')]
    pub create: bool,
    /// Push a message onto the queue
    #[arg(short = 'p')]
    pub put: bool,
    /// Pop a message from the queue
    #[arg(short = 'g')]
    pub get: bool,
    /// Silence the empty queue message (currently has no effect)
    #[arg(short = 'q')]
    pub quiet: bool,
    #[arg(long, env = "RESTQ_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}

impl Cli {
    pub fn dispatch_options(&self) -> DispatchOptions {
        DispatchOptions {
            file: self.file.clone(),
            queue: self.id.clone(),
            message: self.message.clone(),
            create: self.create,
            put: self.put,
            get: self.get,
            quiet: self.quiet,
        }
    }
}
