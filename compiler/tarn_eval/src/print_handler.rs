//! Where the `print` native sends its output.
//!
//! - `Stdout`: the default for hosts running programs directly
//! - `Buffer`: captures output for tests and embedding hosts
//! - `Silent`: discards everything

use std::sync::Arc;

use parking_lot::Mutex;

/// Print handler implementation, dispatched by enum rather than trait object.
pub enum PrintHandlerImpl {
    Stdout,
    Buffer(Mutex<String>),
    Silent,
}

impl PrintHandlerImpl {
    /// Emit one line of output.
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout => println!("{msg}"),
            Self::Buffer(buffer) => {
                let mut buf = buffer.lock();
                buf.push_str(msg);
                buf.push('\n');
            }
            Self::Silent => {}
        }
    }

    /// Everything captured so far. Empty for handlers that don't capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(buffer) => buffer.lock().clone(),
            Self::Stdout | Self::Silent => String::new(),
        }
    }

    /// Drop captured output.
    pub fn clear(&self) {
        if let Self::Buffer(buffer) = self {
            buffer.lock().clear();
        }
    }
}

/// Print handler shared between the interpreter and the `print` native.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout)
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(Mutex::new(String::new())))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}
