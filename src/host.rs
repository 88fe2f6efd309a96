//! Host integration: one message in, one session close out
//!
//! The host owns the nodes and the selection. A session receives a single
//! message, runs the swap against the current selection and then asks the
//! host to close, whether or not the message was understood.

use tracing::debug;

use crate::layout::{swap_orientation, Node, SwapConfig, SwapError, SwapReport};
use crate::message::Message;

/// The environment that owns the canvas nodes
pub trait Host {
    /// The current selection, in selection order
    fn selection_mut(&mut self) -> &mut [Node];

    /// Signal that this session is finished
    fn close_session(&mut self);
}

/// What happened to a message
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The swap ran and positions were rewritten
    Applied(SwapReport),
    /// The message was a no-op
    Ignored(SwapError),
}

impl Outcome {
    pub fn report(&self) -> Option<&SwapReport> {
        match self {
            Outcome::Applied(report) => Some(report),
            Outcome::Ignored(_) => None,
        }
    }
}

/// Handle one raw JSON message, then close the session.
pub fn handle_message<H: Host + ?Sized>(host: &mut H, raw: &str, config: &SwapConfig) -> Outcome {
    let result = match Message::parse(raw) {
        Ok(message) => apply(host, &message, config),
        Err(err) => Err(err),
    };
    finish(host, result)
}

/// Handle one decoded message, then close the session.
pub fn handle<H: Host + ?Sized>(host: &mut H, message: &Message, config: &SwapConfig) -> Outcome {
    let result = apply(host, message, config);
    finish(host, result)
}

fn apply<H: Host + ?Sized>(
    host: &mut H,
    message: &Message,
    config: &SwapConfig,
) -> Result<SwapReport, SwapError> {
    let axis = message.axis()?;
    swap_orientation(host.selection_mut(), axis, config)
}

fn finish<H: Host + ?Sized>(host: &mut H, result: Result<SwapReport, SwapError>) -> Outcome {
    let outcome = match result {
        Ok(report) => Outcome::Applied(report),
        Err(err) => {
            debug!(error = %err, "message ignored");
            Outcome::Ignored(err)
        }
    };
    host.close_session();
    outcome
}
