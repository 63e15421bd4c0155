//! Child process supervision: spawn, signal relay, exit status.

mod relay;
mod status;
mod supervisor;

pub use relay::{
    forward_all, SignalRelay, SignalSubscription, DEFAULT_QUEUE_CAPACITY, RELAYED_SIGNALS,
};
pub use status::ChildStatus;
pub use supervisor::Supervisor;
