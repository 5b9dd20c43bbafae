//! # Events Module
//!
//! Progress reporting for the rename pipeline.
//!
//! ## Design
//! The core library emits events through a channel so the output layer
//! decides how results are shown. The pipeline never prints.
//!
//! ## Example
//! ```rust,ignore
//! let (sender, receiver) = EventChannel::new();
//!
//! std::thread::spawn(move || {
//!     for event in receiver.iter() {
//!         if let Event::Rename(RenameEvent::Renamed { original_name, .. }) = event {
//!             println!("success for {}", original_name);
//!         }
//!     }
//! });
//!
//! pipeline.run_with_events(&sender)?;
//! ```

mod channel;
mod types;

pub use channel::{null_sender, EventChannel, EventReceiver, EventSender};
pub use types::*;
