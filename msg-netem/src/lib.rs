#![doc(issue_tracker_base_url = "https://github.com/chainbound/msg-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

//! Inject artificial delay on a network interface.
//!
//! This crate drives the Linux traffic control tool (`tc`) to attach, modify and remove a
//! `netem` delay qdisc on a single interface. All the actual shaping happens in the kernel: the
//! crate only builds the command line, runs it and reports what `tc` said.
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use msg_netem::Netem;
//!
//! let netem = Netem::from_interface("eth0")?;
//!
//! netem.add_delay(Duration::from_millis(100))?;
//! for line in netem.show()? {
//!     println!("{line}");
//! }
//! netem.delete_delay(Duration::from_millis(100))?;
//! # Ok::<(), msg_netem::Error>(())
//! ```

pub mod command;
pub mod delay;
pub mod lookup;
pub mod qdisc;

mod error;
pub use error::{Error, Result};

mod netem;
pub use netem::{Netem, NetemConfig, DEFAULT_PROGRAM};
