//! `ppinet` lays out microbial protein-protein interaction networks as
//! concentric **centrality clouds**.
//!
//! ## Why ppinet?
//!
//! 1. `ppinet` _separates_ hubs from the periphery.
//!
//!    Highly connected proteins gravitate toward the center of the cloud,
//!    loosely connected proteins drift outward, so regulatory hubs are
//!    visible at a glance even in dense networks.
//!
//! 1. `ppinet` works on portal snapshots.
//!
//!    Network snapshots are fetched straight from a genomics portal's REST
//!    endpoint (optionally zstd-compressed), filtered by score channel,
//!    weight threshold, and ortholog toggle, and focused on the
//!    neighborhood of a query protein.
//!
//! 1. **`ppinet` layouts are reproducible when you need them to be.**
//!
//!    The jitter that keeps clouds organic comes from an injectable random
//!    source: seed it for identical positions between runs, or let it draw
//!    from entropy for natural variation between redraws.
//!
//! The layout engine itself lives in the [`ppinet_cloud`] workspace crate;
//! this crate supplies the data model, filtering, and the CLI pipeline.

pub mod cli;
pub mod export;
pub mod network;
pub mod plot;
pub mod run;
pub mod state;
pub mod utils;

#[doc(inline)]
pub use crate::cli::Cli;
#[doc(inline)]
pub use crate::network::Network;
#[doc(inline)]
pub use crate::state::ViewState;
#[doc(inline)]
pub use crate::utils::verbosity::Verbosity;
