#![doc = include_str!("../README.md")]

pub mod centrality;
pub mod cloud;
pub mod examples;
pub mod surface;
pub mod tier;

#[doc(inline)]
pub use centrality::{centrality, degrees, strength};
#[doc(inline)]
pub use cloud::{solve, CloudConfig, Point, GOLDEN_ANGLE};
#[doc(inline)]
pub use surface::{apply_layout, FitOptions, RenderSurface, ANIMATION_MS};
#[doc(inline)]
pub use tier::{classify, tier_of};
