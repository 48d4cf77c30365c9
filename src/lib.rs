#![warn(rust_2018_idioms)]

//! Colour refinement tests from the Weisfeiler-Leman hierarchy
//! together with the Fürer gadget construction that separates
//! its members.
//!
//! A named method from the catalog is run to its stable
//! colouring on two graphs; the graphs are distinguished iff
//! their pooled multiset invariants differ.

pub mod colour;
pub mod compare;
pub mod debug;
pub mod furer;
pub mod graph;
pub mod method;
pub mod multiset;
pub mod parser;
pub mod wl;

pub use compare::{compare, compare_by_name};
pub use debug::Error;
pub use furer::{furer_pair, FurerPair};
pub use method::Method;
