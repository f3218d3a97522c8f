#![cfg_attr(not(test), no_std)]
#![warn(
    clippy::pedantic,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::todo
)]
#![deny(
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::missing_const_for_fn
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

extern crate alloc;

pub mod errors;
pub mod linked_lists;
pub mod predicates;
pub mod queues;

pub use errors::ListError;
pub use linked_lists::{LinkedList, Node};
