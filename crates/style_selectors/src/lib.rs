//! Selector matching for one node: detail predicates, the chain-match state
//! machine, specificity, and the handler trait the engine drives everything
//! else through.
//!
//! Spec: §3 (Selector, data model), §4.5 (selector matching for one node),
//! §4.6/§4.6a (chain match state machine and detail predicates).
#![forbid(unsafe_code)]

mod chain;
mod detail;
mod handler;
mod matcher;
mod parser;
mod specificity;

pub use chain::{CompoundSelector, SelectorChain};
pub use detail::{Combinator, Detail, DetailKind};
pub use handler::MatchHandler;
pub use matcher::{matches_chain, matches_compound};
pub use parser::parse_chain;
pub use specificity::Specificity;

pub use style_intern::Symbol;
