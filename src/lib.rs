//! Lazy combinatorial sequence generators: cartesian products,
//! permutations and combinations, plus a set of simple iterator
//! adaptors to compose with them.
//!
//! All generators are pull-based cursors. Constructing one materializes
//! its input domain(s) into an array once; each call to
//! [`Iterator::next`] then produces a single result from integer
//! indices into that array. Collecting a generator gives the eager
//! form, which is element-for-element equal to the sequence of lazy
//! pulls.

pub mod adaptors;
pub mod combinations;
pub mod counter;
pub mod counting;
pub mod permutations;
pub mod product;

pub use adaptors::IterTools;
pub use combinations::combinations;
pub use permutations::permutations;
pub use product::{mixed_product, product, product_repeated};

#[derive(thiserror::Error, Debug)]
pub enum CombiterError {
    #[error("{operation} does not fit in a usize")]
    CountOverflow { operation: String },
}
