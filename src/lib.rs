//! # exact-algebra
//!
//! Exact, arbitrary-precision numeric types built on a base-2^16 limb engine,
//! plus a generic algebra framework in which new number-like types are
//! composed from a small set of capability traits.
//!
//! The layers, leaves first: [`natural`] (the multi-precision engine),
//! [`integer`], [`rational`], [`polynomial`] over any ring, and the
//! composition layer: [`product`] for component-wise pairs, [`quotient`] for
//! coset arithmetic modulo a sub-structure, and [`cyclic`] for finite cyclic
//! groups. Every operation is exact; division by zero is an error, never an
//! approximation.

pub mod algebra;
pub mod cyclic;
pub mod errors;
pub mod integer;
pub mod natural;
pub mod polynomial;
pub mod product;
pub mod quotient;
pub mod rational;
