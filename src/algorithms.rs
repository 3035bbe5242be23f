pub mod triangulation;

#[doc(inline)]
pub use triangulation::triangulate;
