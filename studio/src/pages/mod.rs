//! Pages. There is exactly one: the studio itself.

pub mod studio;
