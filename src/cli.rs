pub(crate) mod sasa;
pub(crate) mod sphere;
