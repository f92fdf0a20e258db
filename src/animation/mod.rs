pub(crate) mod angles;
pub(crate) mod ease;
