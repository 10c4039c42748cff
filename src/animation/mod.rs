pub(crate) mod ambient;
pub(crate) mod ease;
pub(crate) mod particles;
pub(crate) mod spring;
pub(crate) mod table;
