pub(crate) mod channel;
pub(crate) mod contact;
pub(crate) mod section;
