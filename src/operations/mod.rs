pub mod concord_op;
pub mod netsdk_op;
pub mod diagnostic_op;
