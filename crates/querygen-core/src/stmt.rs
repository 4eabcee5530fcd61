mod op_binary;
pub use op_binary::BinaryOp;
