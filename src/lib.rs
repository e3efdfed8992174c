pub mod error;
pub mod nullable;
pub mod option;
pub mod partial_function;
pub mod sequence;


pub use error::*;
pub use nullable::*;
pub use option::*;
pub use partial_function::*;
