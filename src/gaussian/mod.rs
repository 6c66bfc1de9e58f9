pub mod cloud;
pub mod interface;
pub mod rand;
pub mod splat;
