pub mod f16;
pub mod header;
pub mod record;
pub mod stream;
