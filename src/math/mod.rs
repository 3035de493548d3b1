pub mod factorial;
pub mod prime;
