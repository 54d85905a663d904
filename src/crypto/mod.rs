pub mod bit_vector;
pub mod block_cipher;
pub mod cipher_engine;
pub mod cipher_errors;
pub mod cipher_traits;
pub mod key_schedule;
pub mod round_function;
pub mod table_set;

pub(crate) mod des_tables;
pub(crate) mod toy_tables;
