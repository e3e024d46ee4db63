pub mod crypto;

pub use crypto::cipher_context::*;
pub use crypto::cipher_traits::*;
pub use crypto::cipher_types::*;
pub use crypto::des::Des;
pub use crypto::utils::{apply_padding, remove_padding};
