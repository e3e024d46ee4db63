/// Block-level contract used by the driver. Implementations are pure: both
/// directions are total functions of the block and the instance's key
/// material, so a shared instance may serve concurrent callers.
pub trait BlockCipher {
    fn encrypt_block(&self, block: u64) -> u64;
    fn decrypt_block(&self, block: u64) -> u64;
    fn block_size(&self) -> usize;
}
