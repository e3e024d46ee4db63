pub trait KeyExpansion {
    fn generate_subkeys(&self, key: u64) -> Vec<u64>;
}
