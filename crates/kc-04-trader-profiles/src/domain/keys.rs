use shared_types::keys::prefixed;
use shared_types::{Address, KeyLayout};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileKeys {
    pub params: Vec<u8>,
    /// `profile_prefix || address`
    pub profile_prefix: Vec<u8>,
}

impl Default for ProfileKeys {
    fn default() -> Self {
        Self {
            params: vec![0x20],
            profile_prefix: vec![0x21],
        }
    }
}

impl ProfileKeys {
    pub fn profile_key(&self, address: &Address) -> Vec<u8> {
        prefixed(&self.profile_prefix, address.as_bytes())
    }

    pub fn layout(&self) -> KeyLayout {
        KeyLayout::new()
            .with("social_params", self.params.clone())
            .with("trader_profile", self.profile_prefix.clone())
    }
}
