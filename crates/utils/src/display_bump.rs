use versync_core::{BumpType, Version};

pub fn display_bump(current: &Version, bump_type: BumpType) -> String {
    format!("{} → {}", current, current.bump(bump_type))
}
