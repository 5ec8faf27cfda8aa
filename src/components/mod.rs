pub mod icons;
pub mod layout;
pub mod notice;
pub mod sidebar;
pub mod stat_card;
