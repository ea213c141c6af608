mod csl_select;
mod icon;
mod setting_item;

pub use csl_select::CslStyleSelect;
pub use icon::Icon;
pub use setting_item::{SettingItem, SettingItemInfo};
