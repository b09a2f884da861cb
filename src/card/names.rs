//! Names of the cards the turn engine and mulligan policy refer to directly.

pub const URZAS_MINE: &str = "Urza's Mine";
pub const URZAS_TOWER: &str = "Urza's Tower";
pub const URZAS_POWER_PLANT: &str = "Urza's Power Plant";

pub const FOREST: &str = "Forest";
pub const GHOST_QUARTER: &str = "Ghost Quarter";
pub const SANCTUM_OF_UGIN: &str = "Sanctum of Ugin";

pub const EXPEDITION_MAP: &str = "Expedition Map";
pub const CHROMATIC_STAR: &str = "Chromatic Star";
pub const CHROMATIC_SPHERE: &str = "Chromatic Sphere";
pub const RELIC_OF_PROGENITUS: &str = "Relic of Progenitus";
pub const SYLVAN_SCRYING: &str = "Sylvan Scrying";
pub const ANCIENT_STIRRINGS: &str = "Ancient Stirrings";

pub const KARN_LIBERATED: &str = "Karn Liberated";
pub const UGIN: &str = "Ugin, the Spirit Dragon";
pub const ULAMOG: &str = "Ulamog, the Ceaseless Hunger";
pub const WURMCOIL_ENGINE: &str = "Wurmcoil Engine";
pub const WALKING_BALLISTA: &str = "Walking Ballista";
pub const OBLIVION_STONE: &str = "Oblivion Stone";
