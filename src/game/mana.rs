/// Mana available for the rest of the turn.
///
/// `generic` is the whole pool; `green` is how much of it is green, so
/// `green <= generic` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManaPool {
    pub generic: u32,
    pub green: u32,
}

impl ManaPool {
    pub fn new() -> Self {
        ManaPool { generic: 0, green: 0 }
    }

    /// Pool produced by untapping `lands`, of which `green_sources` tap for green
    pub fn from_lands(lands: u32, green_sources: u32) -> Self {
        ManaPool {
            generic: lands,
            green: green_sources.min(lands),
        }
    }

    /// Add mana; green mana counts toward the generic total too
    pub fn add(&mut self, amount: u32, green: bool) {
        self.generic += amount;
        if green {
            self.green += amount;
        }
    }

    /// Non-green mana left in the pool
    pub fn colorless(&self) -> u32 {
        self.generic - self.green
    }

    /// Check if we can pay a cost of `total` mana, `green` of it green
    pub fn can_pay(&self, total: u32, green: u32) -> bool {
        green <= total && self.generic >= total && self.green >= green
    }

    /// Pay a cost from the pool.
    /// The non-green part of the cost is paid with non-green mana first.
    pub fn pay(&mut self, total: u32, green: u32) -> bool {
        if !self.can_pay(total, green) {
            return false;
        }

        let other = total - green;
        let green_spill = other.saturating_sub(self.colorless());

        self.generic -= total;
        self.green -= green + green_spill;

        true
    }
}
