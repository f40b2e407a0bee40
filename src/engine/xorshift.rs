/// Seeded 4-lane xorshift stream driving every draw in a generation run.
///
/// Each run owns its own instance; there is no process-wide engine, so
/// concurrent generations never contaminate each other's streams.
///
/// All lane arithmetic is 32-bit signed with wraparound (`wrapping_*`, and
/// `>>` on `i32` is arithmetic). The wrap is load-bearing: widening or
/// saturating here would diverge from the reference sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct XorshiftLanes {
    lanes: [i32; 4],
}

impl XorshiftLanes {
    /// An engine with all-zero lanes, equivalent to seeding with "".
    ///
    /// The all-zero state is a fixed point: every draw yields 0.0.
    pub fn new() -> Self {
        Self { lanes: [0; 4] }
    }

    /// Convenience for `new` followed by [`seed`](Self::seed).
    pub fn from_seed(text: &str) -> Self {
        let mut engine = Self::new();
        engine.seed(text);
        engine
    }

    /// Folds every UTF-16 code unit of `text` into the lanes.
    ///
    /// Each unit perturbs one lane via `lane = (lane << 5) - lane + code`
    /// (multiply-by-31 accumulation), cycling lanes 0..4 in input order.
    /// Lanes persist across calls: seeding twice perturbs the existing state
    /// further rather than restarting it.
    pub fn seed(&mut self, text: &str) {
        for (i, code) in text.encode_utf16().enumerate() {
            let lane = self.lanes[i % 4];
            self.lanes[i % 4] = lane
                .wrapping_shl(5)
                .wrapping_sub(lane)
                .wrapping_add(i32::from(code));
        }
    }

    /// Advances the stream one step and returns `unsigned(lane3) / 2^31`.
    ///
    /// Nominally in [0, 1); draws land in [1, 2) when the new lane3 is
    /// negative, and downstream consumers wrap or clamp accordingly.
    pub fn next_f64(&mut self) -> f64 {
        let t = self.lanes[0] ^ self.lanes[0].wrapping_shl(11);
        self.lanes[0] = self.lanes[1];
        self.lanes[1] = self.lanes[2];
        self.lanes[2] = self.lanes[3];
        self.lanes[3] = self.lanes[3] ^ (self.lanes[3] >> 19) ^ t ^ (t >> 8);
        f64::from(self.lanes[3] as u32) / f64::from(1u32 << 31)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/xorshift.rs"]
mod tests;
