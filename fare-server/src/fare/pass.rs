//! Flat-rate day pass comparison.

/// Price of the one-day unlimited-ride pass in yen.
pub const DEFAULT_PASS_PRICE: u32 = 1300;

/// Which way of paying is cheaper for a journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PassVerdict {
    /// The summed leg fares exceed the pass price
    PassCheaper,
    /// The summed leg fares are below the pass price
    NormalCheaper,
    /// Both cost the same
    Equal,
}

impl PassVerdict {
    /// Stable identifier for serialisation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PassVerdict::PassCheaper => "pass_cheaper",
            PassVerdict::NormalCheaper => "normal_cheaper",
            PassVerdict::Equal => "equal",
        }
    }
}

/// Result of comparing a journey's total fare against a flat-rate pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassComparison {
    /// Pass price in yen
    pub pass_price: u32,
    /// Which option is cheaper
    pub verdict: PassVerdict,
    /// How many yen the cheaper option saves
    pub savings: u32,
}

impl PassComparison {
    /// Compare a total fare against a pass price.
    pub fn compare(total_fare: u32, pass_price: u32) -> Self {
        let verdict = match total_fare.cmp(&pass_price) {
            std::cmp::Ordering::Greater => PassVerdict::PassCheaper,
            std::cmp::Ordering::Less => PassVerdict::NormalCheaper,
            std::cmp::Ordering::Equal => PassVerdict::Equal,
        };

        Self {
            pass_price,
            verdict,
            savings: total_fare.abs_diff(pass_price),
        }
    }
}
