//! Bus scan results.

/// First 7-bit address checked by a scan (0x00-0x07 are reserved).
pub const SCAN_START_ADDR: u8 = 0x08;
/// Last 7-bit address checked by a scan (0x78-0x7F are reserved).
pub const SCAN_END_ADDR: u8 = 0x77;

/// Set of 7-bit addresses that acknowledged during a scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanResult {
    present: u128,
}

impl ScanResult {
    /// Creates an empty result.
    pub const fn new() -> Self {
        Self { present: 0 }
    }

    /// Marks `addr` as present. The R/W bit is ignored.
    pub fn insert(&mut self, addr: u8) {
        self.present |= 1 << (addr & 0x7F);
    }

    /// Returns true if `addr` acknowledged.
    pub const fn contains(&self, addr: u8) -> bool {
        addr <= 0x7F && (self.present & (1 << addr)) != 0
    }

    /// Number of addresses that acknowledged.
    pub const fn len(&self) -> usize {
        self.present.count_ones() as usize
    }

    /// Returns true if nothing acknowledged.
    pub const fn is_empty(&self) -> bool {
        self.present == 0
    }

    /// Iterates over the present addresses in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=0x7F).filter(|addr| self.contains(*addr))
    }
}

impl FromIterator<u8> for ScanResult {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        let mut result = Self::new();
        for addr in iter {
            result.insert(addr);
        }
        result
    }
}
