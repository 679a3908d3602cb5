//! Phone-number guard for parameter values.

use phonenumber::country;

/// Regions whose numbering plans are checked by default.
pub const DEFAULT_PHONE_REGIONS: &[&str] = &[
    "IN", "US", "BR", "ID", "MX", "PH", "VN", "TH", "TR", "GB", "FR", "DE",
];

/// Shortest and longest digit runs worth handing to the parser.
const MIN_DIGITS: usize = 7;
const MAX_DIGITS: usize = 17;

/// Detects values that contain a valid phone number in any configured region.
#[derive(Debug, Clone)]
pub struct PhoneGuard {
    regions: Vec<country::Id>,
}

impl Default for PhoneGuard {
    fn default() -> Self {
        let codes: Vec<String> = DEFAULT_PHONE_REGIONS.iter().map(|s| s.to_string()).collect();
        Self::new(&codes)
    }
}

impl PhoneGuard {
    /// Builds a guard from ISO 3166-1 alpha-2 region codes. Unknown codes
    /// are logged and skipped.
    pub fn new(region_codes: &[String]) -> Self {
        let mut regions = Vec::with_capacity(region_codes.len());
        for code in region_codes {
            match code.trim().to_ascii_uppercase().parse::<country::Id>() {
                Ok(id) => regions.push(id),
                Err(_) => tracing::warn!(code = %code, "unknown phone region, skipping"),
            }
        }
        Self { regions }
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// True if any phone-shaped run inside `value` parses as a valid number
    /// in at least one region.
    pub fn contains_phone_number(&self, value: &str) -> bool {
        candidates(value).into_iter().any(|c| {
            self.regions.iter().any(|region| {
                phonenumber::parse(Some(*region), c)
                    .map(|n| phonenumber::is_valid(&n))
                    .unwrap_or(false)
            })
        })
    }
}

/// Maximal runs of phone punctuation and digits with a plausible digit count.
fn candidates(value: &str) -> Vec<&str> {
    let is_phone_char = |c: char| c.is_ascii_digit() || "+-(). /".contains(c);
    value
        .split(|c: char| !is_phone_char(c))
        .map(|run| run.trim_matches(|c: char| !c.is_ascii_digit() && c != '+' && c != '('))
        .filter(|run| {
            let digits = run.chars().filter(|c| c.is_ascii_digit()).count();
            (MIN_DIGITS..=MAX_DIGITS).contains(&digits)
        })
        .collect()
}
