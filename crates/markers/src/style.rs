/// Hourly wage at or above which a marker is in the premium band.
pub const PREMIUM_WAGE: f64 = 60.0;
pub const HIGH_WAGE: f64 = 50.0;
pub const MEDIUM_WAGE: f64 = 40.0;

/// Legend band for a cluster's average wage.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WageBand {
    Premium,
    High,
    Medium,
    Entry,
}

impl WageBand {
    pub fn for_wage(wage: f64) -> Self {
        if wage >= PREMIUM_WAGE {
            WageBand::Premium
        } else if wage >= HIGH_WAGE {
            WageBand::High
        } else if wage >= MEDIUM_WAGE {
            WageBand::Medium
        } else {
            WageBand::Entry
        }
    }

    /// Marker fill, as a CSS hex color.
    pub fn fill_color(&self) -> &'static str {
        match self {
            WageBand::Premium => "#059669",
            WageBand::High => "#2563eb",
            WageBand::Medium => "#7c3aed",
            WageBand::Entry => "#dc2626",
        }
    }
}

/// Formats an hourly wage as a label, e.g. `$1,250/hr`.
///
/// Whole dollars only, thousands-grouped.
pub fn format_wage_per_hour(wage: f64) -> String {
    let dollars = wage.round() as i64;
    format!("${}/hr", group_thousands(dollars))
}

fn group_thousands(mut n: i64) -> String {
    let negative = n < 0;
    n = n.abs();
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if negative {
        format!("-{out}")
    } else {
        out
    }
}
