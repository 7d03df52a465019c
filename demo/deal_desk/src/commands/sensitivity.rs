//! Sensitivity command implementation

use crate::error::Result;
use lbo_pricing::sensitivity::{scenario_analysis, sensitivity_table};
use std::io::Write;

/// Default shocks for the sensitivity table.
pub const DEFAULT_SHOCKS: [f64; 5] = [-0.2, -0.1, 0.0, 0.1, 0.2];

/// Run the sensitivity command
pub fn run<W: Write>(base: f64, up: f64, down: f64, shocks: &[f64], out: &mut W) -> Result<()> {
    let outcome = scenario_analysis(base, up, down);
    writeln!(out, "Base value: {}", outcome.base)?;
    writeln!(out, "Upside (+{:.0}%): {:.2}", outcome.up_pct * 100.0, outcome.upside)?;
    writeln!(out, "Downside (-{:.0}%): {:.2}", outcome.down_pct * 100.0, outcome.downside)?;

    writeln!(out, "\nSensitivity Table:")?;
    for row in sensitivity_table(base, shocks) {
        writeln!(out, "Change {:+.0}%: {:.2}", row.shock * 100.0, row.value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output() {
        let mut out = Vec::new();
        run(100.0, 0.1, 0.1, &DEFAULT_SHOCKS, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Base value: 100\n\
             Upside (+10%): 110.00\n\
             Downside (-10%): 90.00\n\
             \n\
             Sensitivity Table:\n\
             Change -20%: 80.00\n\
             Change -10%: 90.00\n\
             Change +0%: 100.00\n\
             Change +10%: 110.00\n\
             Change +20%: 120.00\n"
        );
    }
}
