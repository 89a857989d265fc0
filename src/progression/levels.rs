//! Level curve: level L needs `L² × 100` XP.

use crate::core::XP_PER_LEVEL_UNIT;

fn isqrt(n: u64) -> u64 {
    let mut root = (n as f64).sqrt() as u64;
    while root * root > n {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root
}

/// `max(1, floor(sqrt(xp / 100)))`, in integer arithmetic.
pub fn level_for_xp(total_xp: u64) -> u32 {
    let level = isqrt(total_xp / XP_PER_LEVEL_UNIT);
    level.clamp(1, u64::from(u32::MAX)) as u32
}

pub fn xp_for_level(level: u32) -> u64 {
    let level = u64::from(level);
    level * level * XP_PER_LEVEL_UNIT
}

pub fn xp_for_next_level(current_level: u32) -> u64 {
    xp_for_level(current_level.saturating_add(1))
}

/// Percent of the way from the current level to the next, in `0..=100`.
pub fn level_progress(total_xp: u64) -> f64 {
    let level = level_for_xp(total_xp);
    let floor = xp_for_level(level);
    let ceiling = xp_for_next_level(level);
    let into_level = total_xp.saturating_sub(floor) as f64;
    (into_level / (ceiling - floor) as f64 * 100.0).clamp(0.0, 100.0)
}

pub fn level_title(level: u32) -> &'static str {
    match level {
        100.. => "Math God",
        76.. => "Math Legend",
        51.. => "Math Wizard",
        36.. => "Math Master",
        21.. => "Math Expert",
        11.. => "Math Enthusiast",
        6.. => "Math Student",
        _ => "Math Beginner",
    }
}

/// Compact XP display: `950`, `1.2K`, `3.4M`.
pub fn format_xp(xp: u64) -> String {
    if xp >= 1_000_000 {
        format!("{:.1}M", xp as f64 / 1_000_000.0)
    } else if xp >= 1_000 {
        format!("{:.1}K", xp as f64 / 1_000.0)
    } else {
        xp.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_level_curve_values() {
        assert_eq!(level_for_xp(0), 1);
        assert_eq!(level_for_xp(399), 1);
        assert_eq!(level_for_xp(400), 2);
        assert_eq!(level_for_xp(2_499), 4);
        assert_eq!(level_for_xp(2_500), 5);
        assert_eq!(xp_for_level(10), 10_000);
        assert_eq!(xp_for_next_level(4), 2_500);
    }

    #[test]
    fn test_level_progress() {
        assert_eq!(level_progress(0), 0.0);
        assert_eq!(level_progress(100), 0.0);
        // Level 2 spans 400..900
        assert!((level_progress(650) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_level_titles() {
        assert_eq!(level_title(1), "Math Beginner");
        assert_eq!(level_title(5), "Math Beginner");
        assert_eq!(level_title(6), "Math Student");
        assert_eq!(level_title(11), "Math Enthusiast");
        assert_eq!(level_title(21), "Math Expert");
        assert_eq!(level_title(36), "Math Master");
        assert_eq!(level_title(51), "Math Wizard");
        assert_eq!(level_title(76), "Math Legend");
        assert_eq!(level_title(100), "Math God");
    }

    #[test]
    fn test_format_xp() {
        assert_eq!(format_xp(950), "950");
        assert_eq!(format_xp(1_230), "1.2K");
        assert_eq!(format_xp(3_400_000), "3.4M");
    }

    proptest! {
        #[test]
        fn level_is_monotonic(a in 0u64..10_000_000, b in 0u64..10_000_000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(level_for_xp(lo) <= level_for_xp(hi));
        }

        #[test]
        fn level_round_trips(level in 1u32..5_000) {
            prop_assert_eq!(level_for_xp(xp_for_level(level)), level);
            if level >= 2 {
                prop_assert!(level_for_xp(xp_for_level(level) - 1) < level);
            }
        }

        #[test]
        fn progress_is_a_percentage(xp in 0u64..100_000_000) {
            let progress = level_progress(xp);
            prop_assert!((0.0..=100.0).contains(&progress));
        }
    }
}
