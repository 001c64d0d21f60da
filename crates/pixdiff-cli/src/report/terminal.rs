use std::time::Duration;

use super::Report;

pub fn format_duration(d: Duration) -> String {
    let ms = d.as_millis();
    if ms < 1000 {
        format!("{ms}ms")
    } else {
        format!("{:.1}s", d.as_secs_f64())
    }
}

/// One-line verdict, ANSI colored.
pub fn format_verdict(report: &Report) -> String {
    let name = format!("{} vs {}", report.left.display(), report.right.display());
    let time_suffix = format!(
        "  \x1b[2m{} {}\x1b[0m",
        report.engine,
        format_duration(report.elapsed)
    );

    if let Some(m) = report.dimension_mismatch {
        let (lw, lh) = m.left;
        let (rw, rh) = m.right;
        return format!(
            "  \x1b[31mFAIL\x1b[0m  {name}  (dimensions differ: {lw}x{lh} vs {rw}x{rh}){time_suffix}"
        );
    }

    if report.different {
        format!(
            "  \x1b[31mFAIL\x1b[0m  {name}  ({} of {} pixels, {:.4}){time_suffix}",
            report.diff_pixels, report.total_pixels, report.score
        )
    } else {
        format!("  \x1b[32mPASS\x1b[0m  {name}{time_suffix}")
    }
}

pub fn print_verdict(report: &Report) {
    println!("{}", format_verdict(report));
    if let Some(path) = &report.diff_image {
        println!("        \x1b[2mdiff image: {}\x1b[0m", path.display());
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pixdiff::DimensionMismatch;

    use super::*;

    fn report(different: bool, diff_pixels: u64) -> Report {
        Report {
            left: PathBuf::from("ref.png"),
            right: PathBuf::from("cur.png"),
            engine: "exact".to_string(),
            different,
            diff_pixels,
            total_pixels: 100,
            score: diff_pixels as f64 / 100.0,
            dimension_mismatch: None,
            diff_image: None,
            elapsed: Duration::from_millis(12),
        }
    }

    #[test]
    fn pass_line() {
        let line = format_verdict(&report(false, 0));
        assert!(line.contains("PASS"));
        assert!(line.contains("ref.png vs cur.png"));
        assert!(line.contains("12ms"));
    }

    #[test]
    fn fail_line_shows_counts() {
        let line = format_verdict(&report(true, 7));
        assert!(line.contains("FAIL"));
        assert!(line.contains("7 of 100 pixels, 0.0700"));
    }

    #[test]
    fn fail_line_shows_dimensions() {
        let mut r = report(true, 0);
        r.dimension_mismatch = Some(DimensionMismatch {
            left: (10, 10),
            right: (10, 12),
        });
        assert!(format_verdict(&r).contains("dimensions differ: 10x10 vs 10x12"));
    }

    #[test]
    fn durations() {
        assert_eq!(format_duration(Duration::from_millis(999)), "999ms");
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.5s");
    }
}
