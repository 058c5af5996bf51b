pub struct BreakAnalysis {
    pub should_break: bool,
    pub remaining_height: f32,
}

/// Checks whether a child of `child_height` fits below `cursor_y`.
///
/// * `cursor_y`: position relative to the top of the content area.
/// * `content_height`: usable height of the page.
pub fn check_child_fit(cursor_y: f32, child_height: f32, content_height: f32) -> BreakAnalysis {
    let available = (content_height - cursor_y).max(0.0);
    // tolerate float drift from summed line heights
    const EPSILON: f32 = 0.01;
    BreakAnalysis {
        should_break: child_height > available + EPSILON,
        remaining_height: available,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_fit_does_not_break() {
        let analysis = check_child_fit(700.0, 61.89, 761.89);
        assert!(!analysis.should_break);
        assert!(check_child_fit(700.0, 62.0, 761.89).should_break);
    }

    #[test]
    fn remaining_never_negative() {
        let analysis = check_child_fit(800.0, 10.0, 761.89);
        assert_eq!(analysis.remaining_height, 0.0);
        assert!(analysis.should_break);
    }
}
