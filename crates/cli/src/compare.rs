//! Cross-check of the brute and fast results for one point set.
//!
//! The brute method reports every collinear 4-subset, the fast method every
//! maximal segment. They agree when each brute line lies inside a fast line and
//! each fast line of `m` points accounts for exactly C(m, 4) brute lines.

use collinear::{Line, Lines};
use serde::Serialize;

#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct Agreement {
    pub brute_lines: usize,
    pub fast_lines: usize,
    /// Brute lines not contained in any fast line.
    pub orphaned: Vec<String>,
    /// Fast lines whose 4-subsets are not all reported by brute.
    pub incomplete: Vec<String>,
}

impl Agreement {
    pub fn is_consistent(&self) -> bool {
        self.orphaned.is_empty() && self.incomplete.is_empty()
    }
}

pub fn check(brute: &Lines, fast: &Lines) -> Agreement {
    let orphaned = brute
        .iter()
        .filter(|b| !fast.iter().any(|f| b.is_subset(f)))
        .map(Line::to_string)
        .collect();
    let incomplete = fast
        .iter()
        .filter(|f| brute.iter().filter(|b| b.is_subset(f)).count() != choose4(f.len()))
        .map(Line::to_string)
        .collect();
    Agreement {
        brute_lines: brute.len(),
        fast_lines: fast.len(),
        orphaned,
        incomplete,
    }
}

fn choose4(m: usize) -> usize {
    if m < 4 {
        0
    } else {
        m * (m - 1) * (m - 2) * (m - 3) / 24
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use collinear::{Extractor, Point};

    #[test]
    fn extractor_results_agree() {
        let ex: Extractor = (0..6)
            .map(|t| Point::new(t, 2 * t))
            .chain([Point::new(5, 0), Point::new(-3, 7)])
            .collect();
        let a = check(&ex.lines_brute(), &ex.lines_fast());
        assert!(a.is_consistent(), "{a:?}");
        assert_eq!(a.fast_lines, 1);
        assert_eq!(a.brute_lines, 15);
    }

    #[test]
    fn missing_subsets_are_flagged() {
        let full: Line = (0..5).map(|t| Point::new(t, 0)).collect();
        let fast: Lines = [full].into_iter().collect();
        let mut brute = Lines::new();
        brute.insert((0..4).map(|t| Point::new(t, 0)).collect());
        brute.insert([0, 1, 2, 7].into_iter().map(|t| Point::new(t, 0)).collect());
        let a = check(&brute, &fast);
        assert!(!a.is_consistent());
        assert_eq!(a.orphaned, vec!["[(0, 0), (1, 0), (2, 0), (7, 0)]".to_string()]);
        assert_eq!(a.incomplete.len(), 1);
    }
}
