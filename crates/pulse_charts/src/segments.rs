/// Return contiguous runs of present entries.
///
/// This is used to "break" lines for missing data: every absent entry closes
/// the current run. The returned ranges are half-open: `[start, end)`.
pub fn runs_by_gap<I>(present: I, out: &mut Vec<(usize, usize)>)
where
    I: IntoIterator<Item = bool>,
{
    out.clear();

    let mut start: Option<usize> = None;
    let mut len = 0usize;
    for (i, is_present) in present.into_iter().enumerate() {
        len = i + 1;
        match (is_present, start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                out.push((s, i));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        out.push((s, len));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runs(mask: &[bool]) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        runs_by_gap(mask.iter().copied(), &mut out);
        out
    }

    #[test]
    fn runs_single_segment_when_no_gaps() {
        assert_eq!(runs(&[true, true, true]), vec![(0, 3)]);
    }

    #[test]
    fn runs_split_on_gap() {
        assert_eq!(runs(&[true, true, false, true, true]), vec![(0, 2), (3, 5)]);
        assert_eq!(
            runs(&[false, true, false, false, true]),
            vec![(1, 2), (4, 5)]
        );
    }

    #[test]
    fn runs_handle_edge_cases() {
        assert!(runs(&[]).is_empty());
        assert!(runs(&[false, false]).is_empty());
        assert_eq!(runs(&[true]), vec![(0, 1)]);
    }
}
