use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::TransformCategory;
use crate::rule::Rule;

/// Marker for test cases where no candidate is expected.
const NO_CANDIDATE: &str = "-";

pub struct TestCase {
    form: String,
    expected: Option<String>,
}

fn read_test_cases<R>(buf_read: R) -> Vec<TestCase>
where
    R: BufRead,
{
    let mut test_cases = Vec::new();

    for line in buf_read.lines() {
        let line = line.unwrap();
        let line_str = line.trim();

        // Skip empty lines
        if line_str.is_empty() {
            continue;
        }

        // Skip comments
        if line_str.starts_with('#') {
            continue;
        }

        let mut iter = line_str.split_whitespace();
        let form = iter.next().unwrap().to_owned();
        let expected = iter
            .next()
            .unwrap_or_else(|| panic!("Expected candidate missing: {}", line_str));

        test_cases.push(TestCase {
            form,
            expected: if expected == NO_CANDIDATE {
                None
            } else {
                Some(expected.to_owned())
            },
        });
    }

    test_cases
}

fn open_test_cases<P>(filename: P) -> Vec<TestCase>
where
    P: AsRef<Path>,
{
    let f = File::open(filename).unwrap();
    read_test_cases(BufReader::new(f))
}

/// Check the candidate of a single rule for each test case.
pub fn run_test_cases<P>(filename: P, rule: &Rule)
where
    P: AsRef<Path>,
{
    for test_case in open_test_cases(filename) {
        assert_eq!(
            test_case.expected,
            rule.apply(&test_case.form),
            "form: {}",
            test_case.form
        );
    }
}

/// Check that the expected lemma is among the candidates of a category.
pub fn run_category_test_cases<P>(filename: P, category: &TransformCategory)
where
    P: AsRef<Path>,
{
    for test_case in open_test_cases(filename) {
        let candidates = category
            .candidates(&test_case.form)
            .map(|(_, candidate)| candidate)
            .collect::<Vec<_>>();

        match test_case.expected {
            Some(expected) => assert!(
                candidates.contains(&expected),
                "form: {}, candidates: {:?}",
                test_case.form,
                candidates
            ),
            None => assert!(
                candidates.is_empty(),
                "form: {}, candidates: {:?}",
                test_case.form,
                candidates
            ),
        }
    }
}
