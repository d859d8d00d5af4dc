use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use lexmax::filter_redundant;
use serde::Deserialize;

/// Run the filter against a JSON case file and report pass/fail per case.
#[derive(Parser)]
#[command(name = "case_runner")]
struct Args {
    /// Case file: {"test_cases": [{id, category, input, expected, ...}]}.
    /// Falls back to a small embedded set when omitted.
    cases: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct TestCase {
    id: i32,
    category: String,
    input: Vec<String>,
    expected: Vec<String>,
    #[serde(default)]
    explanation: String,
}

#[derive(Debug, Deserialize)]
struct CaseFile {
    test_cases: Vec<TestCase>,
}

fn embedded_cases() -> Vec<TestCase> {
    let case = |id, category: &str, input: &[&str], expected: &[&str], explanation: &str| TestCase {
        id,
        category: category.into(),
        input: input.iter().map(|s| s.to_string()).collect(),
        expected: expected.iter().map(|s| s.to_string()).collect(),
        explanation: explanation.into(),
    };
    vec![
        case(1, "basic", &["a", "ab", "ba", "abc", "abcd"], &["abcd"], "chain with anagrams"),
        case(2, "basic", &["cat", "dog", "bird"], &["cat", "dog", "bird"], "no anagrams"),
        case(3, "basic", &["a", "aa", "aaa"], &["aaa"], "same letter chain"),
        case(4, "edge", &[], &[], "empty input"),
        case(5, "edge", &["ab", "ba"], &[], "two anagrams"),
        case(6, "mixed", &["listen", "silent", "enlist"], &[], "all anagrams"),
        case(7, "mixed", &["eat", "tea", "ate", "eating"], &["eating"], "anagrams plus sub"),
        case(8, "sub_anagram", &["aab", "ab", "a"], &["aab"], "frequency matters"),
    ]
}

fn load_cases(path: Option<&PathBuf>) -> Result<Vec<TestCase>, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            let file: CaseFile = serde_json::from_str(&content)?;
            Ok(file.test_cases)
        }
        None => Ok(embedded_cases()),
    }
}

fn main() {
    let args = Args::parse();
    let cases = match load_cases(args.cases.as_ref()) {
        Ok(cases) => cases,
        Err(e) => {
            eprintln!("failed to load cases: {e}");
            std::process::exit(1);
        }
    };

    println!("Running {} cases...", cases.len());
    let mut passed = 0usize;
    let mut failed = 0usize;

    for case in &cases {
        let got: BTreeSet<String> = match filter_redundant(&case.input) {
            Ok(words) => words.into_iter().collect(),
            Err(e) => {
                println!("✗ case {}: {} - filter failed: {e}", case.id, case.category);
                failed += 1;
                continue;
            }
        };
        let expected: BTreeSet<String> = case.expected.iter().cloned().collect();

        if got == expected {
            println!("✓ case {}: {} - {}", case.id, case.category, case.explanation);
            passed += 1;
        } else {
            println!("✗ case {}: {} - {}", case.id, case.category, case.explanation);
            println!("  input:    {:?}", case.input);
            println!("  expected: {:?}", expected);
            println!("  got:      {:?}", got);
            failed += 1;
        }
    }

    println!();
    println!("Results: {passed} passed, {failed} failed");
    if failed > 0 {
        std::process::exit(1);
    }
}
