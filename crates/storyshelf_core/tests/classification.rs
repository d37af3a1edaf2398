use storyshelf_core::scan::classify::{is_year_name, EXCLUDED_KEYWORDS};
use storyshelf_core::title::title_from_line;
use storyshelf_core::{extract_title, Month, UNTITLED};

const PREFIXES: &[&str] = &["", "notes-", "Trip_", "a b "];
const YEARS: &[&str] = &["1999", "2023", "0000", "98765"];
const SUFFIXES: &[&str] = &["", "_archive", " (old)", "-v2"];

fn case_variants(word: &str) -> Vec<String> {
    let alternating: String = word
        .chars()
        .enumerate()
        .map(|(index, ch)| {
            if index % 2 == 0 {
                ch.to_ascii_uppercase()
            } else {
                ch
            }
        })
        .collect();
    vec![word.to_string(), word.to_ascii_uppercase(), alternating]
}

#[test]
fn names_with_year_and_no_keyword_are_years() {
    for prefix in PREFIXES {
        for year in YEARS {
            for suffix in SUFFIXES {
                let name = format!("{prefix}{year}{suffix}");
                assert!(is_year_name(&name), "expected year: {name}");
            }
        }
    }
}

#[test]
fn names_with_any_keyword_casing_are_not_years() {
    for keyword in EXCLUDED_KEYWORDS {
        for variant in case_variants(keyword) {
            for year in YEARS {
                for name in [
                    format!("{year}{variant}"),
                    format!("{variant}{year}"),
                    format!("{year}_{variant}_x"),
                ] {
                    assert!(!is_year_name(&name), "expected skip: {name}");
                }
            }
        }
    }
}

#[test]
fn names_without_four_digits_are_not_years() {
    for name in ["", "abc", "123", "12-34", "２０２３", "year"] {
        assert!(!is_year_name(name), "expected skip: {name}");
    }
}

#[test]
fn wrapped_heading_yields_trimmed_title() {
    for text in ["X", "My Trip", "  spaced  ", "with # inside", "日本語"] {
        let document = format!("preamble\n# {text} #\nbody\n");
        assert_eq!(
            extract_title(document.as_bytes()).unwrap(),
            text.trim(),
            "document: {document:?}"
        );
    }
}

#[test]
fn documents_without_wrapped_heading_are_untitled() {
    for document in ["", "# Open heading\n", "##\n", "text\n#no space#\n"] {
        assert_eq!(extract_title(document.as_bytes()).unwrap(), UNTITLED);
        assert!(document.lines().all(|line| title_from_line(line).is_none()));
    }
}

#[test]
fn every_month_abbreviation_parses_in_any_case() {
    for month in Month::ALL {
        for variant in case_variants(month.abbreviation()) {
            assert_eq!(Month::parse_abbreviation(&variant), Some(month));
            assert_eq!(Month::parse_abbreviation(&variant.to_lowercase()), Some(month));
        }
    }
}
