use std::fs;

use mixcalc::{evaluate, is_blank};
use walkdir::WalkDir;

/// Runs every `tests/scripts/**/*.calc` file. Each non-blank line reads
/// `<expression> => <expected>`, where expected is a number, `inf`, `-inf`,
/// `NaN`, or `error: <variant>`.
#[test]
fn script_files_evaluate_as_annotated() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, line) in content.lines().enumerate() {
            if is_blank(line) {
                continue;
            }
            let (expression, expected) =
                line.split_once(" => ")
                    .unwrap_or_else(|| panic!("{path:?}:{} is missing ' => '", i + 1));
            count += 1;
            check(expression, expected.trim())
                .unwrap_or_else(|message| panic!("{path:?}:{}: {expression:?}: {message}", i + 1));
        }
    }

    assert!(count > 0, "No cases found in tests/scripts");
}

fn check(expression: &str, expected: &str) -> Result<(), String> {
    let result = evaluate(expression);

    if let Some(variant) = expected.strip_prefix("error: ") {
        return match result {
            Err(e) if format!("{e:?}").starts_with(variant) => Ok(()),
            other => Err(format!("expected error {variant}, got {other:?}")),
        };
    }

    let value = result.map_err(|e| format!("expected {expected}, got error {e}"))?;
    let matches = match expected {
        "NaN" => value.is_nan(),
        _ => {
            let wanted: f64 = expected.parse()
                                      .map_err(|_| format!("bad expectation {expected:?}"))?;
            value == wanted
        },
    };

    if matches {
        Ok(())
    } else {
        Err(format!("expected {expected}, got {value}"))
    }
}
