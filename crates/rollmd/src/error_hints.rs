use anyhow::Error;

pub(crate) fn format(err: &Error) -> String {
    let mut out = format!("Error: {err:#}");
    let hints = suggestions(err);
    if !hints.is_empty() {
        out.push_str("\n\nHints:\n");
        for hint in hints {
            out.push_str("- ");
            out.push_str(&hint);
            out.push('\n');
        }
    }
    out
}

fn suggestions(err: &Error) -> Vec<String> {
    let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
    let haystack = chain.join(" | ").to_ascii_lowercase();
    let mut out: Vec<String> = Vec::new();

    if haystack.contains("input path does not exist")
        || haystack.contains("no such file or directory")
    {
        push_hint(&mut out, "Verify the input path exists and is readable.");
        push_hint(
            &mut out,
            "Use an absolute path to avoid working-directory confusion.",
        );
    }

    if haystack.contains("entry count mismatch") {
        push_hint(
            &mut out,
            "An entry header was found that did not parse into a record; review the warnings above.",
        );
        push_hint(
            &mut out,
            "Check header spelling and indentation: entries start with `- 1x NAME` or `- Filmstock: NAME`.",
        );
        push_hint(
            &mut out,
            "No output was written; the input file is untouched.",
        );
    }

    if haystack.contains("writing output file") || haystack.contains("creating output directory") {
        push_hint(
            &mut out,
            "Check that the output location is writable and has free space.",
        );
    }

    out
}

fn push_hint(out: &mut Vec<String>, hint: &str) {
    let owned = hint.to_string();
    if !out.contains(&owned) {
        out.push(owned);
    }
}
