use std::io::{self, Write};

use crate::parser::entry::Entry;

const WRAP_WIDTH: usize = 80;

/// Write one entry: head line, then every definition as an indented bullet.
pub fn write_entry(out: &mut impl Write, entry: &Entry) -> io::Result<()> {
    write!(out, "  {}", entry.hyphenated_text)?;
    if !entry.ipa.is_empty() {
        write!(out, " {}", entry.ipa)?;
    }
    write!(out, " -")?;
    if !entry.part_of_speech.is_empty() {
        write!(out, " {}", entry.part_of_speech)?;
    }
    if !entry.grammar_notes.is_empty() {
        write!(out, " [{}]", entry.grammar_notes)?;
    }
    if !entry.register_label.is_empty() {
        write!(out, " {}", entry.register_label)?;
    }
    writeln!(out)?;

    for sense in &entry.senses {
        for subsense in &sense.subsenses {
            write_definition(out, &subsense.definition)?;
        }
    }
    writeln!(out)
}

pub fn write_no_entries(out: &mut impl Write, query: &str) -> io::Result<()> {
    writeln!(
        out,
        "No entries found for '{}'. Check spelling or remove filters.",
        query
    )
}

pub fn write_suggestions(
    out: &mut impl Write,
    query: &str,
    suggestions: &[String],
) -> io::Result<()> {
    writeln!(out, "'{}' is not spelled correctly. Did you mean:", query)?;
    for suggestion in suggestions {
        writeln!(out, "  - {}", suggestion)?;
    }
    Ok(())
}

fn write_definition(out: &mut impl Write, definition: &str) -> io::Result<()> {
    let lines = wrap_lines(definition, WRAP_WIDTH);
    let Some((first, rest)) = lines.split_first() else {
        return Ok(());
    };
    writeln!(out, "  + {}", first)?;
    for line in rest {
        writeln!(out, "    {}", line)?;
    }
    Ok(())
}

fn wrap_lines(s: &str, width: usize) -> Vec<String> {
    let mut fields = s.split_whitespace();
    let Some(first) = fields.next() else {
        return Vec::new();
    };

    let mut lines = Vec::new();
    let mut current = first.to_string();
    for field in fields {
        if current.len() + field.len() < width {
            current.push(' ');
            current.push_str(field);
        } else {
            lines.push(current);
            current = field.to_string();
        }
    }
    lines.push(current);
    lines
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::entry::{Sense, SubSense};

    fn rendered(entry: &Entry) -> String {
        let mut buf = Vec::new();
        write_entry(&mut buf, entry).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn full_head_line() {
        let entry = Entry {
            hyphenated_text: "buck‧et".into(),
            ipa: "/ˈbʌkɪt/".into(),
            part_of_speech: "noun".into(),
            grammar_notes: "countable".into(),
            register_label: "informal".into(),
            senses: vec![],
        };
        let text = rendered(&entry);
        assert!(text.starts_with("  buck‧et /ˈbʌkɪt/ - noun [countable] informal\n"));
    }

    #[test]
    fn empty_head_fields_are_omitted() {
        let entry = Entry {
            hyphenated_text: "run".into(),
            ..Default::default()
        };
        assert!(rendered(&entry).starts_with("  run -\n"));
    }

    #[test]
    fn definitions_render_as_bullets() {
        let entry = Entry {
            hyphenated_text: "gap".into(),
            senses: vec![Sense {
                signpost: String::new(),
                subsenses: vec![
                    SubSense { definition: "a space between two things".into() },
                    SubSense { definition: "a difference".into() },
                ],
            }],
            ..Default::default()
        };
        let text = rendered(&entry);
        assert!(text.contains("  + a space between two things\n"));
        assert!(text.contains("  + a difference\n"));
    }

    #[test]
    fn long_definitions_wrap_with_continuation_indent() {
        let definition = "word ".repeat(40);
        let entry = Entry {
            hyphenated_text: "x".into(),
            senses: vec![Sense {
                signpost: String::new(),
                subsenses: vec![SubSense { definition }],
            }],
            ..Default::default()
        };
        let text = rendered(&entry);
        let wrapped: Vec<&str> = text.lines().filter(|l| l.starts_with("    ")).collect();
        assert!(!wrapped.is_empty());
        assert!(text.lines().all(|l| l.len() <= WRAP_WIDTH + 4));
    }

    #[test]
    fn wrap_lines_empty_input() {
        assert!(wrap_lines("   ", 80).is_empty());
    }

    #[test]
    fn wrap_lines_keeps_short_text_on_one_line() {
        assert_eq!(wrap_lines("one two three", 80), vec!["one two three"]);
    }

    #[test]
    fn no_entries_message() {
        let mut buf = Vec::new();
        write_no_entries(&mut buf, "bucket").unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "No entries found for 'bucket'. Check spelling or remove filters.\n"
        );
    }

    #[test]
    fn suggestion_list() {
        let mut buf = Vec::new();
        write_suggestions(&mut buf, "berr", &["berry".into(), "beery".into()]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("'berr' is not spelled correctly."));
        assert!(text.contains("  - berry\n"));
        assert!(text.contains("  - beery\n"));
    }
}
