use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

use super::collect_text;
use crate::error::LookupError;

static ENTRY_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".Entry").unwrap());
static HEAD_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span.Head").unwrap());
static HYPHENATION_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.HYPHENATION").unwrap());
static PRON_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.Head > span.PronCodes").unwrap());
static POS_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span.POS").unwrap());
static GRAM_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span.GRAM").unwrap());
static REGISTER_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.REGISTERLAB").unwrap());
static SENSE_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".Sense").unwrap());
static SUBSENSE_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".Subsense").unwrap());
static DEF_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".DEF").unwrap());
static FULLFORM_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".DEF + .FULLFORM").unwrap());

/// Smallest unit of meaning: one definition text, never empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubSense {
    pub definition: String,
}

/// A grouped meaning under an entry. The signpost labels the topic of the
/// group and may be empty; `subsenses` may be empty when every nested
/// definition under an explicit subsense group turned out blank.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sense {
    pub signpost: String,
    pub subsenses: Vec<SubSense>,
}

/// One headword variant on a dictionary page. A page holds several entries
/// for homographs and distinct parts of speech of the same spelling.
/// `hyphenated_text` is the structural anchor; every other head field is
/// decorative and defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub hyphenated_text: String,
    #[serde(rename = "IPA")]
    pub ipa: String,
    pub part_of_speech: String,
    pub grammar_notes: String,
    pub register_label: String,
    pub senses: Vec<Sense>,
}

/// Extract every entry on a dictionary page, in document order.
///
/// Containers without a hyphenation node are structural fragments and are
/// skipped. Fails only when the body is not a parseable document.
pub fn extract_entries(body: &[u8]) -> Result<Vec<Entry>, LookupError> {
    let markup = std::str::from_utf8(body)?;
    let doc = Html::parse_document(markup);

    let mut entries = Vec::new();
    for container in doc.select(&ENTRY_SEL) {
        let Some(head) = container.select(&HEAD_SEL).next() else {
            continue;
        };
        let hyphenated_text = collect_text(head, &HYPHENATION_SEL);
        if hyphenated_text.is_empty() {
            continue;
        }

        entries.push(Entry {
            hyphenated_text,
            ipa: collect_text(head, &PRON_SEL),
            part_of_speech: collect_text(head, &POS_SEL),
            grammar_notes: trim_brackets(&collect_text(head, &GRAM_SEL)).to_string(),
            register_label: collect_text(head, &REGISTER_SEL),
            senses: extract_senses(container),
        });
    }

    Ok(entries)
}

fn extract_senses(container: ElementRef<'_>) -> Vec<Sense> {
    let mut senses = Vec::new();
    for sense_node in container.select(&SENSE_SEL) {
        let subsense_nodes: Vec<_> = sense_node.select(&SUBSENSE_SEL).collect();

        if subsense_nodes.is_empty() {
            // No explicit subsense markup: the sense node itself is the
            // single unit of meaning, and it is dropped whole when its
            // definition is blank.
            let definition = definition_text(sense_node);
            if definition.is_empty() {
                continue;
            }
            senses.push(Sense {
                signpost: sense_signpost(sense_node),
                subsenses: vec![SubSense { definition }],
            });
        } else {
            // Blank nested definitions drop individually; the sense stays
            // even when none survive.
            let subsenses = subsense_nodes
                .into_iter()
                .map(definition_text)
                .filter(|d| !d.is_empty())
                .map(|definition| SubSense { definition })
                .collect();
            senses.push(Sense {
                signpost: sense_signpost(sense_node),
                subsenses,
            });
        }
    }
    senses
}

/// Definition text of a sense or subsense node: the `.DEF` text joined with
/// an immediately following full-form expansion, whitespace-trimmed.
fn definition_text(scope: ElementRef<'_>) -> String {
    let definition = collect_text(scope, &DEF_SEL);
    if definition.is_empty() {
        return definition;
    }
    let full_form = collect_text(scope, &FULLFORM_SEL);
    if full_form.is_empty() {
        definition
    } else {
        format!("{} {}", definition, full_form)
    }
}

// No captured page populates the signpost markup yet.
// TODO: extract the real text once a fixture with a non-empty signpost exists.
fn sense_signpost(_sense_node: ElementRef<'_>) -> String {
    String::new()
}

fn trim_brackets(s: &str) -> &str {
    let s = s.strip_prefix('[').unwrap_or(s);
    s.strip_suffix(']').unwrap_or(s)
}

// ── Tests ──
