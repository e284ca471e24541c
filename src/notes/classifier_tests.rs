#![cfg(test)]
use crate::*;

fn rejoin(blocks: &[ContentBlock<'_>]) -> String {
    blocks.iter().map(|b| b.content).collect::<Vec<_>>().join("\n")
}

/// Notes shaped like the ones shown in the deck's info panels.
const PANEL_NOTES: &str = "\
Selgita, et normaliseerimine vähendab dubleerimist.

Näide:
CREATE TABLE tellimused (
  id SERIAL PRIMARY KEY,
  klient_id INT REFERENCES kliendid(id) ON DELETE CASCADE,
  summa DECIMAL(10, 2)
);

Küsi õpilastelt, miks FOREIGN KEY on vajalik.
SELECT k.nimi, COUNT(*)
FROM kliendid k
JOIN tellimused t ON t.klient_id = k.id
GROUP BY k.nimi;
Lõpuks räägi ACID omadustest.";

#[test]
fn panel_notes_alternate_prose_and_sql() {
    common_init();
    let blocks = classify_content_blocks(PANEL_NOTES);
    let kinds = blocks.iter().map(|b| b.kind).collect::<Vec<_>>();
    assert_eq!(
        kinds,
        [
            BlockKind::Text,
            BlockKind::Sql,
            BlockKind::Text,
            BlockKind::Sql,
            BlockKind::Text,
        ]
    );
    assert!(blocks[1].content.starts_with("CREATE TABLE tellimused ("));
    assert!(blocks[1].content.ends_with(");\n"));
    assert_eq!(blocks[2].content, "Küsi õpilastelt, miks FOREIGN KEY on vajalik.");
    assert_eq!(blocks[4].content, "Lõpuks räägi ACID omadustest.");
    assert_eq!(rejoin(&blocks), PANEL_NOTES);
}

#[rstest]
#[case("")]
#[case("\n")]
#[case("\n\n\n")]
#[case("SELECT 1;\n\n\nTekst\n\n")]
#[case(PANEL_NOTES)]
fn reconstructs_input(#[case] notes: &str) {
    assert_eq!(rejoin(&classify_content_blocks(notes)), notes);
}

#[test]
fn random_notes_are_lossless_and_alternating() {
    common_init();
    for notes in random_texts(0xb10c, 500) {
        let blocks = classify_content_blocks(&notes);
        assert_eq!(rejoin(&blocks), notes, "lossy classification of {notes:?}");
        for pair in blocks.windows(2) {
            assert_ne!(pair[0].kind, pair[1].kind, "adjacent {} blocks in {notes:?}", pair[0].kind);
        }
    }
}

#[test]
fn sql_blocks_are_stable_when_reclassified() {
    let mut inputs = random_texts(42, 500);
    inputs.push(PANEL_NOTES.to_string());
    for notes in &inputs {
        for block in classify_content_blocks(notes).into_iter().filter(|b| b.kind.is_sql()) {
            assert_eq!(
                classify_content_blocks(block.content),
                [ContentBlock::sql(block.content)],
                "sql block split on reclassification: {:?}",
                block.content
            );
        }
    }
}

#[test]
fn annotated_blocks_match_classification() {
    for notes in random_texts(3, 200) {
        let blocks = classify_content_blocks(&notes);
        let annotated = annotate_notes(&notes);
        assert_eq!(annotated.len(), blocks.len());
        for (block, annotated) in blocks.iter().zip(&annotated) {
            assert_eq!(annotated.kind(), block.kind);
            assert_eq!(annotated.content(), block.content);
        }
    }
}
