//! Integration tests for the parsing module.
//!
//! Exercises line filtering, block building and tag extraction together on
//! realistic journal pages.


use pretty_assertions::assert_eq;

use crate::parsing::{
    blocks::build_blocks,
    lines::journal_lines,
    parse_journal,
    tags::{ExportUnit, TagPattern},
};

const JOURNAL: &str = "\
title:: 2025_03_14
- Morning standup
\tcollapsed:: true
\t- #work/acme
\t- discussed the migration plan
\t\t- owner: me
- Lunch
- Read an article on ownership
    - #get/rust
    - ![diagram](../assets/ownership.png)
- #inbox
- Evening
";

fn parse(text: &str) -> Vec<ExportUnit> {
    parse_journal(text, &TagPattern::default()).units
}

#[test]
fn journal_blocks_hold_invariants() {
    let lines = journal_lines(JOURNAL);
    let blocks = build_blocks(&lines);
    invariants::check(&lines, &blocks);
    assert_eq!(blocks.len(), 5);
}

#[test]
fn journal_units_in_source_order() {
    let units = parse(JOURNAL);

    let tags: Vec<&str> = units.iter().map(|u| u.tag_line.as_str()).collect();
    assert_eq!(tags, vec!["\t- #work/acme", "    - #get/rust", "- #inbox"]);

    assert_eq!(units[0].title, "- Morning standup");
    assert_eq!(
        units[0].body,
        "- Morning standup\n\t- #work/acme\n\t- discussed the migration plan\n\t\t- owner: me"
    );
    assert_eq!(units[2].title, "- #inbox");
    assert_eq!(units[2].body, "- #inbox");
}

#[test]
fn collapsed_directives_never_reach_bodies() {
    for unit in parse(JOURNAL) {
        assert!(!unit.body.contains("collapsed::"), "{:?}", unit.body);
    }
}

#[test]
fn empty_document() {
    assert!(parse("").is_empty());
    assert!(parse_journal("", &TagPattern::default()).blocks.is_empty());
}

#[test]
fn no_bullets_no_units() {
    let text = "#work\nsome prose\n\n#ref/books\n";
    let parsed = parse_journal(text, &TagPattern::default());
    assert!(parsed.blocks.is_empty());
    assert!(parsed.units.is_empty());
}

#[test]
fn single_top_level_block_with_tag_child() {
    let text = "- Project kickoff\n    - #project/apollo\n";
    let units = parse(text);

    assert_eq!(units.len(), 1);
    assert_eq!(units[0].title, "- Project kickoff");
    assert_eq!(units[0].body, "- Project kickoff\n    - #project/apollo");
}

#[test]
fn deep_tagged_block_without_shallower_predecessor() {
    let text = "        - Stray thought\n            - #create\n";
    let units = parse(text);

    assert_eq!(units.len(), 1);
    assert_eq!(units[0].title, "        - Stray thought");
}

#[test]
fn reparsing_a_unit_body_keeps_block_boundaries() {
    let lines = journal_lines(JOURNAL);
    let blocks = build_blocks(&lines);

    for unit in parse(JOURNAL) {
        let reparsed_lines: Vec<&str> = unit.body.split('\n').collect();
        let reparsed = build_blocks(&reparsed_lines);
        invariants::check(&reparsed_lines, &reparsed);

        let original = blocks
            .iter()
            .find(|b| b.first_line() == unit.title)
            .expect("unit title comes from a block");
        assert_eq!(reparsed.len(), 1);
        assert_eq!(reparsed[0].depth, original.depth);
        assert_eq!(reparsed[0].body, original.body);
    }
}

#[test]
fn tab_and_space_indentation_mix() {
    let text = "- Parent\n  \t- #ref\n    - child\n- Next\n";
    let lines = journal_lines(text);
    let blocks = build_blocks(&lines);
    invariants::check(&lines, &blocks);

    let units = parse(text);
    assert_eq!(units.len(), 1);
    assert_eq!(units[0].body, "- Parent\n  \t- #ref\n    - child");
}
