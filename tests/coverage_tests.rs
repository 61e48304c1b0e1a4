//! Example-driven tests for splitting and scoring.
//!
//! These pin down concrete outputs for small inputs, edge cases around
//! whitespace and configuration, and behavior on large documents.

use ragsplit::{
    calc_similarity, split_chinese_text, Chunker, Error, RecursiveChunker, SplitterConfig,
    SIMILARITY_BOOST,
};

// =============================================================================
// Worked examples
// =============================================================================

#[test]
fn hard_cut_without_separators() {
    let chunks = split_chinese_text("Hello world", 5, 0).unwrap();
    // The space is not a separator: cuts land at 5 and 10, then trimming.
    assert_eq!(chunks, ["Hello", "worl", "d"]);
}

#[test]
fn cuts_after_each_full_stop() {
    let chunks = split_chinese_text("A。B。C", 3, 0).unwrap();
    // The remainder "B。C" fits in three characters and is kept whole.
    assert_eq!(chunks, ["A。", "B。C"]);

    let chunks = split_chinese_text("A。B。C", 2, 0).unwrap();
    assert_eq!(chunks, ["A。", "B。", "C"]);
}

#[test]
fn empty_and_blank_inputs_yield_nothing() {
    assert!(split_chinese_text("", 10, 0).unwrap().is_empty());
    assert!(split_chinese_text("   ", 10, 0).unwrap().is_empty());
    assert!(split_chinese_text(&" \n".repeat(50), 10, 3).unwrap().is_empty());
}

#[test]
fn overlap_arithmetic_on_hard_cuts() {
    let chunks = split_chinese_text("ABCDEFGHIJ", 4, 2).unwrap();
    assert_eq!(chunks, ["ABCD", "CDEF", "EFGH", "GHIJ"]);
}

#[test]
fn parallel_vectors_score_the_boost() {
    let score = calc_similarity(&[1.0, 0.0], &[1.0, 0.0], 2).unwrap();
    assert!((score - SIMILARITY_BOOST).abs() < 1e-6);
}

// =============================================================================
// Separator priority
// =============================================================================

#[test]
fn paragraph_break_preferred_over_sentence_end() {
    // A later "。" also fits in the first window, but "\n\n" ranks higher.
    let text = "退货政策。\n\n物流费用。仓储费和配送费。";
    let chunks = split_chinese_text(text, 14, 0).unwrap();
    assert_eq!(chunks, ["退货政策。", "物流费用。仓储费和配送费。"]);
}

#[test]
fn line_break_preferred_over_comma() {
    let text = "第一行\n第二行，还有更多内容";
    let chunks = split_chinese_text(text, 8, 0).unwrap();
    assert_eq!(chunks[0], "第一行");
}

#[test]
fn ideographic_comma_is_last_resort() {
    let text = "苹果、香蕉、橙子、葡萄、西瓜";
    let chunks = split_chinese_text(text, 6, 0).unwrap();
    assert_eq!(chunks, ["苹果、香蕉、", "橙子、葡萄、", "西瓜"]);
}

#[test]
fn blank_chunks_between_paragraphs_are_dropped() {
    let text = "甲乙丙\n\n\n\n\n\n丁戊己";
    let chunks = split_chinese_text(text, 4, 0).unwrap();
    assert_eq!(chunks, ["甲乙丙", "丁戊己"]);
}

// =============================================================================
// Slab positions
// =============================================================================

#[test]
fn slab_spans_point_at_trimmed_text() {
    let text = "\u{3000}\u{3000}开头有全角空格。\n结尾有换行\n";
    let chunker = RecursiveChunker::chinese(10, 0).unwrap();
    let slabs = chunker.chunk(text);

    assert_eq!(slabs[0].text, "开头有全角空格。");
    assert_eq!(slabs[0].start, "\u{3000}\u{3000}".len());
    for slab in &slabs {
        assert_eq!(&text[slab.span()], slab.text);
    }
}

#[test]
fn overlapping_slabs_share_bytes() {
    let text = "零一二三四五六七八九";
    let chunker = RecursiveChunker::chinese(4, 1).unwrap();
    let slabs = chunker.chunk(text);

    assert_eq!(slabs[0].text, "零一二三");
    assert_eq!(slabs[1].text, "三四五六");
    assert_eq!(slabs[0].end - slabs[1].start, "三".len());
}

// =============================================================================
// Large input
// =============================================================================

#[test]
fn large_document_does_not_exhaust_the_stack() {
    let text = "字".repeat(1_000_000);
    let chunker = RecursiveChunker::chinese(10, 9).unwrap();
    let chunks = chunker.split(&text);

    assert_eq!(chunks.len(), 1_000_000 - 9);
    assert!(chunks.iter().all(|c| c.chars().count() == 10));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn invalid_configuration_is_rejected() {
    assert!(matches!(
        split_chinese_text("abc", 0, 0),
        Err(Error::InvalidChunkSize(0))
    ));
    assert!(matches!(
        split_chinese_text("abc", 5, 5),
        Err(Error::OverlapExceedsSize { size: 5, overlap: 5 })
    ));
    assert!(matches!(
        split_chinese_text("abc", 5, 9),
        Err(Error::OverlapExceedsSize { size: 5, overlap: 9 })
    ));
}

#[test]
fn chunker_from_config() {
    let config = SplitterConfig::from_toml_str(
        r#"
        chunk_size = 6
        overlap = 0
        separators = ["|"]
        "#,
    )
    .unwrap();
    let chunker = RecursiveChunker::from_config(&config).unwrap();

    assert_eq!(chunker.chunk_size(), 6);
    assert_eq!(chunker.separators(), ["|"]);
    assert_eq!(chunker.split("ab|cd|efgh|ij"), ["ab|cd|", "efgh|", "ij"]);
}

#[test]
fn default_config_matches_chinese_preset() {
    let from_config = RecursiveChunker::from_config(&SplitterConfig::default()).unwrap();
    let preset = RecursiveChunker::chinese(500, 50).unwrap();
    let text = "长文本。".repeat(400);

    assert_eq!(from_config.split(&text), preset.split(&text));
}
